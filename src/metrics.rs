//! Metrics collection for the thread pool.
//!
//! The pool reports lifecycle events through the [`MetricsCollector`] trait;
//! [`AtomicMetricsCollector`] is the default implementation, counting events
//! into a shared [`ThreadPoolMetrics`].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A trait for collecting metrics from the thread pool.
///
/// Implementations receive hooks for task submission, execution, and worker
/// lifecycle changes. Hooks are called from submitter and worker threads and
/// must not block.
pub trait MetricsCollector: Send + Sync {
    /// Called when a task is accepted by `spawn`.
    fn on_task_submitted(&self);
    /// Called when a worker picks a task up.
    fn on_task_started(&self);
    /// Called when a task finishes, including tasks whose panic was captured.
    fn on_task_completed(&self);
    /// Called when a worker thread is spawned.
    fn on_worker_started(&self);
    /// Called when a worker thread exits its loop.
    fn on_worker_stopped(&self);
}

/// Atomic counters describing the pool's current activity.
pub struct ThreadPoolMetrics {
    /// Tasks accepted but not yet picked up by a worker.
    pub queued_tasks: AtomicUsize,
    /// Tasks currently executing.
    pub running_tasks: AtomicUsize,
    /// Tasks that have finished executing.
    pub completed_tasks: AtomicUsize,
    /// Worker threads currently alive.
    pub active_workers: AtomicUsize,
}

/// A point-in-time copy of [`ThreadPoolMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub queued_tasks: usize,
    pub running_tasks: usize,
    pub completed_tasks: usize,
    pub active_workers: usize,
}

impl ThreadPoolMetrics {
    pub fn new() -> Self {
        Self {
            queued_tasks: AtomicUsize::new(0),
            running_tasks: AtomicUsize::new(0),
            completed_tasks: AtomicUsize::new(0),
            active_workers: AtomicUsize::new(0),
        }
    }

    /// Reads all counters at once.
    ///
    /// Each counter is loaded independently, so a snapshot taken while the
    /// pool is busy may straddle an in-flight transition.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queued_tasks: self.queued_tasks.load(Ordering::SeqCst),
            running_tasks: self.running_tasks.load(Ordering::SeqCst),
            completed_tasks: self.completed_tasks.load(Ordering::SeqCst),
            active_workers: self.active_workers.load(Ordering::SeqCst),
        }
    }
}

impl Default for ThreadPoolMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// The default [`MetricsCollector`], backed by an `Arc<ThreadPoolMetrics>`
/// so the counters can be read while the pool is running.
pub struct AtomicMetricsCollector {
    pub metrics: Arc<ThreadPoolMetrics>,
}

impl AtomicMetricsCollector {
    pub fn new(metrics: Arc<ThreadPoolMetrics>) -> Self {
        Self { metrics }
    }
}

impl MetricsCollector for AtomicMetricsCollector {
    fn on_task_submitted(&self) {
        self.metrics.queued_tasks.fetch_add(1, Ordering::SeqCst);
    }

    fn on_task_started(&self) {
        self.metrics.queued_tasks.fetch_sub(1, Ordering::SeqCst);
        self.metrics.running_tasks.fetch_add(1, Ordering::SeqCst);
    }

    fn on_task_completed(&self) {
        self.metrics.running_tasks.fetch_sub(1, Ordering::SeqCst);
        self.metrics.completed_tasks.fetch_add(1, Ordering::SeqCst);
    }

    fn on_worker_started(&self) {
        self.metrics.active_workers.fetch_add(1, Ordering::SeqCst);
    }

    fn on_worker_stopped(&self) {
        self.metrics.active_workers.fetch_sub(1, Ordering::SeqCst);
    }
}
