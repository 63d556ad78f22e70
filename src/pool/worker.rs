//! Worker logic for the thread pool.

use std::sync::Arc;
use std::thread;

use crate::metrics::MetricsCollector;
use crate::queue::JobQueue;

pub(crate) struct WorkerHandle {
    thread: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    pub fn new(thread: thread::JoinHandle<()>) -> Self {
        Self {
            thread: Some(thread),
        }
    }

    pub fn join(&mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Worker thread main loop.
///
/// Alternates between blocking on the queue and executing the popped job
/// until the queue reports shutdown. Jobs run outside the queue lock, so the
/// other workers can dequeue concurrently. Panics inside a job are caught by
/// the job's own boundary; a panic reaching this loop is a pool defect and
/// is deliberately left to kill the thread.
pub(crate) fn worker_loop(queue: Arc<JobQueue>, metrics: Option<Arc<dyn MetricsCollector>>) {
    while let Some(job) = queue.pop_blocking() {
        if let Some(m) = &metrics {
            m.on_task_started();
        }

        job();

        if let Some(m) = &metrics {
            m.on_task_completed();
        }
    }

    if let Some(m) = &metrics {
        m.on_worker_stopped();
    }
}
