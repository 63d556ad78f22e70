//! The fixed-size worker pool: construction, submission, shutdown.

pub mod task;
mod worker;

use std::sync::Arc;

use crate::errors::PoolError;
use crate::metrics::MetricsCollector;
use crate::queue::JobQueue;

use task::{package_task, TaskHandle};
use worker::{worker_loop, WorkerHandle};

/// A fixed set of persistent worker threads fed from one shared FIFO queue.
///
/// The worker count is fixed at construction. Submitted tasks become eligible
/// for execution in submission order, but completion order across workers is
/// not guaranteed. Dropping the pool shuts it down; see [`shutdown`](Self::shutdown)
/// for what happens to jobs still queued at that point.
pub struct ThreadPool {
    queue: Arc<JobQueue>,
    workers: Vec<WorkerHandle>,
    metrics_collector: Option<Arc<dyn MetricsCollector>>,
}

impl ThreadPool {
    /// Shorthand for `ThreadPoolBuilder::new().num_threads(n).build()`.
    pub fn new(num_threads: usize) -> Result<Self, PoolError> {
        ThreadPoolBuilder::new().num_threads(num_threads).build()
    }

    /// Submits a callable for execution on the pool and returns the handle
    /// observing its result.
    ///
    /// The callable and its captures are moved into the job now; a worker
    /// executes it exactly once, unless the pool is torn down while the job
    /// is still queued. Each submission appends one job and wakes one idle
    /// worker.
    ///
    /// Fails with [`PoolError::Shutdown`] once [`shutdown`](Self::shutdown)
    /// has run.
    pub fn spawn<F, T>(&self, f: F) -> Result<TaskHandle<T>, PoolError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (job, handle) = package_task(f);
        self.queue.push(job)?;

        if let Some(m) = &self.metrics_collector {
            m.on_task_submitted();
        }
        Ok(handle)
    }

    /// Shuts the pool down and blocks until every worker thread has joined.
    ///
    /// No submissions are accepted once the flag is set. A worker already
    /// executing a job finishes it; jobs still queued are dropped without
    /// running, and joining their handles reports
    /// [`PoolError::TaskDiscarded`]. Callers that need every submitted task
    /// to finish must join the handles before shutting down.
    ///
    /// A second call fails with [`PoolError::Shutdown`].
    pub fn shutdown(&mut self) -> Result<(), PoolError> {
        if !self.queue.close() {
            return Err(PoolError::Shutdown);
        }
        for worker in &mut self.workers {
            worker.join();
        }
        drop(self.queue.take_pending());
        Ok(())
    }

    /// Number of worker threads the pool was built with.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}

impl Drop for ThreadPool {
    /// Runs the shutdown path on every scope exit, including early returns
    /// and unwinding callers. A no-op if `shutdown` was already called.
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

/// Builder for [`ThreadPool`].
///
/// Defaults to one worker per logical CPU and no metrics collector.
pub struct ThreadPoolBuilder {
    num_threads: usize,
    metrics_collector: Option<Arc<dyn MetricsCollector>>,
}

impl ThreadPoolBuilder {
    pub fn new() -> Self {
        Self {
            num_threads: num_cpus::get(),
            metrics_collector: None,
        }
    }

    pub fn num_threads(mut self, n: usize) -> Self {
        self.num_threads = n;
        self
    }

    pub fn with_metrics_collector(mut self, collector: Arc<dyn MetricsCollector>) -> Self {
        self.metrics_collector = Some(collector);
        self
    }

    /// Spawns the worker threads and hands back the running pool.
    ///
    /// Fails with [`PoolError::NoWorkers`] when configured with zero
    /// threads.
    pub fn build(self) -> Result<ThreadPool, PoolError> {
        if self.num_threads == 0 {
            return Err(PoolError::NoWorkers);
        }

        let queue = Arc::new(JobQueue::new());
        let mut workers = Vec::with_capacity(self.num_threads);

        for _ in 0..self.num_threads {
            let queue = Arc::clone(&queue);
            let metrics_collector = self.metrics_collector.clone();
            let handle = std::thread::spawn(move || worker_loop(queue, metrics_collector));
            workers.push(WorkerHandle::new(handle));

            if let Some(m) = &self.metrics_collector {
                m.on_worker_started();
            }
        }

        Ok(ThreadPool {
            queue,
            workers,
            metrics_collector: self.metrics_collector,
        })
    }
}

impl Default for ThreadPoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}
