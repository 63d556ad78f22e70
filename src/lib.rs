//! # fixedpool
//!
//! `fixedpool` is a fixed-size worker thread pool. A callable of any
//! signature is bound into a zero-argument job at submission time, queued
//! FIFO, and executed by one of a bounded set of persistent worker threads.
//! Each submission returns a [`TaskHandle`] through which the submitter
//! collects the result, or the failure, of that task.
//!
//! ## Features
//! - Spawn tasks into a shared queue; idle workers block on a condition
//!   variable instead of spinning.
//! - Blocking ([`TaskHandle::join`]) and non-blocking
//!   ([`TaskHandle::try_join`]) result retrieval per task.
//! - A panic inside a task is captured and surfaced through that task's
//!   handle; the worker thread survives.
//! - Exactly-once shutdown that joins every worker, also triggered when the
//!   pool goes out of scope.
//! - Metrics collection for monitoring pool activity.
//!
//! ## Usage
//!
//! ### Basic usage
//! ```rust
//! use fixedpool::ThreadPoolBuilder;
//!
//! let mut pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();
//!
//! let handle = pool.spawn(|| 2 + 2).unwrap();
//! assert_eq!(handle.join().unwrap(), 4);
//!
//! pool.shutdown().unwrap();
//! ```
//!
//! ### Binding arguments at submission time
//! ```rust
//! use fixedpool::ThreadPoolBuilder;
//!
//! fn square(n: u64) -> u64 {
//!     n * n
//! }
//!
//! let mut pool = ThreadPoolBuilder::new().num_threads(4).build().unwrap();
//!
//! // Arguments are moved into the job when it is submitted, so results can
//! // be collected in submission order even though execution order across
//! // workers is unspecified.
//! let handles: Vec<_> = (0..8)
//!     .map(|i| pool.spawn(move || square(i)).unwrap())
//!     .collect();
//!
//! let squares: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
//! assert_eq!(squares, vec![0, 1, 4, 9, 16, 25, 36, 49]);
//!
//! pool.shutdown().unwrap();
//! ```
//!
//! ### Task failures stay on their own handle
//! ```rust
//! use fixedpool::{PoolError, ThreadPoolBuilder};
//!
//! let mut pool = ThreadPoolBuilder::new().num_threads(2).build().unwrap();
//!
//! let bad = pool.spawn(|| panic!("boom")).unwrap();
//! let good = pool.spawn(|| "still alive").unwrap();
//!
//! assert!(matches!(bad.join(), Err(PoolError::TaskPanicked(_))));
//! assert_eq!(good.join().unwrap(), "still alive");
//!
//! pool.shutdown().unwrap();
//! ```
//!
//! ### Collecting metrics
//! ```rust
//! use fixedpool::metrics::{AtomicMetricsCollector, ThreadPoolMetrics};
//! use fixedpool::ThreadPoolBuilder;
//! use std::sync::Arc;
//!
//! let metrics = Arc::new(ThreadPoolMetrics::new());
//! let collector = Arc::new(AtomicMetricsCollector::new(metrics.clone()));
//!
//! let mut pool = ThreadPoolBuilder::new()
//!     .num_threads(4)
//!     .with_metrics_collector(collector)
//!     .build()
//!     .unwrap();
//!
//! let handles: Vec<_> = (0..5).map(|i| pool.spawn(move || i).unwrap()).collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! pool.shutdown().unwrap();
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.completed_tasks, 5);
//! assert_eq!(snapshot.active_workers, 0);
//! ```

mod errors;
mod macros;
pub mod metrics;
pub mod pool;
mod queue;

pub use errors::PoolError;
pub use pool::task::{BoxedJob, TaskHandle};
pub use pool::{ThreadPool, ThreadPoolBuilder};

/// Runs a set of boxed jobs one after another on the calling thread.
///
/// The sequential baseline for comparing against pooled execution; see the
/// `compare_sequential` demo and the benchmarks.
///
/// # Example
/// ```rust
/// use fixedpool::{run_sequential, BoxedJob};
///
/// let jobs: Vec<BoxedJob> = (0..4)
///     .map(|i| Box::new(move || println!("Job {} executed", i)) as BoxedJob)
///     .collect();
///
/// run_sequential(jobs);
/// ```
pub fn run_sequential(jobs: Vec<BoxedJob>) {
    for job in jobs {
        job();
    }
}
