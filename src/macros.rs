//! # Macros for `fixedpool`
//!
//! Convenience macros over the pool API: [`submit!`](crate::submit) for
//! spawning a callable with an argument list, and
//! [`log_metrics!`](crate::log_metrics) for printing a metrics snapshot.

/// Submits a callable to the pool, optionally with an argument list.
///
/// `submit!(pool, f, a, b)` expands to `pool.spawn(move || f(a, b))`: the
/// arguments are moved into the job, so pass owned values (or clones) rather
/// than references to caller-stack data.
///
/// # Examples
/// ```rust
/// use fixedpool::{submit, ThreadPoolBuilder};
///
/// fn scale(value: u64, factor: u64) -> u64 {
///     value * factor
/// }
///
/// let mut pool = ThreadPoolBuilder::new().num_threads(2).build().unwrap();
///
/// // Spawn a ready-made closure
/// let doubled = submit!(pool, || 2 * 2).unwrap();
///
/// // Or a function plus its arguments
/// let scaled = submit!(pool, scale, 21, 2).unwrap();
///
/// assert_eq!(doubled.join().unwrap(), 4);
/// assert_eq!(scaled.join().unwrap(), 42);
/// pool.shutdown().unwrap();
/// ```
#[macro_export]
macro_rules! submit {
    ($pool:expr, $task:expr) => {
        $pool.spawn($task)
    };
    ($pool:expr, $f:expr, $($arg:expr),+ $(,)?) => {
        $pool.spawn(move || ($f)($($arg),+))
    };
}

/// Prints the current metrics of the thread pool.
///
/// # Example
/// ```rust
/// use fixedpool::{log_metrics, ThreadPoolBuilder};
/// use fixedpool::metrics::{AtomicMetricsCollector, ThreadPoolMetrics};
/// use std::sync::Arc;
///
/// let metrics = Arc::new(ThreadPoolMetrics::new());
/// let collector = Arc::new(AtomicMetricsCollector::new(metrics.clone()));
/// let mut pool = ThreadPoolBuilder::new()
///     .num_threads(2)
///     .with_metrics_collector(collector)
///     .build()
///     .unwrap();
///
/// log_metrics!(metrics);
/// pool.shutdown().unwrap();
/// ```
#[macro_export]
macro_rules! log_metrics {
    ($metrics:expr) => {{
        let snapshot = $metrics.snapshot();
        println!("Queued tasks: {}", snapshot.queued_tasks);
        println!("Running tasks: {}", snapshot.running_tasks);
        println!("Completed tasks: {}", snapshot.completed_tasks);
        println!("Active workers: {}", snapshot.active_workers);
    }};
}
