//! Error types for the thread pool.
//!
//! Lifecycle misuse (submitting to or re-shutting a dead pool, building with
//! zero workers) fails at the misusing call. Task failures are surfaced
//! lazily, through the task's own handle.

/// Represents errors that can occur in the thread pool.
#[derive(Debug)]
pub enum PoolError {
    /// The pool has been shut down. No new tasks are accepted and shutdown
    /// cannot be requested a second time.
    Shutdown,
    /// The pool was configured with zero worker threads. Such a pool could
    /// never make progress, so construction refuses it.
    NoWorkers,
    /// The task panicked while executing. Carries the panic message when one
    /// could be extracted from the payload.
    TaskPanicked(String),
    /// The task was still queued when the pool was torn down and was dropped
    /// without ever running.
    TaskDiscarded,
}

impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolError::Shutdown => write!(f, "thread pool is shut down"),
            PoolError::NoWorkers => write!(f, "thread pool requires at least one worker thread"),
            PoolError::TaskPanicked(msg) => write!(f, "task panicked: {}", msg),
            PoolError::TaskDiscarded => write!(f, "task was discarded before it could run"),
        }
    }
}

impl std::error::Error for PoolError {}
