//! Task abstraction for the thread pool.
//!
//! [`package_task`] erases a caller-supplied callable into a [`BoxedJob`]
//! paired with the [`TaskHandle`] that observes its result. The job owns the
//! write side of a one-shot channel and fulfills it exactly once, with either
//! the return value or the caught panic payload.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crossbeam::channel::{bounded, Receiver, TryRecvError};

use crate::errors::PoolError;

/// The type-erased, zero-argument unit of execution stored in the job queue.
pub type BoxedJob = Box<dyn FnOnce() + Send + 'static>;

/// Read side of the one-shot result slot paired with a submitted task.
///
/// Obtained from [`ThreadPool::spawn`](crate::ThreadPool::spawn). Dropping
/// the handle discards the result but does not affect the task.
pub struct TaskHandle<T> {
    receiver: Receiver<std::thread::Result<T>>,
}

impl<T> TaskHandle<T> {
    /// Blocks until the task has run and returns its value.
    ///
    /// A panic inside the task surfaces as [`PoolError::TaskPanicked`]. If
    /// the pool was torn down while the task was still queued, the job is
    /// dropped unexecuted and this returns [`PoolError::TaskDiscarded`].
    pub fn join(self) -> Result<T, PoolError> {
        match self.receiver.recv() {
            Ok(result) => settle(result),
            Err(_) => Err(PoolError::TaskDiscarded),
        }
    }

    /// Non-blocking probe for the result.
    ///
    /// Returns `None` while the task has not finished. The result is
    /// consumed: after `Some` is returned once, later calls see an empty
    /// channel.
    pub fn try_join(&self) -> Option<Result<T, PoolError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(settle(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(PoolError::TaskDiscarded)),
        }
    }
}

fn settle<T>(result: std::thread::Result<T>) -> Result<T, PoolError> {
    result.map_err(|payload| PoolError::TaskPanicked(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}

/// Packages a callable into an erased job plus the handle for its result.
///
/// The callable and everything it captured are moved into the job here, at
/// submission time; nothing is re-evaluated when a worker picks the job up.
/// The `catch_unwind` boundary keeps a panicking task from unwinding the
/// worker thread that runs it.
pub(crate) fn package_task<F, T>(f: F) -> (BoxedJob, TaskHandle<T>)
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = bounded(1);
    let job = Box::new(move || {
        let result = panic::catch_unwind(AssertUnwindSafe(f));
        let _ = tx.send(result);
    });
    (job, TaskHandle { receiver: rx })
}
