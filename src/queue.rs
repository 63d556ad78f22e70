//! Shared job queue for the thread pool.
//!
//! Invariant: the pending-job FIFO and the shutdown flag are one logical
//! unit. Both are read and written under the same mutex, and every predicate
//! the condition variable waits on re-tests both.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use crate::errors::PoolError;
use crate::pool::task::BoxedJob;

struct QueueState {
    jobs: VecDeque<BoxedJob>,
    shutdown: bool,
}

/// Mutex-and-condvar guarded FIFO of pending jobs plus the lifecycle flag.
pub(crate) struct JobQueue {
    state: Mutex<QueueState>,
    available: Condvar,
}

impl JobQueue {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                jobs: VecDeque::new(),
                shutdown: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Appends a job and wakes one idle worker.
    ///
    /// Exactly one job became available, so exactly one waiter is notified.
    /// Fails with [`PoolError::Shutdown`] once [`close`](Self::close) has run.
    pub fn push(&self, job: BoxedJob) -> Result<(), PoolError> {
        let mut state = self.state.lock().unwrap();
        if state.shutdown {
            return Err(PoolError::Shutdown);
        }
        state.jobs.push_back(job);
        drop(state);
        self.available.notify_one();
        Ok(())
    }

    /// Blocks until a job is available or the queue has been closed.
    ///
    /// Returns `None` once the shutdown flag is observed, even if jobs remain
    /// queued; leftover jobs are reclaimed by [`take_pending`](Self::take_pending)
    /// during teardown. The returned job must be executed after the lock is
    /// released, which happens on return.
    pub fn pop_blocking(&self) -> Option<BoxedJob> {
        let mut state = self.state.lock().unwrap();
        loop {
            if state.shutdown {
                return None;
            }
            if let Some(job) = state.jobs.pop_front() {
                return Some(job);
            }
            state = self.available.wait(state).unwrap();
        }
    }

    /// Sets the shutdown flag and wakes every waiting worker, each of which
    /// must re-evaluate its termination condition.
    ///
    /// Returns whether this call performed the transition; `false` means the
    /// queue was already closed. The flag never reverts.
    pub fn close(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.shutdown {
            return false;
        }
        state.shutdown = true;
        drop(state);
        self.available.notify_all();
        true
    }

    /// Removes and returns every job still queued.
    ///
    /// Called after the workers have joined; dropping the returned jobs drops
    /// their result senders, which is how abandoned submissions become
    /// observable as [`PoolError::TaskDiscarded`].
    pub fn take_pending(&self) -> Vec<BoxedJob> {
        let mut state = self.state.lock().unwrap();
        state.jobs.drain(..).collect()
    }
}
