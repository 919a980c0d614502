//! Task ownership and request ordering for view-models.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::task::JoinSet;
use tracing::warn;

/// Owns the asynchronous work started by one view-model.
///
/// Dropping the scope aborts every task still in flight.
#[derive(Debug, Default)]
pub struct TaskScope {
    tasks: Mutex<JoinSet<()>>,
}

impl TaskScope {
    /// Spawns `task` onto the current Tokio runtime, owned by this scope.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock();
        while let Some(result) = tasks.try_join_next() {
            log_join_error(result);
        }
        tasks.spawn(task);
    }

    /// Waits until every task spawned so far, and any spawned meanwhile,
    /// has finished.
    ///
    /// Cancelling this future aborts the tasks it was waiting on.
    pub async fn wait_idle(&self) {
        loop {
            let mut tasks = std::mem::take(&mut *self.tasks.lock());
            if tasks.is_empty() {
                return;
            }
            while let Some(result) = tasks.join_next().await {
                log_join_error(result);
            }
        }
    }

    /// Returns the number of tasks not yet reaped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Returns true if no task is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn log_join_error(result: Result<(), tokio::task::JoinError>) {
    if let Err(error) = result {
        if error.is_panic() {
            warn!(%error, "view-model task panicked");
        }
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    slot: usize,
}

impl Ticket {
    /// Sequence number of the request.
    #[must_use]
    pub const fn seq(self) -> u64 {
        self.seq
    }
}

/// Monotonic request counter with `SLOTS` kinds of request.
///
/// Each issued request gets a strictly greater sequence number than every
/// request before it. A result is applied only if its request is still
/// the latest overall; the per-slot record tells whether a superseded
/// request is still the newest of its own kind.
#[derive(Debug)]
pub struct RequestSequence<const SLOTS: usize> {
    issued: AtomicU64,
    latest: [AtomicU64; SLOTS],
}

impl<const SLOTS: usize> Default for RequestSequence<SLOTS> {
    fn default() -> Self {
        Self {
            issued: AtomicU64::new(0),
            latest: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }
}

impl<const SLOTS: usize> RequestSequence<SLOTS> {
    /// Issues a ticket for a request of kind `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= SLOTS`.
    pub fn issue(&self, slot: usize) -> Ticket {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.latest[slot].store(seq, Ordering::SeqCst);
        Ticket { seq, slot }
    }

    /// Returns true if no request of any kind was issued after `ticket`.
    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.seq
    }

    /// Returns true if no request of the same kind was issued after `ticket`.
    #[must_use]
    pub fn is_latest_of_kind(&self, ticket: Ticket) -> bool {
        self.latest[ticket.slot].load(Ordering::SeqCst) == ticket.seq
    }
}
