//! Single-writer observable state container.

use tokio::sync::watch;

/// Holds one state value and notifies subscribers when it changes.
///
/// Readers get cloned snapshots; the only way to change the value is
/// [`StateStore::update`], which applies a mutation atomically and
/// publishes the result as a whole new value.
#[derive(Debug)]
pub struct StateStore<S> {
    sender: watch::Sender<S>,
}

impl<S> StateStore<S>
where
    S: Clone + PartialEq,
{
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            sender: watch::Sender::new(initial),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> S {
        self.sender.borrow().clone()
    }

    /// Returns a receiver that observes every published state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    /// Applies `mutate` to the state.
    ///
    /// Subscribers are only notified if the state actually changed.
    /// Returns whether it did.
    pub fn update(&self, mutate: impl FnOnce(&mut S)) -> bool {
        self.sender.send_if_modified(|state| {
            let before = state.clone();
            mutate(state);
            *state != before
        })
    }
}

impl<S> Default for StateStore<S>
where
    S: Clone + PartialEq + Default,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}
