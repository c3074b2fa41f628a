//! Observable holder for the current view state.
//!
//! A [`StateCell`] keeps exactly one value, the latest one written. Readers
//! subscribe and are woken on every write; intermediate values written while
//! a reader is not looking are skipped, only the newest is seen.

use std::sync::Arc;

use futures_core::Stream;
use futures_util::StreamExt;
use tokio::sync::watch;

use crate::ui::UiState;

/// Single-writer cell holding the current state.
///
/// Cloning shares the same cell.
#[derive(Clone)]
pub struct StateCell<S: UiState> {
    tx: Arc<watch::Sender<S>>,
}

impl<S: UiState> StateCell<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Replace the current state and wake subscribers.
    ///
    /// Subscribers are woken even if the new state equals the old one.
    pub fn set(&self, state: S) {
        self.tx.send_replace(state);
    }

    /// Subscribe to future writes. The current state counts as already seen.
    pub fn subscribe(&self) -> StateReceiver<S> {
        StateReceiver {
            rx: self.tx.subscribe(),
        }
    }

    /// Write every item of `states` into the cell, in order, until it ends.
    pub async fn collect_from<St>(&self, mut states: St)
    where
        St: Stream<Item = S> + Unpin,
    {
        while let Some(state) = states.next().await {
            self.set(state);
        }
    }
}

impl<S: UiState> Default for StateCell<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Read side of a [`StateCell`].
pub struct StateReceiver<S: UiState> {
    rx: watch::Receiver<S>,
}

impl<S: UiState> StateReceiver<S> {
    /// Latest state, without marking it seen.
    pub fn current(&self) -> S {
        self.rx.borrow().clone()
    }

    /// Wait for the next write and return the state it left behind.
    ///
    /// Returns `None` once every handle to the cell is gone.
    pub async fn changed(&mut self) -> Option<S> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Wait until the state satisfies `done`, returning that state.
    ///
    /// The current state is checked first.
    pub async fn wait_until(&mut self, mut done: impl FnMut(&S) -> bool) -> Option<S> {
        let current = self.rx.borrow_and_update().clone();
        if done(&current) {
            return Some(current);
        }
        loop {
            let state = self.changed().await?;
            if done(&state) {
                return Some(state);
            }
        }
    }
}
