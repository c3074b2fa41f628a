//! View model wiring the user API into an observable state.

use std::sync::Arc;

use futures_util::StreamExt;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::api::{User, UserApi};
use crate::remote::{run_observed, RemoteResult};
use crate::state::{StateCell, StateReceiver};

/// What a load shows while it is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Start every load from an empty `Loading`.
    #[default]
    Reset,
    /// Carry the best value currently shown into `Loading`.
    KeepLast,
}

/// Holds the user screen state and drives loads into it.
///
/// Loads run on the tokio runtime. Starting a new load cancels the previous
/// one, and dropping the view model cancels whatever is in flight.
pub struct UserViewModel<A: UserApi> {
    api: Arc<A>,
    user: StateCell<RemoteResult<User>>,
    seed_policy: SeedPolicy,
    /// Bumped on every load and cancel. A task only writes while it holds
    /// this lock and the value still matches its own load.
    generation: Arc<Mutex<u64>>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<A: UserApi> UserViewModel<A> {
    pub fn new(api: A) -> Self {
        Self::with_seed_policy(api, SeedPolicy::default())
    }

    pub fn with_seed_policy(api: A, seed_policy: SeedPolicy) -> Self {
        Self {
            api: Arc::new(api),
            user: StateCell::default(),
            seed_policy,
            generation: Arc::new(Mutex::new(0)),
            task: Mutex::new(None),
        }
    }

    /// Subscribe to the user state.
    pub fn user(&self) -> StateReceiver<RemoteResult<User>> {
        self.user.subscribe()
    }

    /// Current user state.
    pub fn current(&self) -> RemoteResult<User> {
        self.user.get()
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        self.seed_policy
    }

    /// Load the user with `id`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn load(&self, id: impl Into<String>) {
        let id = id.into();
        let seed = match self.seed_policy {
            SeedPolicy::Reset => None,
            SeedPolicy::KeepLast => self.user.get().get_or_none(),
        };

        tracing::info!(user_id = %id, has_seed = seed.is_some(), "Loading user");

        let mut task = self.task.lock();
        if let Some(previous) = task.take() {
            previous.abort();
        }
        let load = {
            let mut generation = self.generation.lock();
            *generation += 1;
            *generation
        };

        let api = Arc::clone(&self.api);
        let generation = Arc::clone(&self.generation);
        let user = self.user.clone();
        *task = Some(tokio::spawn(async move {
            let mut states = run_observed(seed, move || async move { api.get_user(&id).await });
            while let Some(state) = states.next().await {
                if !publish(&generation, load, &user, state) {
                    tracing::debug!("Superseded user load dropped its state");
                    return;
                }
            }
        }));
    }

    /// Cancel the in-flight load, if any. The state keeps its last value.
    pub fn clear(&self) {
        *self.generation.lock() += 1;
        if let Some(task) = self.task.lock().take() {
            task.abort();
            tracing::debug!("User load cancelled");
        }
    }
}

/// Write `state` if load `load` is still current. The generation lock is held
/// across the check and the write, so once `clear` or a newer `load` has
/// bumped it, this load cannot write again.
fn publish(
    generation: &Mutex<u64>,
    load: u64,
    user: &StateCell<RemoteResult<User>>,
    state: RemoteResult<User>,
) -> bool {
    let generation = generation.lock();
    if *generation != load {
        return false;
    }
    state.as_ref().on_failure(|err| {
        tracing::warn!(error = %err, "User load failed");
    });
    user.set(state);
    true
}

impl<A: UserApi> Drop for UserViewModel<A> {
    fn drop(&mut self) {
        self.clear();
    }
}
