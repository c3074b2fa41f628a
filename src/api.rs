//! User lookup API and its in-memory implementation.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::remote::RemoteError;

/// A user record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}

/// Source of user records.
///
/// Implementations are handed to the view model explicitly.
pub trait UserApi: Send + Sync + 'static {
    /// Fetch the user with `id`.
    ///
    /// # Errors
    /// Fails with a [`RemoteError`]; code 404 when the user does not exist.
    fn get_user(&self, id: &str) -> impl Future<Output = Result<User, RemoteError>> + Send;
}

/// In-memory [`UserApi`] with simulated latency.
#[derive(Debug, Clone)]
pub struct FakeUserApi {
    users: HashMap<String, User>,
    delay: Duration,
}

impl FakeUserApi {
    /// Create an API serving the built-in directory after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self::with_users(
            [
                User::new("101", "张三", 23),
                User::new("102", "李四", 24),
                User::new("103", "王五", 25),
            ],
            delay,
        )
    }

    pub fn with_users(users: impl IntoIterator<Item = User>, delay: Duration) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.id.clone(), user))
                .collect(),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FakeUserApi {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl UserApi for FakeUserApi {
    fn get_user(&self, id: &str) -> impl Future<Output = Result<User, RemoteError>> + Send {
        let found = self.users.get(id).cloned();
        let delay = self.delay;
        let id = id.to_string();
        async move {
            tokio::time::sleep(delay).await;
            found.ok_or_else(|| {
                tracing::debug!(user_id = %id, "User not found");
                RemoteError::not_found()
            })
        }
    }
}
