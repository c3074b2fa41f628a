//! Shared test utilities.

#![allow(dead_code)]

use std::future::Future;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use remote_state::api::{FakeUserApi, User, UserApi};
use remote_state::RemoteError;
use tempfile::TempDir;

/// [`UserApi`] that counts calls before delegating to [`FakeUserApi`].
#[derive(Clone)]
pub struct CountingApi {
    inner: FakeUserApi,
    calls: Arc<AtomicUsize>,
}

impl CountingApi {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: FakeUserApi::new(delay),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl UserApi for CountingApi {
    fn get_user(&self, id: &str) -> impl Future<Output = Result<User, RemoteError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_user(id)
    }
}

pub fn zhang_san() -> User {
    User::new("101", "张三", 23)
}

pub fn li_si() -> User {
    User::new("102", "李四", 24)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
