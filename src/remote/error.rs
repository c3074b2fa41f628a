//! Error value carried by failed remote calls.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code used when a requested resource does not exist.
pub const NOT_FOUND: i32 = 404;

/// A failed remote call, described by a code and an optional message.
///
/// The driver never inspects it; it only travels inside
/// [`RemoteResult::Failure`](super::RemoteResult::Failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("remote error: code={code}{}", display_message(.message))]
pub struct RemoteError {
    pub code: i32,
    pub message: Option<String>,
}

fn display_message(message: &Option<String>) -> String {
    match message.as_deref() {
        Some(msg) if !msg.is_empty() => format!(" message={}", msg),
        _ => String::new(),
    }
}

impl RemoteError {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            message: None,
        }
    }

    pub fn with_message(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
        }
    }

    pub fn not_found() -> Self {
        Self::new(NOT_FOUND)
    }

    pub fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND
    }
}
