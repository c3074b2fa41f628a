//! Three-way lifecycle value for an asynchronous fetch.

use serde::{Deserialize, Serialize};

use super::error::RemoteError;

/// Outcome of a remote call as seen by an observer.
///
/// A value is never mutated in place; a new state replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum RemoteResult<T, E = RemoteError> {
    /// Call in flight. Carries the last successful value, if the caller had one.
    Loading(Option<T>),
    /// Call completed with a value.
    Success(T),
    /// Call failed.
    Failure(E),
}

impl<T, E> Default for RemoteResult<T, E> {
    fn default() -> Self {
        Self::Loading(None)
    }
}

impl<T, E> From<Result<T, E>> for RemoteResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> RemoteResult<T, E> {
    pub fn loading(value: Option<T>) -> Self {
        Self::Loading(value)
    }

    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the payloads without consuming the state.
    pub fn as_ref(&self) -> RemoteResult<&T, &E> {
        match self {
            Self::Loading(value) => RemoteResult::Loading(value.as_ref()),
            Self::Success(value) => RemoteResult::Success(value),
            Self::Failure(error) => RemoteResult::Failure(error),
        }
    }

    /// Best value available so far: the success value, or the one retained by
    /// `Loading`. `None` for failures.
    pub fn value(&self) -> Option<&T> {
        self.as_ref().get_or_none()
    }

    pub fn error(&self) -> Option<&E> {
        self.as_ref().error_or_none()
    }

    /// Owned counterpart of [`RemoteResult::value`].
    pub fn get_or_none(self) -> Option<T> {
        match self {
            Self::Loading(value) => value,
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn error_or_none(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Loading(_) | Self::Success(_) => None,
        }
    }

    /// Returns the success value directly, otherwise asks the matching
    /// callback for one. Exactly one path runs.
    pub fn get_or_else(
        self,
        on_loading: impl FnOnce(Option<T>) -> T,
        on_failure: impl FnOnce(E) -> T,
    ) -> T {
        match self {
            Self::Loading(value) => on_loading(value),
            Self::Success(value) => value,
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Same as [`RemoteResult::get_or_none`] with a fallback. A `Loading`
    /// without a retained value falls back too.
    pub fn get_or_default(self, default: T) -> T {
        self.get_or_none().unwrap_or(default)
    }

    /// Reduce the state to a single value by dispatching on the variant.
    ///
    /// This is the intended way to render a state: every variant must be
    /// handled, and exactly one callback is invoked.
    pub fn fold<R>(
        self,
        on_loading: impl FnOnce(Option<T>) -> R,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Self::Loading(value) => on_loading(value),
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Transform the payload. A retained `Loading` value is transformed as
    /// well; failures pass through and `transform` is not called.
    pub fn map<R>(self, transform: impl FnOnce(T) -> R) -> RemoteResult<R, E> {
        match self {
            Self::Loading(value) => RemoteResult::Loading(value.map(transform)),
            Self::Success(value) => RemoteResult::Success(transform(value)),
            Self::Failure(error) => RemoteResult::Failure(error),
        }
    }

    pub fn map_err<F>(self, transform: impl FnOnce(E) -> F) -> RemoteResult<T, F> {
        match self {
            Self::Loading(value) => RemoteResult::Loading(value),
            Self::Success(value) => RemoteResult::Success(value),
            Self::Failure(error) => RemoteResult::Failure(transform(error)),
        }
    }

    /// Run `action` if the state is `Loading`, then hand the state back.
    pub fn on_loading(self, action: impl FnOnce(Option<&T>)) -> Self {
        if let Self::Loading(value) = &self {
            action(value.as_ref());
        }
        self
    }

    /// Run `action` if the state is `Success`, then hand the state back.
    pub fn on_success(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Run `action` if the state is `Failure`, then hand the state back.
    pub fn on_failure(self, action: impl FnOnce(&E)) -> Self {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }
}
