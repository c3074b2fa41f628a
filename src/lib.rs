//! Observable lifecycle for asynchronous remote calls.
//!
//! The core is [`remote`]: a three-way [`RemoteResult`] and the
//! [`run_observed`] driver that turns one call into `Loading` followed by
//! `Success` or `Failure`. The remaining modules wire it into a small
//! view-model demo: an injected [`api::UserApi`], a [`state::StateCell`]
//! holding the current state, and text rendering in [`ui`].

pub mod api;
pub mod config;
pub mod logging;
pub mod remote;
pub mod state;
pub mod ui;
pub mod viewmodel;

pub use remote::{run_observed, RemoteError, RemoteResult};
