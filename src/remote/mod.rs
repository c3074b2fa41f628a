//! Remote call results and the driver that observes them.
//!
//! ```text
//! run_observed(seed, producer)
//!     ├─→ Loading(seed)
//!     └─→ Success(value) | Failure(error)
//! ```
//!
//! - [`RemoteResult`]: immutable lifecycle value with accessors and combinators
//! - [`run_observed`]: lazily runs a producer and streams its lifecycle
//! - [`RemoteError`]: default error payload for failed calls

mod error;
mod observe;
mod result;

pub use error::{RemoteError, NOT_FOUND};
pub use observe::{run_observed, Observed};
pub use result::RemoteResult;
