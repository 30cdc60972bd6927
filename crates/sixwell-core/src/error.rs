//! Core error types for sixwell-core.
//!
//! The engine itself cannot fail: every state transition is total over the
//! typed [`Dimension`](crate::Dimension) set. The only failure mode is an
//! identifier outside that set, which can occur where untyped input (an
//! index or a string key) enters the library.

use thiserror::Error;

/// Core error type for sixwell-core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// The identifier does not name one of the six tracked dimensions.
    ///
    /// This is an integration error on the caller's side and is surfaced
    /// immediately rather than retried -- there is no transient condition
    /// behind it.
    #[error(
        "unknown dimension '{0}' (expected an index 0-5 or one of: \
         social, movement, brain, nutrition, purpose, self-care)"
    )]
    InvalidDimension(String),
}

/// Result type alias for TrackerError
pub type Result<T, E = TrackerError> = std::result::Result<T, E>;
