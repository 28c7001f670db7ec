//! Error taxonomy for catalog operations.
//!
//! Every failure that can reach a caller is one of these variants; the
//! engine recovers each at the boundary where it occurs so that callers
//! only ever see a message they can surface. The single exception is
//! cache writes, which are logged and dropped since the local cache is a
//! convenience mirror, never the source of truth.

use thiserror::Error;

/// Errors surfaced by the catalog engine.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A form field is missing or invalid. No network call was made.
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The remote repository was unreachable or returned an error.
    /// Prior state is preserved; retry is user-initiated.
    #[error("network error: {0}")]
    Network(String),

    /// The asset store rejected an upload. The enclosing create/update
    /// aborts as a unit; no partial record is persisted.
    #[error("upload failed: {0}")]
    Upload(String),

    /// A referenced product id does not resolve.
    #[error("not found: {0}")]
    NotFound(String),

    /// The session is not an administrator session.
    #[error("administrator access required")]
    Unauthorized,

    /// A submission is already in flight for the open form.
    #[error("a submission is already in flight")]
    Busy,
}

impl StoreError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
