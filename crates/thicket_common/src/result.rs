//! Common result and error types for the Thicket framework.

/// The standard result type for fallible internal operations.
///
/// `Err` indicates an unrecoverable internal error (a bug in Thicket), not a
/// misuse of the framework. Misuse is described by a diagnostic value from
/// `thicket_diagnostics` and handed to the reporter instead.
pub type ThicketResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug in Thicket, not a problem with the user's suite.
#[derive(Debug, thiserror::Error)]
#[error("internal thicket error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
