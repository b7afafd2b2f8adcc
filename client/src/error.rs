//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! None of these are fatal to the page. Validation and copy failures surface
//! as a transient acknowledgement next to the control that caused them;
//! remote failures always degrade to static fallback content.

/// Bad input shape or value: unknown category, unknown id, malformed email.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("duplicate entry id: {0}")]
    DuplicateId(String),
    #[error("unknown entry id: {0}")]
    UnknownId(String),
    #[error("entry {id} has no field {field}")]
    UnknownField { id: String, field: String },
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
    #[error("invalid sort mode: {0}")]
    InvalidSortMode(String),
    #[error("quote index {index} out of range (0..{len})")]
    QuoteOutOfRange { index: usize, len: usize },
    #[error("email is required")]
    MissingEmail,
    #[error("invalid email address")]
    InvalidEmail,
}

/// Both clipboard mechanisms failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("clipboard write failed (primary: {primary}; fallback: {fallback})")]
pub struct CopyError {
    pub primary: String,
    pub fallback: String,
}

/// A backend call failed, returned an unusable shape, or timed out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("response parse failed: {0}")]
    Parse(String),
    #[error("timed out after {secs}s")]
    Timeout { secs: u64 },
    #[error("not available outside the browser")]
    Unavailable,
}

/// Failures of directory operations that touch the clipboard.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Copy(#[from] CopyError),
}
