// crates/countrypick-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the file-backed collaborators.
///
/// The organizer, collator, search engine and recorder never fail: unknown
/// codes are omitted instead of reported. Only loading and persisting data
/// can produce a `PickerError`.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PickerError>;
