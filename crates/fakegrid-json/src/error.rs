use thiserror::Error;

/// Errors from byte-safe JSON encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A byte sequence was not valid UTF-8 in strict mode.
    #[error("byte sequence is not valid UTF-8 (first invalid byte at offset {offset})")]
    NonUtf8 { offset: usize },

    /// The converted structure could not be serialized to JSON text.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
