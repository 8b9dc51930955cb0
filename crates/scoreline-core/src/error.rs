use thiserror::Error;

/// Top-level error type for scoreline.
#[derive(Debug, Error)]
pub enum ScorelineError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Durable storage backend error.
    #[error("storage error: {0}")]
    Storage(String),

    /// A persisted entry could not be turned back into a mapping.
    #[error("corrupt entry {key}: {reason}")]
    CorruptEntry { key: String, reason: String },

    /// A fixture record without the fields learning needs.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// An import blob that is not a mapping snapshot at all.
    #[error("import error: {0}")]
    Import(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
