use thiserror::Error;

/// Core error type shared across propgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A node is neither a field descriptor nor a field mapping.
    #[error("malformed input at {path}: {message}")]
    MalformedInput { path: String, message: String },
    /// A descriptor annotation is not allowed for the descriptor's kind.
    #[error("invalid configuration for `{kind}` field: {message}")]
    InvalidConfiguration { kind: String, message: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias for results returned by propgen crates.
pub type Result<T> = std::result::Result<T, Error>;
