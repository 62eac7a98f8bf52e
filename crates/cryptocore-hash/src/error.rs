/// Errors produced by identity computation and digest parsing.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// Artifact content was empty. Raised before any hashing happens.
    #[error("invalid input: artifact content cannot be empty")]
    InvalidInput,

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidHashLength { expected: usize, actual: usize },

    #[error("unsupported digest length {actual} bytes (expected 32, 48 or 64)")]
    UnsupportedDigestLength { actual: usize },

    #[error("unknown hash algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("unknown identity framing '{0}'")]
    UnknownFraming(String),

    #[error("metadata encoding failed: {0}")]
    Metadata(#[from] serde_json::Error),
}
