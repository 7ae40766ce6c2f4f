// Error types module

use thiserror::Error;

/// Centralized error type for URL generation
///
/// Invalid processing options never produce an error; they are dropped by
/// the builder. Only configuration problems and signature checks surface
/// here.
#[derive(Error, Debug)]
pub enum ImgproxyError {
    /// Signing key is not valid hex
    #[error("Key expected to be hex-encoded string: {0}")]
    InvalidKey(#[source] hex::FromHexError),

    /// Signing salt is not valid hex
    #[error("Salt expected to be hex-encoded string: {0}")]
    InvalidSalt(#[source] hex::FromHexError),

    /// Signature does not match the path it was attached to
    #[error("Invalid or missing URL signature")]
    InvalidSignature,

    /// Configuration errors (invalid YAML, missing env vars, unknown tokens, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImgproxyError {
    pub fn config(message: impl Into<String>) -> Self {
        ImgproxyError::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ImgproxyError>;
