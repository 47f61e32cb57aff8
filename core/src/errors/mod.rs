//! Engine error types and error handling.

mod types;

// Re-export all error types
pub use types::{FormatError, GeneratorError, StorageError};

use thiserror::Error;

/// Top-level engine errors
#[derive(Error, Debug)]
pub enum OtpError {
    /// Token construction with an empty owner identifier. Caller bug.
    #[error("the unique identifier of the token owner shall not be empty")]
    OwnerRequired,

    /// A misconfigured engine, e.g. an empty encryptor secret
    #[error("invalid engine configuration: {message}")]
    Config { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type OtpResult<T> = Result<T, OtpError>;
