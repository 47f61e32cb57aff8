//! Specific error taxonomies for generator wiring, format selection and
//! token storage.

use thiserror::Error;

/// Generator registry and strategy wiring errors
///
/// These indicate a misconfigured system. They should be caught at startup
/// wiring, not per request.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("the {name} code generator is not registered")]
    Unregistered { name: String },

    #[error("the {name} code generator could not be instantiated: {reason}")]
    Instantiation { name: String, reason: String },

    #[error("the {name} code generator does not fulfil the generator contract")]
    InvalidStrategy { name: String },
}

/// Notification format selection errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("unknown otp format: {name}")]
    Unknown { name: String },
}

/// Token storage errors
///
/// `Unavailable` is a transport-level failure and `Persistence` a write the
/// store rejected. A missing row is `Ok(None)` on the repository, never an
/// error.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("token storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("something went wrong while saving the access token: {message}")]
    Persistence { message: String },
}
