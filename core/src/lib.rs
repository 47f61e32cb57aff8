//! # OTP Core
//!
//! Core token lifecycle and generation engine for single-use verification
//! codes. This crate contains the token entity and its state transitions,
//! the pluggable code generation strategies, the keyed-hash encryptor, the
//! repository interface and the orchestrating service.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
