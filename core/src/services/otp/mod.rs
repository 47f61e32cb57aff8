//! Token lifecycle orchestration
//!
//! The service ties the generator registry, the encryptor, the token entity
//! and the repository together: it creates tokens (generate, encrypt,
//! persist), retrieves them by plain or cipher text, checks validity and
//! drives the prolongation policy.

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use types::{CreateTokenOptions, ProlongOutcome};
