//! Shared configuration and common types for the OTP engine
//!
//! This crate provides the pieces consumed, but not owned, by the engine:
//! - Configuration types (secret key, generator defaults, expiry, table name)
//! - Notification channel identifiers

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::OtpConfig;
pub use types::NotificationChannel;
