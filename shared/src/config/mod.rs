//! Configuration consumed by the OTP engine
//!
//! The engine does not load configuration itself; the host application
//! builds an [`OtpConfig`] from whatever source it prefers (files,
//! environment, secrets manager) and hands it over at wiring time.

pub mod otp;

pub use otp::OtpConfig;
