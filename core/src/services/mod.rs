//! Engine services: code generation, encryption, orchestration and
//! notification selection.

pub mod encryption;
pub mod generator;
pub mod notification;
pub mod otp;

// Re-export commonly used types
pub use encryption::{Encryptor, HmacEncryptor};
pub use generator::{
    CodeGenerator, GeneratorRegistry, NumericGenerator, NumericNo0Generator, StringGenerator,
};
pub use notification::{Format, FormatRegistry, NotificationPayload};
pub use otp::{CreateTokenOptions, OtpService, OtpServiceConfig, ProlongOutcome};
