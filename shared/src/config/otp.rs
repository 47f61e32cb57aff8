//! OTP engine configuration

use serde::{Deserialize, Serialize};

use crate::types::NotificationChannel;

/// Application-level configuration for the token engine
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Secret key for the keyed-hash encryptor
    pub secret: String,

    /// Generator used when callers do not pick one.
    ///
    /// The built-in options are `string`, `numeric` and `numeric-no-0`.
    #[serde(default = "default_generator")]
    pub default_generator: String,

    /// Length of generated codes
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Token validity in minutes
    #[serde(default = "default_expires_minutes")]
    pub expires_minutes: i64,

    /// Name of the table or collection tokens are persisted in
    #[serde(default = "default_table")]
    pub table: String,

    /// Default notification channels as a comma separated list
    #[serde(default = "default_channels")]
    pub default_channels: String,
}

fn default_generator() -> String {
    String::from("string")
}

fn default_password_length() -> usize {
    6
}

fn default_expires_minutes() -> i64 {
    15
}

fn default_table() -> String {
    String::from("otp_tokens")
}

fn default_channels() -> String {
    String::from("mail")
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            default_generator: default_generator(),
            password_length: default_password_length(),
            expires_minutes: default_expires_minutes(),
            table: default_table(),
            default_channels: default_channels(),
        }
    }
}

impl OtpConfig {
    /// Create a new configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token validity in minutes
    pub fn with_expires_minutes(mut self, minutes: i64) -> Self {
        self.expires_minutes = minutes;
        self
    }

    /// Set the generated code length
    pub fn with_password_length(mut self, length: usize) -> Self {
        self.password_length = length;
        self
    }

    /// Set the default generator name
    pub fn with_default_generator(mut self, name: impl Into<String>) -> Self {
        self.default_generator = name.into();
        self
    }

    /// Set the notification channels as a comma separated list
    pub fn with_default_channels(mut self, channels: impl Into<String>) -> Self {
        self.default_channels = channels.into();
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }

    /// Parsed notification channels; unknown names are ignored
    pub fn channels(&self) -> Vec<NotificationChannel> {
        NotificationChannel::parse_list(&self.default_channels)
    }
}
