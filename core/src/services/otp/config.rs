//! Configuration for the otp service

use otp_shared::config::OtpConfig;
use otp_shared::NotificationChannel;

/// Engine-facing configuration for the otp service, durations in seconds
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Name of the generator used when a caller does not pick one
    pub default_generator: String,
    /// Code length used when a caller does not pick one
    pub password_length: usize,
    /// Validity duration in seconds for new tokens
    pub default_expiry_secs: i64,
    /// Name the `"default"` format alias resolves to
    pub default_format: String,
    /// Channels applied to notification payloads
    pub default_channels: Vec<NotificationChannel>,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            default_generator: "string".to_string(),
            password_length: 6,
            default_expiry_secs: 15 * 60,
            default_format: "otp".to_string(),
            default_channels: vec![NotificationChannel::Mail],
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            default_generator: config.default_generator.clone(),
            password_length: config.password_length,
            default_expiry_secs: config.expires_minutes * 60,
            default_format: "otp".to_string(),
            default_channels: config.channels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_app_level_defaults() {
        let from_app = OtpServiceConfig::from(&OtpConfig::default());
        let defaults = OtpServiceConfig::default();

        assert_eq!(from_app.default_generator, defaults.default_generator);
        assert_eq!(from_app.password_length, defaults.password_length);
        assert_eq!(from_app.default_expiry_secs, defaults.default_expiry_secs);
        assert_eq!(from_app.default_channels, defaults.default_channels);
    }

    #[test]
    fn test_expiry_minutes_are_converted_to_seconds() {
        let config = OtpConfig::new("secret").with_expires_minutes(30);

        assert_eq!(OtpServiceConfig::from(&config).default_expiry_secs, 1800);
    }

    #[test]
    fn test_channels_are_parsed_from_the_app_config() {
        let config = OtpConfig::new("secret").with_default_channels("sms,mail");

        assert_eq!(
            OtpServiceConfig::from(&config).default_channels,
            vec![NotificationChannel::Sms, NotificationChannel::Mail]
        );
    }
}
