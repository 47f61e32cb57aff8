//! Notification delivery channel identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Delivery channel the host application should notify a token owner on.
///
/// The engine only selects channels; delivery itself happens outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Mail,
    Sms,
}

impl NotificationChannel {
    /// Parses a comma separated channel list, e.g. `"mail"` or `"mail, sms"`.
    ///
    /// Unknown channel names are ignored.
    pub fn parse_list(channels: &str) -> Vec<Self> {
        channels
            .split(',')
            .filter_map(|raw| raw.parse().ok())
            .collect()
    }
}

impl FromStr for NotificationChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mail" => Ok(Self::Mail),
            "sms" => Ok(Self::Sms),
            other => Err(format!("unknown notification channel: {}", other)),
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mail => write!(f, "mail"),
            Self::Sms => write!(f, "sms"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_channel() {
        assert_eq!(
            NotificationChannel::parse_list("mail"),
            vec![NotificationChannel::Mail]
        );
    }

    #[test]
    fn test_parse_channel_list_with_whitespace() {
        assert_eq!(
            NotificationChannel::parse_list("mail, sms"),
            vec![NotificationChannel::Mail, NotificationChannel::Sms]
        );
    }

    #[test]
    fn test_parse_ignores_unknown_channels() {
        assert_eq!(
            NotificationChannel::parse_list("mail,carrier-pigeon,sms"),
            vec![NotificationChannel::Mail, NotificationChannel::Sms]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "SMS".parse::<NotificationChannel>(),
            Ok(NotificationChannel::Sms)
        );
    }

    #[test]
    fn test_display_round_trip() {
        for channel in [NotificationChannel::Mail, NotificationChannel::Sms] {
            assert_eq!(channel.to_string().parse(), Ok(channel));
        }
    }
}
