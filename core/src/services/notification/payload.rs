//! Delivery-agnostic notification payload for a freshly created token.

use chrono::{DateTime, Utc};
use otp_shared::NotificationChannel;
use serde::{Deserialize, Serialize};

/// What the host application needs to notify an owner about a new token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// The plain text code, present when the token instance still carries it
    pub code: Option<String>,

    /// Scope the token was issued under
    pub scope: String,

    /// Instant the token stops being valid
    pub expires_at: DateTime<Utc>,

    /// Channels the host should deliver on
    #[serde(default)]
    pub channels: Vec<NotificationChannel>,
}

impl NotificationPayload {
    pub fn new(code: Option<String>, scope: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            code,
            scope: scope.into(),
            expires_at,
            channels: Vec::new(),
        }
    }

    /// Sets the delivery channels the host should use
    pub fn with_channels(mut self, channels: Vec<NotificationChannel>) -> Self {
        self.channels = channels;
        self
    }

    /// Mail presentation of the notification, one entry per paragraph
    pub fn mail_lines(&self) -> Vec<String> {
        vec![
            "Somebody recently requested for a one-time password in behalf of you.".to_string(),
            format!(
                "You can enter the following reset code: {}",
                self.code_or_placeholder()
            ),
            "If you didn't request the password, simply ignore this message.".to_string(),
        ]
    }

    /// Sms presentation of the notification
    pub fn sms_body(&self) -> String {
        format!(
            "Somebody recently requested a one-time password. \
             You can enter the following reset code: {} \
             If you didn't request the password, simply ignore this message.",
            self.code_or_placeholder()
        )
    }

    fn code_or_placeholder(&self) -> &str {
        self.code.as_deref().unwrap_or("<unavailable>")
    }
}
