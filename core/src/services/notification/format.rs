//! Named pairing of a generator strategy with a notification factory.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::entities::otp_token::OtpToken;
use crate::errors::FormatError;

use super::payload::NotificationPayload;

type PayloadFactory = Arc<dyn Fn(&OtpToken) -> NotificationPayload + Send + Sync>;

/// A named pairing of a code generator with a notification payload factory
#[derive(Clone)]
pub struct Format {
    name: String,
    generator: String,
    factory: PayloadFactory,
}

impl Format {
    /// Creates a format whose payload is the token's own notification
    pub fn new(name: impl Into<String>, generator: impl Into<String>) -> Self {
        Self::with_factory(name, generator, OtpToken::to_notification)
    }

    /// Creates a format with a custom payload factory
    pub fn with_factory(
        name: impl Into<String>,
        generator: impl Into<String>,
        factory: impl Fn(&OtpToken) -> NotificationPayload + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            generator: generator.into(),
            factory: Arc::new(factory),
        }
    }

    /// Name of the format
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the generator strategy this format draws codes with
    pub fn generator(&self) -> &str {
        &self.generator
    }

    /// Builds the notification payload for the given token
    pub fn create_notification(&self, token: &OtpToken) -> NotificationPayload {
        (self.factory)(token)
    }
}

impl fmt::Debug for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Format")
            .field("name", &self.name)
            .field("generator", &self.generator)
            .finish_non_exhaustive()
    }
}

/// Registry of notification formats keyed by name
///
/// `"default"` resolves through the configured default format name. Like
/// the generator registry, this is populated at wiring time and read
/// thereafter.
pub struct FormatRegistry {
    formats: HashMap<String, Format>,
    default_format: String,
}

impl FormatRegistry {
    /// An empty registry resolving `"default"` to the given name
    pub fn new(default_format: impl Into<String>) -> Self {
        Self {
            formats: HashMap::new(),
            default_format: default_format.into(),
        }
    }

    /// Registers a format under its own name
    pub fn register(&mut self, format: Format) {
        self.formats.insert(format.name().to_string(), format);
    }

    /// Returns the format registered under `name`
    ///
    /// # Returns
    ///
    /// [`FormatError::Unknown`] when neither the name nor, for `"default"`,
    /// the configured default is registered
    pub fn get(&self, name: &str) -> Result<&Format, FormatError> {
        let name = if name == "default" {
            self.default_format.as_str()
        } else {
            name
        };

        self.formats.get(name).ok_or_else(|| FormatError::Unknown {
            name: name.to_string(),
        })
    }

    /// Whether a format is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::value_objects::OwnerId;

    fn token() -> OtpToken {
        OtpToken::new(
            OwnerId::from(1),
            "cipher",
            Some("482913".to_string()),
            None,
            Some(6),
            900,
            Some("numeric".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = FormatRegistry::new("otp");
        registry.register(Format::new("otp", "string"));

        let format = registry.get("otp").unwrap();
        assert_eq!(format.generator(), "string");
    }

    #[test]
    fn test_default_alias_resolves_to_the_configured_format() {
        let mut registry = FormatRegistry::new("otp");
        registry.register(Format::new("otp", "string"));

        assert_eq!(registry.get("default").unwrap().name(), "otp");
    }

    #[test]
    fn test_unknown_format_fails() {
        let registry = FormatRegistry::new("otp");

        assert!(!registry.contains("acme"));

        let err = registry.get("acme").unwrap_err();
        assert!(matches!(err, FormatError::Unknown { name } if name == "acme"));
    }

    #[test]
    fn test_default_format_payload_is_the_tokens_notification() {
        let format = Format::new("otp", "numeric");
        let payload = format.create_notification(&token());

        assert_eq!(payload.code.as_deref(), Some("482913"));
    }

    #[test]
    fn test_custom_factory_is_applied() {
        let format = Format::with_factory("acme", "numeric", |token| {
            NotificationPayload::new(None, token.scope.clone(), token.expires_at())
        });

        let payload = format.create_notification(&token());
        assert_eq!(payload.code, None);
        assert_eq!(payload.scope, "default");
    }

    #[test]
    fn test_expiry_flows_into_the_payload() {
        let token = token();
        let payload = Format::new("otp", "numeric").create_notification(&token);

        assert!(payload.expires_at > Utc::now());
        assert_eq!(payload.expires_at, token.expires_at());
    }
}
