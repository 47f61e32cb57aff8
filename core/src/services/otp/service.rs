//! Main otp service implementation.

use std::sync::Arc;

use crate::domain::entities::otp_token::{OtpToken, SCOPE_DEFAULT};
use crate::domain::value_objects::OwnerId;
use crate::errors::OtpResult;
use crate::repositories::token::{TokenQuery, TokenRecord, TokenRepository};
use crate::services::encryption::Encryptor;
use crate::services::generator::{CodeGenerator, GeneratorRegistry};
use crate::services::notification::{Format, FormatRegistry, NotificationPayload};

use super::config::OtpServiceConfig;
use super::types::{CreateTokenOptions, ProlongOutcome};

/// Orchestrates code generation, encryption and persistence of tokens
///
/// Every operation is a single read-modify-persist sequence against the
/// repository; there is no in-process token cache, no retry policy and no
/// compare-and-swap on concurrent prolongations (the last writer wins on
/// the upsert).
pub struct OtpService<R: TokenRepository, E: Encryptor> {
    /// Repository the tokens are persisted through
    repository: Arc<R>,
    /// Keyed-hash encryptor producing cipher texts
    encryptor: Arc<E>,
    /// Named code generation strategies
    registry: GeneratorRegistry,
    /// Named notification formats
    formats: FormatRegistry,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<R: TokenRepository, E: Encryptor> OtpService<R, E> {
    /// Create a new otp service
    ///
    /// The configured default generator is resolved against the registry so
    /// wiring mistakes surface here, at startup, rather than per request. A
    /// format named after `config.default_format` is registered for the
    /// `"default"` alias, drawing with the default generator.
    pub fn new(
        repository: Arc<R>,
        encryptor: Arc<E>,
        registry: GeneratorRegistry,
        config: OtpServiceConfig,
    ) -> OtpResult<Self> {
        registry.get(&config.default_generator)?;

        let mut formats = FormatRegistry::new(config.default_format.clone());
        formats.register(Format::new(
            config.default_format.clone(),
            config.default_generator.clone(),
        ));

        Ok(Self {
            repository,
            encryptor,
            registry,
            formats,
            config,
        })
    }

    /// Create a new otp token for the given owner
    ///
    /// Resolves the generator (explicit option, else the configured
    /// default), draws a plain text, encrypts it and persists the token.
    /// The returned instance is the only one that ever carries the plain
    /// text; the persisted row holds the cipher text alone. Dispatching a
    /// notification is the caller's decision, not an implicit side effect.
    ///
    /// # Errors
    ///
    /// Generator resolution failures and rejected or failed writes are
    /// fatal to this call and propagate unmodified.
    pub async fn create(
        &self,
        owner_id: impl Into<OwnerId>,
        options: CreateTokenOptions,
    ) -> OtpResult<OtpToken> {
        let generator_name = options
            .generator
            .unwrap_or_else(|| self.config.default_generator.clone());
        let generator = self.registry.get(&generator_name)?;

        let length = options.length.unwrap_or(self.config.password_length);
        let plain_text = generator.generate(length);
        let cipher_text = self.encryptor.encrypt(&plain_text);

        let token = OtpToken::new(
            owner_id.into(),
            cipher_text,
            Some(plain_text),
            options.scope,
            Some(length),
            options
                .expiry_time
                .unwrap_or(self.config.default_expiry_secs),
            Some(generator_name),
        )?;

        self.persist(&token).await?;

        tracing::info!(
            owner = %token.owner_id,
            scope = %token.scope,
            generator = token.generator.as_deref().unwrap_or_default(),
            event = "otp_token_created",
            "Issued a new verification token"
        );

        Ok(token)
    }

    /// Retrieve the owner's token matching the given plain text
    ///
    /// The candidate is re-encrypted and the lookup runs on cipher text;
    /// equality is never compared on plain text, so the one-way property
    /// holds end to end.
    pub async fn retrieve_by_plain_text(
        &self,
        owner_id: impl Into<OwnerId>,
        plain_text: &str,
        scope: Option<&str>,
    ) -> OtpResult<Option<OtpToken>> {
        self.retrieve_by_cipher_text(owner_id, &self.encryptor.encrypt(plain_text), scope)
            .await
    }

    /// Retrieve the owner's token by its cipher text
    pub async fn retrieve_by_cipher_text(
        &self,
        owner_id: impl Into<OwnerId>,
        cipher_text: &str,
        scope: Option<&str>,
    ) -> OtpResult<Option<OtpToken>> {
        let query = TokenQuery::new()
            .owner(owner_id)
            .cipher_text(cipher_text)
            .scope(scope.unwrap_or(SCOPE_DEFAULT));

        let record = self.repository.retrieve_by_attributes(&query).await?;

        Ok(record.map(TokenRecord::into_token))
    }

    /// Whether the owner holds a live token matching the plain candidate
    pub async fn check(
        &self,
        owner_id: impl Into<OwnerId>,
        plain_text: &str,
        scope: Option<&str>,
    ) -> OtpResult<bool> {
        let token = self
            .retrieve_by_plain_text(owner_id, plain_text, scope)
            .await?;

        Ok(token.map_or(false, |token| !token.expired()))
    }

    /// Whether the owner holds a live token with the given cipher text
    ///
    /// Cookie and middleware flows only keep the cipher text around; they
    /// check with this variant.
    pub async fn check_cipher_text(
        &self,
        owner_id: impl Into<OwnerId>,
        cipher_text: &str,
        scope: Option<&str>,
    ) -> OtpResult<bool> {
        let token = self
            .retrieve_by_cipher_text(owner_id, cipher_text, scope)
            .await?;

        Ok(token.map_or(false, |token| !token.expired()))
    }

    /// Check a plain candidate and push the token's validity forward
    ///
    /// With `prolong_minutes` the window grows by that fixed amount;
    /// without it the idle time since the last mutation is added, the
    /// sliding-expiration behavior.
    ///
    /// A transport failure during the lookup propagates as an error; a
    /// failed write of the prolongation degrades to
    /// [`ProlongOutcome::PersistFailed`] so the caller can retry.
    pub async fn check_and_prolong(
        &self,
        owner_id: impl Into<OwnerId>,
        plain_text: &str,
        scope: Option<&str>,
        prolong_minutes: Option<i64>,
    ) -> OtpResult<ProlongOutcome> {
        let token = match self
            .retrieve_by_plain_text(owner_id, plain_text, scope)
            .await?
        {
            Some(token) if !token.expired() => token,
            _ => return Ok(ProlongOutcome::NotFound),
        };

        let token = match prolong_minutes {
            Some(minutes) => token.extend(minutes * 60),
            None => token.refresh(),
        };

        match self.persist(&token).await {
            Ok(()) => Ok(ProlongOutcome::Prolonged(token)),
            Err(err) => {
                tracing::warn!(
                    owner = %token.owner_id,
                    scope = %token.scope,
                    error = %err,
                    event = "otp_prolong_failed",
                    "Failed to save the prolonged token"
                );
                Ok(ProlongOutcome::PersistFailed)
            }
        }
    }

    /// Extend the token's validity by `seconds`, or by the configured
    /// default duration when omitted
    ///
    /// Extension is additive, not idempotent: extending twice adds twice.
    pub async fn extend(&self, token: OtpToken, seconds: Option<i64>) -> OtpResult<OtpToken> {
        let token = token.extend(seconds.unwrap_or(self.config.default_expiry_secs));
        self.persist(&token).await?;

        Ok(token)
    }

    /// Push the token's expiry forward by the idle time since its last
    /// mutation
    pub async fn refresh(&self, token: OtpToken) -> OtpResult<OtpToken> {
        let token = token.refresh();
        self.persist(&token).await?;

        Ok(token)
    }

    /// Expire the token immediately, regardless of how recently it was
    /// created
    pub async fn invalidate(&self, token: OtpToken) -> OtpResult<OtpToken> {
        let token = token.invalidate();
        self.persist(&token).await?;

        tracing::info!(
            owner = %token.owner_id,
            scope = %token.scope,
            event = "otp_token_invalidated",
            "Invalidated a verification token"
        );

        Ok(token)
    }

    /// Alias for [`invalidate`](Self::invalidate)
    pub async fn revoke(&self, token: OtpToken) -> OtpResult<OtpToken> {
        self.invalidate(token).await
    }

    /// Delete the token's rows outright
    pub async fn delete(&self, token: &OtpToken) -> OtpResult<bool> {
        Ok(self
            .repository
            .delete(&token.owner_id, &token.cipher_text)
            .await?)
    }

    /// Sweep every expired row from the store
    ///
    /// Maintenance, not the request path.
    pub async fn delete_expired(&self) -> OtpResult<usize> {
        Ok(self.repository.delete_expired().await?)
    }

    /// Register an additional code generation strategy
    pub fn add_generator(
        &mut self,
        name: impl Into<String>,
        generator: Arc<dyn CodeGenerator>,
    ) -> OtpResult<()> {
        self.registry.register(name, generator)?;
        Ok(())
    }

    /// Register a strategy produced by a factory closure
    pub fn add_generator_factory<F>(&mut self, name: impl Into<String>, factory: F) -> OtpResult<()>
    where
        F: FnOnce() -> Result<Arc<dyn CodeGenerator>, String>,
    {
        self.registry.register_factory(name, factory)?;
        Ok(())
    }

    /// Switch the generator used when callers do not pick one
    ///
    /// The name must already be registered.
    pub fn set_default_generator(&mut self, name: impl Into<String>) -> OtpResult<()> {
        let name = name.into();
        self.registry.get(&name)?;
        self.config.default_generator = name;

        Ok(())
    }

    /// Register a notification format
    pub fn add_format(&mut self, format: Format) {
        self.formats.register(format);
    }

    /// Look up a notification format by name
    ///
    /// `"default"` resolves to the configured default format.
    pub fn format(&self, name: &str) -> OtpResult<&Format> {
        Ok(self.formats.get(name)?)
    }

    /// Build the notification payload for a token, with the configured
    /// delivery channels applied
    ///
    /// The format is selected by the token's generator name; tokens whose
    /// generator has no format of its own fall back to the default format.
    pub fn notification_for(&self, token: &OtpToken) -> OtpResult<NotificationPayload> {
        let name = token.generator.as_deref().unwrap_or("default");

        let format = match self.formats.get(name) {
            Ok(format) => format,
            Err(_) => self.formats.get("default")?,
        };

        Ok(format
            .create_notification(token)
            .with_channels(self.config.default_channels.clone()))
    }

    /// Upsert the token's row, stripping the plain text first
    async fn persist(&self, token: &OtpToken) -> OtpResult<()> {
        self.repository.store(TokenRecord::from(token)).await?;
        Ok(())
    }
}
