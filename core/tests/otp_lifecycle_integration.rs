//! Integration tests driving the full token lifecycle against an in-memory
//! store: issue, verify, prolong, invalidate and sweep.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::RwLock;

    use otp_core::domain::entities::otp_token::SCOPE_DEFAULT;
    use otp_core::domain::value_objects::OwnerId;
    use otp_core::errors::StorageError;
    use otp_core::repositories::token::{TokenQuery, TokenRecord, TokenRepository};
    use otp_core::services::encryption::HmacEncryptor;
    use otp_core::services::generator::GeneratorRegistry;
    use otp_core::services::otp::{CreateTokenOptions, OtpService, OtpServiceConfig};
    use otp_shared::config::OtpConfig;

    // In-memory repository keyed on the identity triple
    struct InMemoryTokenRepository {
        rows: Arc<RwLock<BTreeMap<(String, String, String), TokenRecord>>>,
    }

    impl InMemoryTokenRepository {
        fn new() -> Self {
            Self {
                rows: Arc::new(RwLock::new(BTreeMap::new())),
            }
        }
    }

    #[async_trait]
    impl TokenRepository for InMemoryTokenRepository {
        async fn store(&self, record: TokenRecord) -> Result<TokenRecord, StorageError> {
            let key = (
                record.owner_id.to_string(),
                record.cipher_text.clone(),
                record.scope.clone(),
            );
            self.rows.write().await.insert(key, record.clone());
            Ok(record)
        }

        async fn update_expiry(
            &self,
            owner_id: &OwnerId,
            cipher_text: &str,
            scope: &str,
            expiry_time: i64,
        ) -> Result<bool, StorageError> {
            let key = (
                owner_id.to_string(),
                cipher_text.to_string(),
                scope.to_string(),
            );
            let mut rows = self.rows.write().await;
            match rows.get_mut(&key) {
                Some(record) => {
                    record.expiry_time = expiry_time;
                    record.updated_at = Utc::now();
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn retrieve(
            &self,
            owner_id: &OwnerId,
            cipher_text: &str,
        ) -> Result<Option<TokenRecord>, StorageError> {
            let rows = self.rows.read().await;
            Ok(rows
                .values()
                .find(|record| {
                    &record.owner_id == owner_id
                        && record.cipher_text == cipher_text
                        && !record.expired()
                })
                .cloned())
        }

        async fn retrieve_by_attributes(
            &self,
            query: &TokenQuery,
        ) -> Result<Option<TokenRecord>, StorageError> {
            let rows = self.rows.read().await;
            Ok(rows
                .values()
                .find(|record| query.matches(record) && !record.expired())
                .cloned())
        }

        async fn delete(
            &self,
            owner_id: &OwnerId,
            cipher_text: &str,
        ) -> Result<bool, StorageError> {
            let mut rows = self.rows.write().await;
            let before = rows.len();
            rows.retain(|_, record| {
                !(&record.owner_id == owner_id && record.cipher_text == cipher_text)
            });
            Ok(rows.len() < before)
        }

        async fn delete_expired(&self) -> Result<usize, StorageError> {
            let mut rows = self.rows.write().await;
            let before = rows.len();
            rows.retain(|_, record| !record.expired());
            Ok(before - rows.len())
        }
    }

    fn build_service() -> OtpService<InMemoryTokenRepository, HmacEncryptor> {
        let app_config = OtpConfig::new("integration-test-secret").with_default_generator("numeric");

        OtpService::new(
            Arc::new(InMemoryTokenRepository::new()),
            Arc::new(HmacEncryptor::new(app_config.secret.clone()).unwrap()),
            GeneratorRegistry::with_builtins(),
            OtpServiceConfig::from(&app_config),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_full_token_lifecycle() {
        let service = build_service();

        // Issue
        let token = service.create(42, CreateTokenOptions::new()).await.unwrap();
        let code = token.plain_text.clone().unwrap();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        // Verify
        assert!(service.check(42, &code, None).await.unwrap());
        assert!(!service.check(42, "000000", None).await.unwrap());

        // Prolong with the sliding window
        let outcome = service
            .check_and_prolong(42, &code, None, None)
            .await
            .unwrap();
        assert!(outcome.succeeded());
        let token = outcome.into_token().unwrap();

        // Invalidate and observe the terminal state
        let token = service.invalidate(token).await.unwrap();
        assert!(token.expired());
        assert!(!service.check(42, &code, None).await.unwrap());

        // Sweep the now-expired row
        assert_eq!(service.delete_expired().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_scopes_isolate_concurrent_tokens() {
        let service = build_service();

        let login = service
            .create(7, CreateTokenOptions::new().scope("login"))
            .await
            .unwrap();
        let reset = service
            .create(7, CreateTokenOptions::new().scope("password-reset"))
            .await
            .unwrap();

        let login_code = login.plain_text.as_deref().unwrap();
        let reset_code = reset.plain_text.as_deref().unwrap();

        assert!(service.check(7, login_code, Some("login")).await.unwrap());
        assert!(service
            .check(7, reset_code, Some("password-reset"))
            .await
            .unwrap());

        // Codes do not leak across scopes
        assert!(!service.check(7, login_code, Some("password-reset")).await.unwrap());
        assert!(!service.check(7, reset_code, Some("login")).await.unwrap());

        // Revoking one scope leaves the other alone
        service.invalidate(reset).await.unwrap();
        assert!(service.check(7, login_code, Some("login")).await.unwrap());
    }

    #[tokio::test]
    async fn test_fixed_prolongation_survives_a_reload() {
        let service = build_service();

        let token = service
            .create(9, CreateTokenOptions::new().expiry_time(600))
            .await
            .unwrap();
        let code = token.plain_text.clone().unwrap();

        let outcome = service
            .check_and_prolong(9, &code, None, Some(10))
            .await
            .unwrap();
        assert_eq!(outcome.into_token().unwrap().expiry_time, 600 + 600);

        // A fresh lookup observes the persisted prolongation
        let reloaded = service
            .retrieve_by_plain_text(9, &code, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.expiry_time, 1200);
        assert_eq!(reloaded.scope, SCOPE_DEFAULT);
        assert_eq!(reloaded.plain_text, None);
    }

    #[tokio::test]
    async fn test_notification_payload_for_a_fresh_token() {
        let service = build_service();

        let token = service.create(11, CreateTokenOptions::new()).await.unwrap();
        let payload = service.notification_for(&token).unwrap();

        assert_eq!(payload.code, token.plain_text);
        assert!(payload
            .sms_body()
            .contains(token.plain_text.as_deref().unwrap()));
        assert_eq!(payload.expires_at, token.expires_at());
    }

    #[tokio::test]
    async fn test_zero_free_codes_end_to_end() {
        let service = build_service();

        for _ in 0..20 {
            let token = service
                .create(3, CreateTokenOptions::new().generator("numeric-no-0").length(8))
                .await
                .unwrap();
            let code = token.plain_text.clone().unwrap();

            assert_eq!(code.len(), 8);
            assert!(!code.contains('0'));
            assert!(service.check(3, &code, None).await.unwrap());
        }
    }
}
