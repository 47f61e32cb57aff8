//! Mock implementation of TokenRepository for testing

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::value_objects::OwnerId;
use crate::errors::StorageError;

use super::r#trait::TokenRepository;
use super::record::{TokenQuery, TokenRecord};

type IdentityTriple = (String, String, String);

/// In-memory token repository for tests, upserting on the identity triple
pub struct MockTokenRepository {
    rows: Arc<RwLock<BTreeMap<IdentityTriple, TokenRecord>>>,
    reject_writes: AtomicBool,
    unavailable: AtomicBool,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            reject_writes: AtomicBool::new(false),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make subsequent writes fail with a persistence error
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Simulate a transport outage on every operation
    pub fn set_unavailable(&self, down: bool) {
        self.unavailable.store(down, Ordering::SeqCst);
    }

    /// Number of rows currently held, expired ones included
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }

    fn key(record: &TokenRecord) -> IdentityTriple {
        (
            record.owner_id.to_string(),
            record.cipher_text.clone(),
            record.scope.clone(),
        )
    }

    fn check_transport(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable {
                message: "mock transport outage".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn store(&self, record: TokenRecord) -> Result<TokenRecord, StorageError> {
        self.check_transport()?;

        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Persistence {
                message: "write rejected by mock".to_string(),
            });
        }

        let mut rows = self.rows.write().await;
        rows.insert(Self::key(&record), record.clone());

        Ok(record)
    }

    async fn update_expiry(
        &self,
        owner_id: &OwnerId,
        cipher_text: &str,
        scope: &str,
        expiry_time: i64,
    ) -> Result<bool, StorageError> {
        self.check_transport()?;

        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Persistence {
                message: "write rejected by mock".to_string(),
            });
        }

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
        self.check_transport()?;

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
        self.check_transport()?;

        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .find(|record| query.matches(record) && !record.expired())
            .cloned())
    }

    async fn delete(&self, owner_id: &OwnerId, cipher_text: &str) -> Result<bool, StorageError> {
        self.check_transport()?;

        let mut rows = self.rows.write().await;
        let initial_count = rows.len();

        rows.retain(|_, record| {
            !(&record.owner_id == owner_id && record.cipher_text == cipher_text)
        });

        Ok(rows.len() < initial_count)
    }

    async fn delete_expired(&self) -> Result<usize, StorageError> {
        self.check_transport()?;

        let mut rows = self.rows.write().await;
        let initial_count = rows.len();

        rows.retain(|_, record| !record.expired());

        Ok(initial_count - rows.len())
    }
}
