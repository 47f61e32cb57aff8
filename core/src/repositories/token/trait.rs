//! Token repository trait defining the persistence boundary of the engine.

use async_trait::async_trait;

use crate::domain::value_objects::OwnerId;
use crate::errors::StorageError;

use super::record::{TokenQuery, TokenRecord};

/// Repository contract for verification token persistence
///
/// A token's identity for persistence purposes is the
/// `(owner_id, cipher_text, scope)` triple and [`store`](Self::store) is an
/// upsert on it. Implementations must never persist plain text, must wrap
/// each write in a single atomic transaction, and must surface a failed
/// write as [`StorageError::Persistence`] wrapping the underlying cause
/// instead of swallowing it.
///
/// "Not found" is a valid absent result, not an error;
/// [`StorageError::Unavailable`] is reserved for transport failures so
/// callers can apply their own retry policy without catching everything
/// indiscriminately. The engine itself never retries.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert or overwrite the row identified by the record's identity triple
    ///
    /// # Returns
    ///
    /// * `Ok(TokenRecord)` - The stored row as the backing store holds it
    /// * `Err(StorageError)` - The write was rejected or the store unreachable
    async fn store(&self, record: TokenRecord) -> Result<TokenRecord, StorageError>;

    /// Update the expiry of the identified row
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The row was updated
    /// * `Ok(false)` - No row matches the identity triple
    async fn update_expiry(
        &self,
        owner_id: &OwnerId,
        cipher_text: &str,
        scope: &str,
        expiry_time: i64,
    ) -> Result<bool, StorageError>;

    /// Retrieve a live row by owner and cipher text
    ///
    /// Rows whose recomputed expiry has passed are reported as absent
    /// rather than returned stale.
    async fn retrieve(
        &self,
        owner_id: &OwnerId,
        cipher_text: &str,
    ) -> Result<Option<TokenRecord>, StorageError>;

    /// Retrieve the first live row matching the query attributes
    ///
    /// The same expiry filtering rule as [`retrieve`](Self::retrieve)
    /// applies.
    async fn retrieve_by_attributes(
        &self,
        query: &TokenQuery,
    ) -> Result<Option<TokenRecord>, StorageError>;

    /// Delete every row matching owner and cipher text
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - At least one row was removed
    async fn delete(&self, owner_id: &OwnerId, cipher_text: &str) -> Result<bool, StorageError>;

    /// Bulk sweep removing every row whose validity window has passed
    ///
    /// Intended for periodic maintenance, not the request path.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of expired rows deleted
    async fn delete_expired(&self) -> Result<usize, StorageError>;
}
