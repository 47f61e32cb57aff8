//! Persisted token row and the typed lookup query.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::otp_token::OtpToken;
use crate::domain::value_objects::OwnerId;

/// A token row as it lives in the backing store
///
/// Field names follow the `otp_tokens` table layout of the deployments this
/// engine replaces, so existing rows keep (de)serializing unchanged;
/// `authenticable_id` is the historical column name for the owner. The row
/// never carries plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(rename = "authenticable_id")]
    pub owner_id: OwnerId,

    pub cipher_text: String,

    pub scope: String,

    #[serde(default)]
    pub length: Option<usize>,

    #[serde(default)]
    pub generator: Option<String>,

    pub expiry_time: i64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Recomputes the expiry instant from the stored fields
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(self.expiry_time)
    }

    /// Whether the row's validity window has already passed
    pub fn expired(&self) -> bool {
        Utc::now() >= self.expires_at()
    }

    /// Revives the domain entity from the stored row
    ///
    /// The plain text is gone for good at this point; only re-encrypting a
    /// candidate can link back to this row.
    pub fn into_token(self) -> OtpToken {
        OtpToken {
            owner_id: self.owner_id,
            cipher_text: self.cipher_text,
            plain_text: None,
            scope: self.scope,
            length: self.length,
            generator: self.generator,
            expiry_time: self.expiry_time,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&OtpToken> for TokenRecord {
    /// Builds the storable row, dropping the plain text
    fn from(token: &OtpToken) -> Self {
        Self {
            owner_id: token.owner_id.clone(),
            cipher_text: token.cipher_text.clone(),
            scope: token.scope.clone(),
            length: token.length,
            generator: token.generator.clone(),
            expiry_time: token.expiry_time,
            created_at: token.created_at,
            updated_at: token.updated_at,
        }
    }
}

/// Attribute-based lookup parameters
///
/// Unset fields do not constrain the lookup.
#[derive(Debug, Clone, Default)]
pub struct TokenQuery {
    pub owner_id: Option<OwnerId>,
    pub cipher_text: Option<String>,
    pub scope: Option<String>,
    pub generator: Option<String>,
}

impl TokenQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(mut self, owner_id: impl Into<OwnerId>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn cipher_text(mut self, cipher_text: impl Into<String>) -> Self {
        self.cipher_text = Some(cipher_text.into());
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// Whether the given row satisfies every set constraint
    pub fn matches(&self, record: &TokenRecord) -> bool {
        self.owner_id
            .as_ref()
            .map_or(true, |owner_id| owner_id == &record.owner_id)
            && self
                .cipher_text
                .as_ref()
                .map_or(true, |cipher_text| cipher_text == &record.cipher_text)
            && self.scope.as_ref().map_or(true, |scope| scope == &record.scope)
            && self
                .generator
                .as_ref()
                .map_or(true, |generator| Some(generator) == record.generator.as_ref())
    }
}
