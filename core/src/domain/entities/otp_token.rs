//! Single-use verification token entity and its lifecycle transitions.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::OwnerId;
use crate::errors::{OtpError, OtpResult};
use crate::services::notification::NotificationPayload;

/// Scope used when a caller does not namespace its tokens
pub const SCOPE_DEFAULT: &str = "default";

/// A short-lived, single-use verification token bound to an owning principal
///
/// The plain text is only carried by the instance returned from creation (or
/// revived from a known plain text). It is stripped before every persist and
/// can never be recovered afterwards, only re-derived by hashing a supplied
/// candidate and comparing cipher texts.
///
/// The identity of a token for persistence purposes is the
/// `(owner_id, cipher_text, scope)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpToken {
    /// Identifier of the authenticatable principal who owns the token
    pub owner_id: OwnerId,

    /// Keyed hash of the plain text; the durable lookup key
    pub cipher_text: String,

    /// Human-enterable code; never serialized, never persisted
    #[serde(skip)]
    pub plain_text: Option<String>,

    /// Namespace allowing multiple concurrent tokens per owner
    pub scope: String,

    /// Code length recorded at creation
    pub length: Option<usize>,

    /// Name of the generator strategy that produced the code
    pub generator: Option<String>,

    /// Validity duration in seconds counted from `created_at`; zero means
    /// already invalid
    pub expiry_time: i64,

    /// Timestamp when the token was created; immutable after the first
    /// persist
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last mutation
    pub updated_at: DateTime<Utc>,
}

impl OtpToken {
    /// Creates a new token stamped with the current instant
    ///
    /// # Arguments
    ///
    /// * `owner_id` - The owning principal; an empty identifier is rejected
    /// * `cipher_text` - Keyed hash of the plain text
    /// * `plain_text` - The generated code, when this instance still carries it
    /// * `scope` - Token namespace, defaulting to [`SCOPE_DEFAULT`]
    /// * `length` - Code length recorded as provenance
    /// * `expiry_time` - Validity duration in seconds
    /// * `generator` - Generator name recorded as provenance
    ///
    /// # Returns
    ///
    /// The token, or [`OtpError::OwnerRequired`] for an empty owner
    pub fn new(
        owner_id: OwnerId,
        cipher_text: impl Into<String>,
        plain_text: Option<String>,
        scope: Option<String>,
        length: Option<usize>,
        expiry_time: i64,
        generator: Option<String>,
    ) -> OtpResult<Self> {
        if owner_id.is_empty() {
            return Err(OtpError::OwnerRequired);
        }

        let now = Utc::now();

        Ok(Self {
            owner_id,
            cipher_text: cipher_text.into(),
            plain_text,
            scope: scope.unwrap_or_else(|| SCOPE_DEFAULT.to_string()),
            length,
            generator,
            expiry_time,
            created_at: now,
            updated_at: now,
        })
    }

    /// The instant the token stops being valid
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(self.expiry_time)
    }

    /// Validity time left in whole seconds; negative once expired
    pub fn time_left(&self) -> i64 {
        (self.expires_at() - Utc::now()).num_seconds()
    }

    /// Whether the validity window has passed
    pub fn expired(&self) -> bool {
        Utc::now() >= self.expires_at()
    }

    /// A copy with the validity window grown by `seconds`
    ///
    /// Extension is additive: extending twice by `s` grows the window by
    /// `2 * s`, it is not idempotent.
    pub fn extend(self, seconds: i64) -> Self {
        Self {
            expiry_time: self.expiry_time + seconds,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// A copy extended by the idle time elapsed since the last mutation
    ///
    /// This resets the idle window instead of adding a fixed amount, which
    /// is the sliding-expiration behavior.
    pub fn refresh(self) -> Self {
        let idle = (Utc::now() - self.updated_at).num_seconds().max(0);
        self.extend(idle)
    }

    /// A copy that is expired immediately, regardless of `created_at`
    pub fn invalidate(self) -> Self {
        Self {
            expiry_time: 0,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Alias for [`invalidate`](Self::invalidate)
    pub fn revoke(self) -> Self {
        self.invalidate()
    }

    /// A copy without the plain text, the shape every persist works on
    pub fn without_plain_text(self) -> Self {
        Self {
            plain_text: None,
            ..self
        }
    }

    /// Delivery-agnostic notification payload for this token
    ///
    /// Nothing is sent here; the host application owns delivery.
    pub fn to_notification(&self) -> NotificationPayload {
        NotificationPayload::new(self.plain_text.clone(), self.scope.clone(), self.expires_at())
    }
}
