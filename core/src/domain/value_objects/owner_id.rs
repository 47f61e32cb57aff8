//! Opaque identifier of the principal a token is issued to.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The unique identifier of the authenticatable principal owning a token.
///
/// The engine treats the identifier as opaque text, so numeric database
/// keys and UUIDs can both be carried without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty identifier is never a valid owner; token construction
    /// rejects it.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OwnerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OwnerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<&OwnerId> for OwnerId {
    fn from(id: &OwnerId) -> Self {
        id.clone()
    }
}

impl From<Uuid> for OwnerId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl From<i32> for OwnerId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl From<u32> for OwnerId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for OwnerId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for OwnerId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}
