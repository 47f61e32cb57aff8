//! Request options and outcome types for the otp service.

use crate::domain::entities::otp_token::OtpToken;

/// Optional knobs for token creation
///
/// Unset fields fall back to the service configuration.
#[derive(Debug, Clone, Default)]
pub struct CreateTokenOptions {
    pub scope: Option<String>,
    pub length: Option<usize>,
    pub expiry_time: Option<i64>,
    pub generator: Option<String>,
}

impl CreateTokenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Validity duration in seconds
    pub fn expiry_time(mut self, seconds: i64) -> Self {
        self.expiry_time = Some(seconds);
        self
    }

    pub fn generator(mut self, name: impl Into<String>) -> Self {
        self.generator = Some(name.into());
        self
    }
}

/// Outcome of a check-and-prolong round trip
///
/// `NotFound` covers both "no such token" and "token expired". A token that
/// was found valid but whose prolongation could not be saved comes back as
/// `PersistFailed`, so callers can retry the prolongation instead of
/// re-issuing a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProlongOutcome {
    /// The token was valid and its validity window was pushed forward
    Prolonged(OtpToken),
    /// No valid token matched the candidate
    NotFound,
    /// A valid token matched but saving the prolongation failed
    PersistFailed,
}

impl ProlongOutcome {
    /// Coarse success flag matching the legacy boolean shape
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Prolonged(_))
    }

    /// The prolonged token, when there is one
    pub fn into_token(self) -> Option<OtpToken> {
        match self {
            Self::Prolonged(token) => Some(token),
            _ => None,
        }
    }
}
