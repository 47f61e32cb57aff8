//! HMAC-SHA-256 encryptor producing the persisted cipher text.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::{OtpError, OtpResult};

type HmacSha256 = Hmac<Sha256>;

/// One-way, deterministic transform from a plain text code to cipher text
///
/// The same plain text under the same key always yields the same cipher
/// text, which is what makes ciphertext-keyed lookup possible after the
/// plain text is discarded.
pub trait Encryptor: Send + Sync {
    fn encrypt(&self, plain_text: &str) -> String;
}

/// Keyed-hash encryptor over HMAC-SHA-256, rendering 64 hex characters
pub struct HmacEncryptor {
    mac: HmacSha256,
}

impl HmacEncryptor {
    /// Builds the encryptor from the application secret
    ///
    /// An empty key is a configuration error and is rejected here rather
    /// than at call time; `encrypt` itself cannot fail.
    pub fn new(key: impl AsRef<[u8]>) -> OtpResult<Self> {
        let key = key.as_ref();

        if key.is_empty() {
            return Err(OtpError::Config {
                message: "the encryptor secret key must not be empty".to_string(),
            });
        }

        let mac = HmacSha256::new_from_slice(key).map_err(|err| OtpError::Config {
            message: format!("invalid encryptor secret key: {}", err),
        })?;

        Ok(Self { mac })
    }
}

impl Encryptor for HmacEncryptor {
    fn encrypt(&self, plain_text: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(plain_text.as_bytes());

        hex::encode(mac.finalize().into_bytes())
    }
}
