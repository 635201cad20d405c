//! YouTu authorization token scheme.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha1::Sha1;

use super::{Credential, Signer};
use crate::error::{Error, Result};

type HmacSha1 = Hmac<Sha1>;

/// Default validity window added to the signing timestamp.
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(1000);

/// Signer for the YouTu open platform.
///
/// The token is `base64(HMAC-SHA1(secret_key, plain) ++ plain)` where `plain`
/// is `a={app_id}&k={secret_id}&e={expires}&t={now}&r={nonce}&u={user_id}&f=`.
#[derive(Debug, Clone)]
pub struct YoutuSigner {
    expiry: Duration,
}

impl YoutuSigner {
    /// Creates a signer with the default expiry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expiry: DEFAULT_EXPIRY,
        }
    }

    /// Sets the validity window of generated tokens.
    #[must_use]
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.expiry = expiry;
        self
    }

    /// Returns the validity window of generated tokens.
    #[must_use]
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Signs with an explicit nonce. Deterministic for fixed inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the HMAC cannot be keyed.
    pub fn sign_with_nonce(
        &self,
        credential: &Credential,
        now: DateTime<Utc>,
        nonce: u32,
    ) -> Result<String> {
        let plain = self.plain_text(credential, now, nonce);

        let mut mac = HmacSha1::new_from_slice(credential.secret_key().as_bytes())
            .map_err(|e| Error::config(format!("HMAC creation failed: {e}")))?;
        mac.update(plain.as_bytes());

        let mut token = mac.finalize().into_bytes().to_vec();
        token.extend_from_slice(plain.as_bytes());

        Ok(STANDARD.encode(token))
    }

    fn plain_text(&self, credential: &Credential, now: DateTime<Utc>, nonce: u32) -> String {
        let timestamp = now.timestamp();
        let expiry = i64::try_from(self.expiry.as_secs()).unwrap_or(i64::MAX);
        let expires = timestamp.saturating_add(expiry);

        format!(
            "a={}&k={}&e={}&t={}&r={}&u={}&f=",
            credential.app_id(),
            credential.secret_id(),
            expires,
            timestamp,
            nonce,
            credential.user_id()
        )
    }
}

/// Largest nonce the server accepts: the range of a non-negative `i32`.
pub const MAX_NONCE: u32 = i32::MAX.unsigned_abs();

impl Default for YoutuSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl Signer for YoutuSigner {
    fn sign(&self, credential: &Credential, now: DateTime<Utc>) -> Result<String> {
        let nonce = rand::thread_rng().gen_range(0..=MAX_NONCE);
        self.sign_with_nonce(credential, now, nonce)
    }
}
