//! Application credential.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// Maximum length in bytes of a credential's user id.
pub const USER_ID_MAX_LEN: usize = 110;

/// Identity used to authenticate every call.
///
/// Issued when registering an application on the YouTu open platform.
/// Immutable once constructed.
#[derive(Clone)]
pub struct Credential {
    app_id: u32,
    secret_id: String,
    secret_key: SecretString,
    user_id: String,
}

impl Credential {
    /// Creates a new credential.
    ///
    /// `user_id` may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UserIdTooLong`] if `user_id` is longer than
    /// [`USER_ID_MAX_LEN`] bytes.
    pub fn new(
        app_id: u32,
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self> {
        let user_id = user_id.into();
        if user_id.len() > USER_ID_MAX_LEN {
            return Err(Error::UserIdTooLong {
                len: user_id.len(),
                max: USER_ID_MAX_LEN,
            });
        }

        Ok(Self {
            app_id,
            secret_id: secret_id.into(),
            secret_key: SecretString::new(secret_key.into()),
            user_id,
        })
    }

    /// Returns the application id.
    #[must_use]
    pub fn app_id(&self) -> u32 {
        self.app_id
    }

    /// Returns the secret id.
    #[must_use]
    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    /// Returns the user id.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub(crate) fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("app_id", &self.app_id)
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}
