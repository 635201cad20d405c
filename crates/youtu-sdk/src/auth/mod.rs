//! Credentials and request signing for the YouTu SDK.
//!
//! Every request carries an `Authorization` header derived from the
//! [`Credential`] by a [`Signer`]. The default [`YoutuSigner`] implements the
//! scheme the YouTu service expects; other schemes can be plugged in through
//! the client builder.

mod credential;
mod signer;

pub use credential::{Credential, USER_ID_MAX_LEN};
pub use signer::{YoutuSigner, DEFAULT_EXPIRY, MAX_NONCE};

use chrono::{DateTime, Utc};

use crate::error::Result;

/// Trait for authorization token schemes.
///
/// A signer is a pure function of the credential and the clock: it must not
/// perform I/O and is called once per outgoing request.
pub trait Signer: Send + Sync + std::fmt::Debug {
    /// Produces a header-ready authorization token valid from `now`.
    fn sign(&self, credential: &Credential, now: DateTime<Utc>) -> Result<String>;
}
