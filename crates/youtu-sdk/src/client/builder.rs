//! Client builder for fluent configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{Credential, Signer};
use crate::error::{Error, Result};

use super::config::{ClientConfig, Host};
use super::YoutuClient;

/// Builder for creating a [`YoutuClient`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use youtu_sdk::{Credential, Host, YoutuClient};
///
/// let credential = Credential::new(1000061, "AKIDxxxx", "secret", "")?;
/// let client = YoutuClient::builder()
///     .credential(credential)
///     .host(Host::TencentYun)
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), youtu_sdk::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct YoutuClientBuilder {
    credential: Option<Credential>,
    host: Option<Host>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    debug: Option<bool>,
    signer: Option<Arc<dyn Signer>>,
}

impl YoutuClientBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credential.
    ///
    /// This is required and must be called before [`build()`](Self::build).
    #[must_use]
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Sets the target host.
    ///
    /// Default: [`Host::Default`].
    #[must_use]
    pub fn host(mut self, host: impl Into<Host>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets a custom host URL.
    #[must_use]
    pub fn custom_host(self, url: impl Into<String>) -> Self {
        self.host(Host::Custom(url.into()))
    }

    /// Sets the request timeout.
    ///
    /// Default: 5 seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// Default: 5 seconds.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the user agent string.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Enables tracing of request and response payloads.
    ///
    /// Default: false.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Replaces the authorization token scheme.
    #[must_use]
    pub fn signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential is not set or the configuration is
    /// invalid.
    pub fn build(self) -> Result<YoutuClient> {
        let credential = self
            .credential
            .ok_or_else(|| Error::config("credential is required"))?;

        let mut config = ClientConfig::new(credential);

        if let Some(host) = self.host {
            config = config.with_host(host);
        }

        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        if let Some(timeout) = self.connect_timeout {
            config = config.with_connect_timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }

        if let Some(debug) = self.debug {
            config = config.with_debug(debug);
        }

        if let Some(signer) = self.signer {
            config = config.with_signer(signer);
        }

        YoutuClient::new(config)
    }
}
