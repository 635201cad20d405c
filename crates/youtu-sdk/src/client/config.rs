//! Client configuration.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::auth::{Credential, Signer, YoutuSigner};
use crate::error::{Error, Result};

use super::endpoint::{self, ApiFamily};

/// Default YouTu open platform host.
pub const DEFAULT_HOST: &str = "http://api.youtu.qq.com";

/// Tencent Cloud hosted YouTu host.
pub const TENCENT_YUN_HOST: &str = "https://youtu.api.qcloud.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Target host of the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Host {
    /// [`DEFAULT_HOST`].
    #[default]
    Default,
    /// [`TENCENT_YUN_HOST`].
    TencentYun,
    /// Any other base URL, e.g. a private deployment or a test server.
    Custom(String),
}

impl Host {
    /// Returns the base URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => DEFAULT_HOST,
            Self::TencentYun => TENCENT_YUN_HOST,
            Self::Custom(url) => url,
        }
    }
}

impl From<&str> for Host {
    fn from(url: &str) -> Self {
        Self::Custom(url.to_string())
    }
}

impl From<String> for Host {
    fn from(url: String) -> Self {
        Self::Custom(url)
    }
}

/// Configuration for the YouTu client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Credential used to sign every request.
    pub credential: Credential,

    /// Base URL without trailing slash.
    pub host: String,

    /// Request timeout.
    pub timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// User agent string.
    pub user_agent: String,

    /// Whether request and response payloads are traced.
    pub debug: bool,

    /// Authorization token scheme.
    pub signer: Arc<dyn Signer>,
}

impl ClientConfig {
    /// Creates a new configuration against the default host.
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            host: DEFAULT_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
            user_agent: crate::USER_AGENT.to_string(),
            debug: false,
            signer: Arc::new(YoutuSigner::new()),
        }
    }

    /// Sets the target host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<Host>) -> Self {
        self.host = host.into().as_str().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enables or disables payload tracing.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the authorization token scheme.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = signer;
        self
    }

    /// Checks that the host is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the host does not parse and
    /// [`Error::Configuration`] if it is not http(s) or lacks a host name.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.host)?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "unsupported scheme '{}' in host {}",
                url.scheme(),
                self.host
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(Error::config(format!("host {} has no host name", self.host)));
        }

        if self.timeout.is_zero() {
            return Err(Error::config("timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Builds the full URL of an operation.
    #[must_use]
    pub fn url(&self, operation: &str, family: ApiFamily) -> String {
        endpoint::resolve(&self.host, operation, family)
    }
}
