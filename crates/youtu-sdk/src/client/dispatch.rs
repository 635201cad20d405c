//! Request dispatch: encode, route, sign, send, decode.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::models::Operation;

use super::config::ClientConfig;
use super::endpoint::ApiFamily;
use super::http::HttpClient;

/// Request body sent on the wire: the application id followed by the
/// operation's own fields.
#[derive(Serialize)]
struct Envelope<'a, B> {
    app_id: String,
    #[serde(flatten)]
    body: &'a B,
}

/// Turns typed requests into signed calls and typed responses.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: HttpClient,
    config: ClientConfig,
}

impl Dispatcher {
    /// Creates a dispatcher and its transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::new(&config)?;
        Ok(Self { http, config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns a dispatcher sharing this transport with a different debug flag.
    pub fn with_debug(&self, debug: bool) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone().with_debug(debug),
        }
    }

    /// Sends a typed operation once it passes [`Operation::validate`].
    pub async fn send<O: Operation>(&self, request: &O) -> Result<O::Response> {
        request.validate()?;
        self.send_raw(O::NAME, O::FAMILY, request).await
    }

    /// Sends `request` to `operation` in `family` and decodes the response
    /// as `T`.
    ///
    /// Transport errors propagate unchanged; only decode failures gain
    /// context here.
    #[instrument(skip_all, fields(operation = operation, family = %family))]
    pub async fn send_raw<B, T>(&self, operation: &str, family: ApiFamily, request: &B) -> Result<T>
    where
        B: Serialize + std::fmt::Debug,
        T: DeserializeOwned,
    {
        let debug_mode = self.config.debug;
        if debug_mode {
            debug!(request = ?request, "Dispatching request");
        }

        let envelope = Envelope {
            app_id: self.config.credential.app_id().to_string(),
            body: request,
        };
        let payload = serde_json::to_vec(&envelope)?;

        let url = self.config.url(operation, family);
        let token = self.config.signer.sign(&self.config.credential, Utc::now())?;

        let body = self.http.post(&url, payload, &token).await?;

        if debug_mode {
            debug!(body = %String::from_utf8_lossy(&body), "Received response");
        }

        serde_json::from_slice(&body).map_err(|source| {
            warn!(error = %source, body_len = body.len(), "Failed to decode response");
            Error::Decode {
                source,
                body: debug_mode.then(|| String::from_utf8_lossy(&body).into_owned()),
            }
        })
    }
}
