//! HTTP transport: one signed POST, one classified outcome.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, EXPECT};
use reqwest::{Client, StatusCode};
use tracing::{instrument, warn};

use crate::error::{Error, Result};

use super::config::ClientConfig;

/// Internal HTTP client. Never retries.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Posts a JSON body and returns the raw response body.
    ///
    /// Any status other than 200 fails with [`Error::HttpStatus`] without
    /// reading the body. A 200 body is returned verbatim, even when empty.
    #[instrument(skip(self, body, token), fields(url = %url, body_len = body.len()))]
    pub async fn post(&self, url: &str, body: Vec<u8>, token: &str) -> Result<Bytes> {
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, token)
            .header(CONTENT_TYPE, "text/json")
            .header(ACCEPT, "*/*")
            .header(EXPECT, "100-continue")
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Request rejected");
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        response.bytes().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, error: reqwest::Error) -> Error {
        let error = Error::from_transport(error, self.timeout);
        warn!(error = %error, "Request failed");
        error
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
