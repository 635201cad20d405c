//! YouTu API client implementation.
//!
//! This module provides the main client for calling the YouTu open platform.

mod builder;
mod config;
mod dispatch;
mod endpoint;
mod http;
mod services;

pub use builder::YoutuClientBuilder;
pub use config::{ClientConfig, Host, DEFAULT_HOST, DEFAULT_TIMEOUT, TENCENT_YUN_HOST};
pub use endpoint::{resolve, ApiFamily};
pub use services::{FaceService, ImageService, OcrService, PersonService};

use std::sync::Arc;

use crate::error::Result;
use crate::models::Operation;

use self::dispatch::Dispatcher;

/// The main client for calling the YouTu API.
///
/// Use [`YoutuClient::builder()`] to create a new client instance. Cloning is
/// cheap and clones share one connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use youtu_sdk::{Credential, ImageSource, YoutuClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), youtu_sdk::Error> {
///     let credential = Credential::new(1000061, "AKIDxxxx", "secret", "")?;
///     let client = YoutuClient::builder().credential(credential).build()?;
///
///     let detected = client
///         .face()
///         .detect(ImageSource::url("http://example.com/face.jpg"))
///         .await?;
///     for face in detected.face {
///         println!("{} at ({}, {})", face.face_id, face.x, face.y);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct YoutuClient {
    dispatcher: Arc<Dispatcher>,
}

impl YoutuClient {
    /// Creates a new client builder.
    #[must_use]
    pub fn builder() -> YoutuClientBuilder {
        YoutuClientBuilder::new()
    }

    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            dispatcher: Arc::new(Dispatcher::new(config)?),
        })
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.dispatcher.config()
    }

    /// Returns the host URL.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.config().host
    }

    /// Returns whether payload tracing is enabled.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.config().debug
    }

    /// Returns a client with payload tracing switched on or off.
    ///
    /// The new client shares this client's connection pool. The flag of
    /// `self` is left untouched.
    #[must_use]
    pub fn with_debug(&self, debug: bool) -> Self {
        Self {
            dispatcher: Arc::new(self.dispatcher.with_debug(debug)),
        }
    }

    /// Sends any operation, including caller-defined ones.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use youtu_sdk::{YoutuClient, ImageSource, ImageTagRequest};
    /// # async fn example(client: YoutuClient) -> Result<(), youtu_sdk::Error> {
    /// let request = ImageTagRequest::new(ImageSource::url("http://example.com/a.jpg"))
    ///     .with_seq("batch-7");
    /// let tags = client.send(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if signing, transport or decoding fails.
    pub async fn send<O: Operation>(&self, request: &O) -> Result<O::Response> {
        self.dispatcher.send(request).await
    }

    // ========================================================================
    // Service accessors
    // ========================================================================

    /// Returns the face detection and recognition service.
    #[must_use]
    pub fn face(&self) -> FaceService {
        FaceService::new(Arc::clone(&self.dispatcher))
    }

    /// Returns the person and group library service.
    #[must_use]
    pub fn person(&self) -> PersonService {
        PersonService::new(Arc::clone(&self.dispatcher))
    }

    /// Returns the image analysis service.
    #[must_use]
    pub fn image(&self) -> ImageService {
        ImageService::new(Arc::clone(&self.dispatcher))
    }

    /// Returns the OCR service.
    #[must_use]
    pub fn ocr(&self) -> OcrService {
        OcrService::new(Arc::clone(&self.dispatcher))
    }
}

impl std::fmt::Debug for YoutuClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoutuClient")
            .field("host", &self.host())
            .field("app_id", &self.config().credential.app_id())
            .field("debug", &self.is_debug())
            .finish_non_exhaustive()
    }
}
