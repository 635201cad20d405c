//! Types shared by every operation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::client::ApiFamily;
use crate::error::{Error, Result};

/// A single API call: request shape, response shape and where it is routed.
///
/// Implemented by every request type in [`crate::models`]. Callers can
/// implement it for endpoints the SDK does not cover yet and dispatch them
/// with [`YoutuClient::send`](crate::YoutuClient::send).
pub trait Operation: Serialize + std::fmt::Debug + Send + Sync {
    /// Operation name, the last path segment of the endpoint.
    const NAME: &'static str;

    /// API family the operation belongs to.
    const FAMILY: ApiFamily;

    /// Response body shape.
    type Response: DeserializeOwned + ApiResponse;

    /// Rejects requests the service would misread, before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] describing the problem.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Status fields present on every response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseStatus {
    /// Error code, zero on success.
    #[serde(rename = "errorcode")]
    pub code: i32,

    /// Human-readable error message.
    #[serde(rename = "errormsg")]
    pub message: String,
}

impl ResponseStatus {
    /// Returns true if the server reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Access to the application-level status of a decoded response.
///
/// A non-zero code is not an error at the transport level; the response is
/// returned as-is and callers decide. [`into_result`](Self::into_result)
/// promotes it into [`Error::Application`].
pub trait ApiResponse: Sized {
    /// Returns the status fields.
    fn status(&self) -> &ResponseStatus;

    /// Returns the `errorcode` field.
    fn error_code(&self) -> i32 {
        self.status().code
    }

    /// Returns the `errormsg` field.
    fn error_message(&self) -> &str {
        &self.status().message
    }

    /// Returns true if `errorcode` is zero.
    fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// Converts a non-zero `errorcode` into an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Application`] carrying the code and message.
    fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            let status = self.status();
            Err(Error::Application {
                code: status.code,
                message: status.message.clone(),
            })
        }
    }
}

/// How the bytes passed alongside an image are interpreted.
///
/// Mirrors the numeric indicator of the wire protocol: `0` for inline image
/// data, `1` for a URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// Raw image bytes, sent base64-encoded in the `image` field.
    #[default]
    Data,
    /// UTF-8 URL of a remote image, sent in the `url` field.
    Url,
}

impl TryFrom<u8> for ImageType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Data),
            1 => Ok(Self::Url),
            other => Err(Error::invalid_input(format!(
                "unknown image type indicator {other}, expected 0 (data) or 1 (url)"
            ))),
        }
    }
}

/// An image to analyze: inline bytes or a remote URL, never both.
#[derive(Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Inline image bytes.
    Data(Vec<u8>),
    /// Remote image URL.
    Url(String),
}

impl ImageSource {
    /// Creates an inline image source.
    #[must_use]
    pub fn data(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Data(bytes.into())
    }

    /// Creates a URL image source.
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Interprets `bytes` according to `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `kind` is [`ImageType::Url`] and the
    /// bytes are not valid UTF-8.
    pub fn from_parts(kind: ImageType, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        match kind {
            ImageType::Data => Ok(Self::Data(bytes)),
            ImageType::Url => String::from_utf8(bytes)
                .map(Self::Url)
                .map_err(|e| Error::invalid_input(format!("image url is not valid UTF-8: {e}"))),
        }
    }

    /// Returns the kind of this source.
    #[must_use]
    pub fn kind(&self) -> ImageType {
        match self {
            Self::Data(_) => ImageType::Data,
            Self::Url(_) => ImageType::Url,
        }
    }
}

impl Serialize for ImageSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Data(bytes) => map.serialize_entry("image", &STANDARD.encode(bytes))?,
            Self::Url(url) => map.serialize_entry("url", url)?,
        }
        map.end()
    }
}

impl std::fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data(bytes) => write!(f, "ImageSource::Data({} bytes)", bytes.len()),
            Self::Url(url) => write!(f, "ImageSource::Url({url:?})"),
        }
    }
}

/// Two images compared against each other.
///
/// Both images share one kind. Serialized as `imageA`/`imageB` or
/// `urlA`/`urlB`.
#[derive(Clone, PartialEq, Eq)]
pub enum ImagePair {
    /// Two inline images.
    Data(Vec<u8>, Vec<u8>),
    /// Two remote image URLs.
    Urls(String, String),
}

impl ImagePair {
    /// Pairs two image sources of the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if one source is inline data and the
    /// other a URL.
    pub fn new(a: ImageSource, b: ImageSource) -> Result<Self> {
        match (a, b) {
            (ImageSource::Data(a), ImageSource::Data(b)) => Ok(Self::Data(a, b)),
            (ImageSource::Url(a), ImageSource::Url(b)) => Ok(Self::Urls(a, b)),
            (a, b) => Err(Error::invalid_input(format!(
                "compared images must be of one kind, got {:?} and {:?}",
                a.kind(),
                b.kind()
            ))),
        }
    }

    /// Interprets both byte buffers according to the same `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either URL is not valid UTF-8.
    pub fn from_parts(
        kind: ImageType,
        a: impl Into<Vec<u8>>,
        b: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        Self::new(ImageSource::from_parts(kind, a)?, ImageSource::from_parts(kind, b)?)
    }

    /// Returns the kind shared by both images.
    #[must_use]
    pub fn kind(&self) -> ImageType {
        match self {
            Self::Data(..) => ImageType::Data,
            Self::Urls(..) => ImageType::Url,
        }
    }
}

impl Serialize for ImagePair {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Data(a, b) => {
                map.serialize_entry("imageA", &STANDARD.encode(a))?;
                map.serialize_entry("imageB", &STANDARD.encode(b))?;
            }
            Self::Urls(a, b) => {
                map.serialize_entry("urlA", a)?;
                map.serialize_entry("urlB", b)?;
            }
        }
        map.end()
    }
}

impl std::fmt::Debug for ImagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data(a, b) => write!(f, "ImagePair::Data({} bytes, {} bytes)", a.len(), b.len()),
            Self::Urls(a, b) => write!(f, "ImagePair::Urls({a:?}, {b:?})"),
        }
    }
}

/// A batch of images of a single kind.
///
/// Serialized as `images` (base64 strings) or `urls`.
#[derive(Clone, PartialEq, Eq)]
pub enum ImageBatch {
    /// Inline image bytes.
    Data(Vec<Vec<u8>>),
    /// Remote image URLs.
    Urls(Vec<String>),
}

impl ImageBatch {
    /// Interprets every buffer according to `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `items` is empty or any URL is not
    /// valid UTF-8.
    pub fn from_parts(kind: ImageType, items: Vec<Vec<u8>>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::invalid_input("image batch is empty"));
        }

        match kind {
            ImageType::Data => Ok(Self::Data(items)),
            ImageType::Url => items
                .into_iter()
                .map(|bytes| {
                    String::from_utf8(bytes).map_err(|e| {
                        Error::invalid_input(format!("image url is not valid UTF-8: {e}"))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Urls),
        }
    }

    /// Returns the number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Data(items) => items.len(),
            Self::Urls(items) => items.len(),
        }
    }

    /// Returns true if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that the batch holds at least one image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty batch.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::invalid_input("image batch is empty"))
        } else {
            Ok(())
        }
    }
}

impl Serialize for ImageBatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Data(items) => {
                let encoded: Vec<String> = items.iter().map(|b| STANDARD.encode(b)).collect();
                map.serialize_entry("images", &encoded)?;
            }
            Self::Urls(urls) => map.serialize_entry("urls", urls)?,
        }
        map.end()
    }
}

impl std::fmt::Debug for ImageBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Data(items) => write!(f, "ImageBatch::Data({} images)", items.len()),
            Self::Urls(urls) => write!(f, "ImageBatch::Urls({urls:?})"),
        }
    }
}
