//! Image analysis models: blur, food, tagging and content moderation.

use serde::{Deserialize, Serialize};

use super::common::{ImageSource, ResponseStatus};

/// Request for `fuzzydetect`.
#[derive(Debug, Clone, Serialize)]
pub struct FuzzyDetectRequest {
    /// Image to analyze.
    #[serde(flatten)]
    pub image: ImageSource,

    /// Caller-chosen sequence number echoed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<String>,
}

impl FuzzyDetectRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(image: ImageSource) -> Self {
        Self { image, seq: None }
    }

    /// Sets the sequence number.
    #[must_use]
    pub fn with_seq(mut self, seq: impl Into<String>) -> Self {
        self.seq = Some(seq.into());
        self
    }
}

/// Response for `fuzzydetect`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyDetectResponse {
    /// Whether the image is blurry.
    pub fuzzy: bool,
    /// Confidence between 0 and 1.
    pub fuzzy_confidence: f32,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `fooddetect`.
#[derive(Debug, Clone, Serialize)]
pub struct FoodDetectRequest {
    /// Image to analyze.
    #[serde(flatten)]
    pub image: ImageSource,

    /// Caller-chosen sequence number echoed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<String>,
}

impl FoodDetectRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(image: ImageSource) -> Self {
        Self { image, seq: None }
    }

    /// Sets the sequence number.
    #[must_use]
    pub fn with_seq(mut self, seq: impl Into<String>) -> Self {
        self.seq = Some(seq.into());
        self
    }
}

/// Response for `fooddetect`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodDetectResponse {
    /// Whether the image shows food.
    pub food: bool,
    /// Confidence between 0 and 1.
    pub food_confidence: f32,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// A classification label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTag {
    /// Label name.
    pub tag_name: String,
    /// Label confidence, 0 to 100.
    pub tag_confidence: i32,
}

/// Request for `imagetag`.
#[derive(Debug, Clone, Serialize)]
pub struct ImageTagRequest {
    /// Image to classify.
    #[serde(flatten)]
    pub image: ImageSource,

    /// Caller-chosen sequence number echoed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<String>,
}

impl ImageTagRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(image: ImageSource) -> Self {
        Self { image, seq: None }
    }

    /// Sets the sequence number.
    #[must_use]
    pub fn with_seq(mut self, seq: impl Into<String>) -> Self {
        self.seq = Some(seq.into());
        self
    }
}

/// Response for `imagetag`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTagResponse {
    /// Echoed sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<String>,
    /// Labels found in the image.
    pub tags: Vec<ImageTag>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `imageporn`.
#[derive(Debug, Clone, Serialize)]
pub struct ImagePornRequest {
    /// Image to moderate.
    #[serde(flatten)]
    pub image: ImageSource,

    /// Caller-chosen sequence number echoed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<String>,
}

impl ImagePornRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(image: ImageSource) -> Self {
        Self { image, seq: None }
    }

    /// Sets the sequence number.
    #[must_use]
    pub fn with_seq(mut self, seq: impl Into<String>) -> Self {
        self.seq = Some(seq.into());
        self
    }
}

/// Response for `imageporn`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagePornResponse {
    /// Echoed sequence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<String>,
    /// Moderation labels with confidences.
    pub tags: Vec<ImageTag>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}
