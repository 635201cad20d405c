//! OCR models: identity cards and business cards.

use serde::{Deserialize, Serialize, Serializer};

use super::common::{ImageSource, ResponseStatus};

/// Side of an identity card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardType {
    /// Front side, holding the portrait and personal details.
    #[default]
    Front,
    /// Back side, holding the issuing authority and validity.
    Back,
}

impl CardType {
    fn is_front(&self) -> bool {
        matches!(self, Self::Front)
    }
}

impl Serialize for CardType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(match self {
            Self::Front => 0,
            Self::Back => 1,
        })
    }
}

/// Request for `idcardocr`.
#[derive(Debug, Clone, Serialize)]
pub struct IdCardOcrRequest {
    /// Photo of the card.
    #[serde(flatten)]
    pub image: ImageSource,

    /// Card side, omitted for the front.
    #[serde(skip_serializing_if = "CardType::is_front")]
    pub card_type: CardType,

    /// Caller-chosen session identifier echoed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl IdCardOcrRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(image: ImageSource, card_type: CardType) -> Self {
        Self {
            image,
            card_type,
            session_id: None,
        }
    }

    /// Sets the session identifier.
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Response for `idcardocr`.
///
/// Each recognized field comes with a per-character confidence list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdCardOcrResponse {
    /// Echoed session identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Holder name.
    pub name: String,
    /// Confidence of `name`.
    pub name_confidence_all: Vec<i32>,
    /// Sex.
    pub sex: String,
    /// Confidence of `sex`.
    pub sex_confidence_all: Vec<i32>,
    /// Ethnicity.
    pub nation: String,
    /// Confidence of `nation`.
    pub nation_confidence_all: Vec<i32>,
    /// Date of birth.
    pub birth: String,
    /// Confidence of `birth`.
    pub birth_confidence_all: Vec<i32>,
    /// Registered address.
    pub address: String,
    /// Confidence of `address`.
    pub address_confidence_all: Vec<i32>,
    /// Identity number.
    pub id: String,
    /// Confidence of `id`.
    pub id_confidence_all: Vec<i32>,
    /// Portrait cropped from the front side, base64.
    #[serde(rename = "frontimage")]
    pub front_image: String,
    /// Confidence of `front_image`.
    #[serde(rename = "frontimage_confidence_all")]
    pub front_image_confidence_all: Vec<i32>,
    /// Watermark status (not provided by the service yet).
    #[serde(rename = "watermask_status")]
    pub watermark_status: i32,
    /// Confidence of `watermark_status`.
    #[serde(rename = "watermask_confidence_all")]
    pub watermark_confidence_all: Vec<i32>,
    /// Validity period.
    pub valid_date: String,
    /// Confidence of `valid_date`.
    pub valid_date_confidence_all: Vec<i32>,
    /// Issuing authority.
    pub authority: String,
    /// Confidence of `authority`.
    pub authority_confidence_all: Vec<i32>,
    /// Back side image, base64.
    #[serde(rename = "backimage")]
    pub back_image: String,
    /// Confidence of `back_image`.
    #[serde(rename = "backimage_confidence_all")]
    pub back_image_confidence_all: Vec<i32>,
    /// Per-field error codes.
    #[serde(rename = "detail_errorcode")]
    pub detail_error_codes: Vec<i32>,
    /// Per-field error messages.
    #[serde(rename = "detail_errormsg")]
    pub detail_error_messages: Vec<String>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `namecardocr`.
#[derive(Debug, Clone, Serialize)]
pub struct NameCardOcrRequest {
    /// Photo of the card.
    #[serde(flatten)]
    pub image: ImageSource,

    /// Whether the server returns the processed image, omitted when false.
    #[serde(rename = "retimage", skip_serializing_if = "std::ops::Not::not")]
    pub return_image: bool,

    /// Caller-chosen session identifier echoed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl NameCardOcrRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(image: ImageSource) -> Self {
        Self {
            image,
            return_image: false,
            session_id: None,
        }
    }

    /// Asks the server to return the processed image.
    #[must_use]
    pub fn with_return_image(mut self, return_image: bool) -> Self {
        self.return_image = return_image;
        self
    }

    /// Sets the session identifier.
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Response for `namecardocr`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NameCardOcrResponse {
    /// Echoed session identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Phone number.
    pub phone: String,
    /// Confidence of `phone`.
    pub phone_confidence: f32,
    /// Name.
    pub name: String,
    /// Confidence of `name`.
    pub name_confidence: f32,
    /// Processed image, base64, when requested.
    pub image: String,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}
