//! Face detection, analysis and recognition models.

use serde::{Deserialize, Serialize, Serializer};

use super::common::{ImagePair, ImageSource, ResponseStatus};

/// Face detection mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetectMode {
    /// Normal detection.
    #[default]
    Normal,
    /// Big face mode, tuned for a single large face filling the image.
    BigFace,
}

impl DetectMode {
    /// Returns big face mode when `big_face` is set.
    #[must_use]
    pub fn from_big_face(big_face: bool) -> Self {
        if big_face {
            Self::BigFace
        } else {
            Self::Normal
        }
    }

    fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl Serialize for DetectMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            Self::Normal => 0,
            Self::BigFace => 1,
        })
    }
}

/// Request for `detectface`.
#[derive(Debug, Clone, Serialize)]
pub struct DetectFaceRequest {
    /// Image to analyze.
    #[serde(flatten)]
    pub image: ImageSource,

    /// Detection mode, omitted when normal.
    #[serde(skip_serializing_if = "DetectMode::is_normal")]
    pub mode: DetectMode,
}

impl DetectFaceRequest {
    /// Creates a request in normal mode.
    #[must_use]
    pub fn new(image: ImageSource) -> Self {
        Self {
            image,
            mode: DetectMode::Normal,
        }
    }

    /// Sets the detection mode.
    #[must_use]
    pub fn with_mode(mut self, mode: DetectMode) -> Self {
        self.mode = mode;
        self
    }
}

/// A detected face with its attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Face {
    /// Face identifier.
    pub face_id: String,
    /// Left edge of the bounding box.
    pub x: i32,
    /// Top edge of the bounding box.
    pub y: i32,
    /// Bounding box width.
    pub width: f32,
    /// Bounding box height.
    pub height: f32,
    /// Gender, 0 (female) to 100 (male).
    pub gender: i32,
    /// Estimated age, 0 to 100.
    pub age: i32,
    /// Expression, 0 (neutral) to 100 (laughing).
    pub expression: i32,
    /// Whether the face wears glasses.
    pub glass: bool,
    /// Pitch, -30 to 30.
    pub pitch: i32,
    /// Yaw, -30 to 30.
    pub yaw: i32,
    /// Roll, -180 to 180.
    pub roll: i32,
    /// Beauty score, 0 to 100.
    pub beauty: i32,
}

/// Response for `detectface`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectFaceResponse {
    /// Session identifier of the request.
    pub session_id: String,
    /// Width of the submitted image.
    pub image_width: i32,
    /// Height of the submitted image.
    pub image_height: i32,
    /// Detected faces.
    pub face: Vec<Face>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `faceshape`.
#[derive(Debug, Clone, Serialize)]
pub struct FaceShapeRequest {
    /// Image to analyze.
    #[serde(flatten)]
    pub image: ImageSource,

    /// Detection mode, omitted when normal.
    #[serde(skip_serializing_if = "DetectMode::is_normal")]
    pub mode: DetectMode,
}

impl FaceShapeRequest {
    /// Creates a request in normal mode.
    #[must_use]
    pub fn new(image: ImageSource) -> Self {
        Self {
            image,
            mode: DetectMode::Normal,
        }
    }

    /// Sets the detection mode.
    #[must_use]
    pub fn with_mode(mut self, mode: DetectMode) -> Self {
        self.mode = mode;
        self
    }
}

/// A landmark point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

/// The 88 landmark points outlining one face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceShape {
    /// Face contour, 21 points.
    pub face_profile: Vec<Point>,
    /// Left eye, 8 points.
    pub left_eye: Vec<Point>,
    /// Right eye, 8 points.
    pub right_eye: Vec<Point>,
    /// Left eyebrow, 8 points.
    pub left_eyebrow: Vec<Point>,
    /// Right eyebrow, 8 points.
    pub right_eyebrow: Vec<Point>,
    /// Mouth, 22 points.
    pub mouth: Vec<Point>,
    /// Nose, 13 points.
    pub nose: Vec<Point>,
}

/// Response for `faceshape`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceShapeResponse {
    /// Session identifier of the request.
    pub session_id: String,
    /// Landmarks of every detected face.
    pub face_shape: Vec<FaceShape>,
    /// Width of the submitted image.
    pub image_width: i32,
    /// Height of the submitted image.
    pub image_height: i32,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `facecompare`.
#[derive(Debug, Clone, Serialize)]
pub struct FaceCompareRequest {
    /// The two images to compare.
    #[serde(flatten)]
    pub images: ImagePair,
}

impl FaceCompareRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(images: ImagePair) -> Self {
        Self { images }
    }
}

/// Response for `facecompare`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceCompareResponse {
    /// Session identifier of the request.
    pub session_id: String,
    /// Similarity of the two faces.
    pub similarity: f32,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `faceverify`.
#[derive(Debug, Clone, Serialize)]
pub struct FaceVerifyRequest {
    /// Person to verify against.
    pub person_id: String,

    /// Image of the face to verify.
    #[serde(flatten)]
    pub image: ImageSource,
}

impl FaceVerifyRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(person_id: impl Into<String>, image: ImageSource) -> Self {
        Self {
            person_id: person_id.into(),
            image,
        }
    }
}

/// Response for `faceverify`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceVerifyResponse {
    /// Whether the face belongs to the person.
    pub ismatch: bool,
    /// Confidence of the decision.
    pub confidence: f32,
    /// Session identifier of the request.
    pub session_id: String,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `faceidentify`.
#[derive(Debug, Clone, Serialize)]
pub struct FaceIdentifyRequest {
    /// Group to search.
    pub group_id: String,

    /// Image of the face to identify.
    #[serde(flatten)]
    pub image: ImageSource,
}

impl FaceIdentifyRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(group_id: impl Into<String>, image: ImageSource) -> Self {
        Self {
            group_id: group_id.into(),
            image,
        }
    }
}

/// An identification candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    /// Matched person.
    pub person_id: String,
    /// Matched face.
    pub face_id: String,
    /// Match confidence.
    pub confidence: f32,
    /// Tag attached to the face.
    pub tag: String,
}

/// Response for `faceidentify`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceIdentifyResponse {
    /// Session identifier of the request.
    pub session_id: String,
    /// Top candidates, best first.
    pub candidates: Vec<Candidate>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `getfaceinfo`.
#[derive(Debug, Clone, Serialize)]
pub struct GetFaceInfoRequest {
    /// Face to look up.
    pub face_id: String,
}

impl GetFaceInfoRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(face_id: impl Into<String>) -> Self {
        Self {
            face_id: face_id.into(),
        }
    }
}

/// Response for `getfaceinfo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFaceInfoResponse {
    /// Stored face attributes.
    pub face_info: Face,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}
