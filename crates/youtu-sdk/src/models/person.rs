//! Person, group and face library models.

use serde::{Deserialize, Serialize};

use super::common::{ImageBatch, ImageSource, ResponseStatus};
use crate::error::Result;

/// Request for `newperson`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPersonRequest {
    /// Identifier of the new person.
    pub person_id: String,

    /// Groups to add the person to.
    pub group_ids: Vec<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,

    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Image holding the person's first face.
    #[serde(flatten)]
    pub image: ImageSource,
}

impl NewPersonRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(person_id: impl Into<String>, group_ids: Vec<String>, image: ImageSource) -> Self {
        Self {
            person_id: person_id.into(),
            group_ids,
            person_name: None,
            tag: None,
            image,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.person_name = Some(name.into());
        self
    }

    /// Sets the note.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Response for `newperson`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPersonResponse {
    /// Session identifier of the request.
    pub session_id: String,
    /// Number of groups the person joined.
    pub suc_group: i32,
    /// Number of faces added.
    pub suc_face: i32,
    /// Identifier of the created person.
    pub person_id: String,
    /// Face created from the image.
    pub face_id: String,
    /// Groups the person joined.
    pub group_ids: Vec<String>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `delperson`.
#[derive(Debug, Clone, Serialize)]
pub struct DelPersonRequest {
    /// Person to delete.
    pub person_id: String,
}

impl DelPersonRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(person_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
        }
    }
}

/// Response for `delperson`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DelPersonResponse {
    /// Session identifier of the request.
    pub session_id: String,
    /// Number of persons deleted.
    pub deleted: i32,
    /// Deleted person.
    pub person_id: String,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `addface`.
///
/// A face belongs to at most one person; a person holds up to 10000 faces.
#[derive(Debug, Clone, Serialize)]
pub struct AddFaceRequest {
    /// Person receiving the faces.
    pub person_id: String,

    /// Images holding the faces.
    #[serde(flatten)]
    pub images: ImageBatch,

    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl AddFaceRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(person_id: impl Into<String>, images: ImageBatch) -> Self {
        Self {
            person_id: person_id.into(),
            images,
            tag: None,
        }
    }

    /// Sets the note.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub(crate) fn check_images(&self) -> Result<()> {
        self.images.ensure_not_empty()
    }
}

/// Response for `addface`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddFaceResponse {
    /// Session identifier of the request.
    pub session_id: String,
    /// Number of faces added.
    pub added: i32,
    /// Identifiers of the added faces.
    pub face_ids: Vec<String>,
    /// Per-image result codes.
    pub ret_codes: Vec<i32>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `delface`.
#[derive(Debug, Clone, Serialize)]
pub struct DelFaceRequest {
    /// Person owning the faces.
    pub person_id: String,

    /// Faces to delete.
    pub face_ids: Vec<String>,
}

impl DelFaceRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(person_id: impl Into<String>, face_ids: Vec<String>) -> Self {
        Self {
            person_id: person_id.into(),
            face_ids,
        }
    }
}

/// Response for `delface`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DelFaceResponse {
    /// Session identifier of the request.
    pub session_id: String,
    /// Number of faces deleted.
    pub deleted: i32,
    /// Identifiers of the deleted faces.
    pub face_ids: Vec<String>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `setinfo`.
#[derive(Debug, Clone, Serialize)]
pub struct SetInfoRequest {
    /// Person to update.
    pub person_id: String,

    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,

    /// New note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl SetInfoRequest {
    /// Creates a request that changes nothing until a field is set.
    #[must_use]
    pub fn new(person_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
            person_name: None,
            tag: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.person_name = Some(name.into());
        self
    }

    /// Sets the note.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Response for `setinfo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetInfoResponse {
    /// Session identifier of the request.
    pub session_id: String,
    /// Updated person.
    pub person_id: String,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `getinfo`.
#[derive(Debug, Clone, Serialize)]
pub struct GetInfoRequest {
    /// Person to look up.
    pub person_id: String,
}

impl GetInfoRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(person_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
        }
    }
}

/// Response for `getinfo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetInfoResponse {
    /// Display name.
    pub person_name: String,
    /// Person identifier.
    pub person_id: String,
    /// Groups containing the person.
    pub group_ids: Vec<String>,
    /// Faces of the person.
    pub face_ids: Vec<String>,
    /// Session identifier of the request.
    pub session_id: String,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `getgroupids`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetGroupIdsRequest {}

/// Response for `getgroupids`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetGroupIdsResponse {
    /// Every group of the application.
    pub group_ids: Vec<String>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `getpersonids`.
#[derive(Debug, Clone, Serialize)]
pub struct GetPersonIdsRequest {
    /// Group to list.
    pub group_id: String,
}

impl GetPersonIdsRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
        }
    }
}

/// Response for `getpersonids`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPersonIdsResponse {
    /// Persons in the group.
    pub person_ids: Vec<String>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}

/// Request for `getfaceids`.
#[derive(Debug, Clone, Serialize)]
pub struct GetFaceIdsRequest {
    /// Person to list.
    pub person_id: String,
}

impl GetFaceIdsRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(person_id: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
        }
    }
}

/// Response for `getfaceids`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFaceIdsResponse {
    /// Faces of the person.
    pub face_ids: Vec<String>,
    /// Error code and message.
    #[serde(flatten)]
    pub status: ResponseStatus,
}
