//! Person service.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    AddFaceRequest, AddFaceResponse, DelFaceRequest, DelFaceResponse, DelPersonRequest,
    DelPersonResponse, GetFaceIdsRequest, GetFaceIdsResponse, GetGroupIdsRequest,
    GetGroupIdsResponse, GetInfoRequest, GetInfoResponse, GetPersonIdsRequest,
    GetPersonIdsResponse, NewPersonRequest, NewPersonResponse, SetInfoRequest, SetInfoResponse,
};

use super::super::dispatch::Dispatcher;

/// Service for the person, group and face library.
#[derive(Clone)]
pub struct PersonService {
    dispatcher: Arc<Dispatcher>,
}

impl PersonService {
    /// Creates a new person service.
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Creates a person in one or more groups from a face image.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use youtu_sdk::{YoutuClient, ImageSource, NewPersonRequest};
    /// # async fn example(client: YoutuClient, bytes: Vec<u8>) -> Result<(), youtu_sdk::Error> {
    /// let request = NewPersonRequest::new(
    ///     "person-1",
    ///     vec!["staff".to_string()],
    ///     ImageSource::data(bytes),
    /// )
    /// .with_name("Alice");
    ///
    /// let created = client.person().create(&request).await?;
    /// println!("face id: {}", created.face_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, request: &NewPersonRequest) -> Result<NewPersonResponse> {
        self.dispatcher.send(request).await
    }

    /// Deletes a person.
    pub async fn delete(&self, person_id: impl Into<String>) -> Result<DelPersonResponse> {
        let request = DelPersonRequest::new(person_id);
        self.dispatcher.send(&request).await
    }

    /// Adds faces to a person.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use youtu_sdk::{YoutuClient, AddFaceRequest, ImageBatch};
    /// # async fn example(client: YoutuClient) -> Result<(), youtu_sdk::Error> {
    /// let images = ImageBatch::Urls(vec![
    ///     "http://example.com/1.jpg".to_string(),
    ///     "http://example.com/2.jpg".to_string(),
    /// ]);
    /// let added = client
    ///     .person()
    ///     .add_faces(&AddFaceRequest::new("person-1", images))
    ///     .await?;
    /// println!("added {}", added.added);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_faces(&self, request: &AddFaceRequest) -> Result<AddFaceResponse> {
        self.dispatcher.send(request).await
    }

    /// Removes faces from a person.
    pub async fn delete_faces(
        &self,
        person_id: impl Into<String>,
        face_ids: Vec<String>,
    ) -> Result<DelFaceResponse> {
        let request = DelFaceRequest::new(person_id, face_ids);
        self.dispatcher.send(&request).await
    }

    /// Updates a person's name or tag.
    pub async fn set_info(&self, request: &SetInfoRequest) -> Result<SetInfoResponse> {
        self.dispatcher.send(request).await
    }

    /// Gets a person's name, groups and faces.
    pub async fn info(&self, person_id: impl Into<String>) -> Result<GetInfoResponse> {
        let request = GetInfoRequest::new(person_id);
        self.dispatcher.send(&request).await
    }

    /// Lists the groups of the application.
    pub async fn group_ids(&self) -> Result<GetGroupIdsResponse> {
        self.dispatcher.send(&GetGroupIdsRequest::default()).await
    }

    /// Lists the people of a group.
    pub async fn person_ids(&self, group_id: impl Into<String>) -> Result<GetPersonIdsResponse> {
        let request = GetPersonIdsRequest::new(group_id);
        self.dispatcher.send(&request).await
    }

    /// Lists the faces of a person.
    pub async fn face_ids(&self, person_id: impl Into<String>) -> Result<GetFaceIdsResponse> {
        let request = GetFaceIdsRequest::new(person_id);
        self.dispatcher.send(&request).await
    }
}

impl std::fmt::Debug for PersonService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonService").finish_non_exhaustive()
    }
}
