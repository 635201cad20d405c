//! Face service.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    DetectFaceRequest, DetectFaceResponse, FaceCompareRequest, FaceCompareResponse,
    FaceIdentifyRequest, FaceIdentifyResponse, FaceShapeRequest, FaceShapeResponse,
    FaceVerifyRequest, FaceVerifyResponse, GetFaceInfoRequest, GetFaceInfoResponse, ImagePair,
    ImageSource,
};

use super::super::dispatch::Dispatcher;

/// Service for face detection, landmarks, comparison and recognition.
#[derive(Clone)]
pub struct FaceService {
    dispatcher: Arc<Dispatcher>,
}

impl FaceService {
    /// Creates a new face service.
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Detects faces and their attributes in an image.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use youtu_sdk::{YoutuClient, ImageSource};
    /// # async fn example(client: YoutuClient, bytes: Vec<u8>) -> Result<(), youtu_sdk::Error> {
    /// let detected = client.face().detect(ImageSource::data(bytes)).await?;
    /// println!("{} faces", detected.face.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn detect(&self, image: ImageSource) -> Result<DetectFaceResponse> {
        let request = DetectFaceRequest::new(image);
        self.dispatcher.send(&request).await
    }

    /// Detects faces with a custom detection mode.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use youtu_sdk::{YoutuClient, DetectFaceRequest, DetectMode, ImageSource};
    /// # async fn example(client: YoutuClient, bytes: Vec<u8>) -> Result<(), youtu_sdk::Error> {
    /// let request = DetectFaceRequest::new(ImageSource::data(bytes)).with_mode(DetectMode::BigFace);
    /// let detected = client.face().detect_with_options(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn detect_with_options(
        &self,
        request: &DetectFaceRequest,
    ) -> Result<DetectFaceResponse> {
        self.dispatcher.send(request).await
    }

    /// Locates the facial landmarks of each face.
    pub async fn shape(&self, image: ImageSource) -> Result<FaceShapeResponse> {
        let request = FaceShapeRequest::new(image);
        self.dispatcher.send(&request).await
    }

    /// Locates facial landmarks with a custom detection mode.
    pub async fn shape_with_options(&self, request: &FaceShapeRequest) -> Result<FaceShapeResponse> {
        self.dispatcher.send(request).await
    }

    /// Compares the most prominent face in two images.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use youtu_sdk::{YoutuClient, ImagePair, ImageSource};
    /// # async fn example(client: YoutuClient) -> Result<(), youtu_sdk::Error> {
    /// let pair = ImagePair::new(
    ///     ImageSource::url("http://example.com/a.jpg"),
    ///     ImageSource::url("http://example.com/b.jpg"),
    /// )?;
    /// let result = client.face().compare(pair).await?;
    /// println!("similarity: {}", result.similarity);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn compare(&self, images: ImagePair) -> Result<FaceCompareResponse> {
        let request = FaceCompareRequest::new(images);
        self.dispatcher.send(&request).await
    }

    /// Checks whether the face in an image belongs to a person.
    pub async fn verify(
        &self,
        person_id: impl Into<String>,
        image: ImageSource,
    ) -> Result<FaceVerifyResponse> {
        let request = FaceVerifyRequest::new(person_id, image);
        self.dispatcher.send(&request).await
    }

    /// Finds the people of a group whose faces match the face in an image.
    pub async fn identify(
        &self,
        group_id: impl Into<String>,
        image: ImageSource,
    ) -> Result<FaceIdentifyResponse> {
        let request = FaceIdentifyRequest::new(group_id, image);
        self.dispatcher.send(&request).await
    }

    /// Gets the stored attributes of a face.
    pub async fn info(&self, face_id: impl Into<String>) -> Result<GetFaceInfoResponse> {
        let request = GetFaceInfoRequest::new(face_id);
        self.dispatcher.send(&request).await
    }
}

impl std::fmt::Debug for FaceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceService").finish_non_exhaustive()
    }
}
