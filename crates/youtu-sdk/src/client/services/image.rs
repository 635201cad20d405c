//! Image analysis service.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    FoodDetectRequest, FoodDetectResponse, FuzzyDetectRequest, FuzzyDetectResponse,
    ImagePornRequest, ImagePornResponse, ImageSource, ImageTagRequest, ImageTagResponse,
};

use super::super::dispatch::Dispatcher;

/// Service for blur and food detection, tagging and content moderation.
///
/// The `*_with_options` variants take the full request when a `seq` marker
/// is needed.
#[derive(Clone)]
pub struct ImageService {
    dispatcher: Arc<Dispatcher>,
}

impl ImageService {
    /// Creates a new image service.
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Detects whether an image is blurry.
    pub async fn fuzzy(&self, image: ImageSource) -> Result<FuzzyDetectResponse> {
        self.fuzzy_with_options(&FuzzyDetectRequest::new(image)).await
    }

    /// Detects blur, echoing a `seq` marker.
    pub async fn fuzzy_with_options(
        &self,
        request: &FuzzyDetectRequest,
    ) -> Result<FuzzyDetectResponse> {
        self.dispatcher.send(request).await
    }

    /// Detects whether an image shows food.
    pub async fn food(&self, image: ImageSource) -> Result<FoodDetectResponse> {
        self.food_with_options(&FoodDetectRequest::new(image)).await
    }

    /// Detects food, echoing a `seq` marker.
    pub async fn food_with_options(&self, request: &FoodDetectRequest) -> Result<FoodDetectResponse> {
        self.dispatcher.send(request).await
    }

    /// Tags the content of an image.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use youtu_sdk::{YoutuClient, ImageSource};
    /// # async fn example(client: YoutuClient) -> Result<(), youtu_sdk::Error> {
    /// let tagged = client
    ///     .image()
    ///     .tags(ImageSource::url("http://example.com/beach.jpg"))
    ///     .await?;
    /// for tag in tagged.tags {
    ///     println!("{} ({})", tag.tag_name, tag.tag_confidence);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn tags(&self, image: ImageSource) -> Result<ImageTagResponse> {
        self.tags_with_options(&ImageTagRequest::new(image)).await
    }

    /// Tags an image, echoing a `seq` marker.
    pub async fn tags_with_options(&self, request: &ImageTagRequest) -> Result<ImageTagResponse> {
        self.dispatcher.send(request).await
    }

    /// Scores an image for adult content.
    pub async fn porn(&self, image: ImageSource) -> Result<ImagePornResponse> {
        self.porn_with_options(&ImagePornRequest::new(image)).await
    }

    /// Scores an image for adult content, echoing a `seq` marker.
    pub async fn porn_with_options(&self, request: &ImagePornRequest) -> Result<ImagePornResponse> {
        self.dispatcher.send(request).await
    }
}

impl std::fmt::Debug for ImageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageService").finish_non_exhaustive()
    }
}
