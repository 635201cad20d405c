//! OCR service.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    CardType, IdCardOcrRequest, IdCardOcrResponse, ImageSource, NameCardOcrRequest,
    NameCardOcrResponse,
};

use super::super::dispatch::Dispatcher;

/// Service for identity card and business card recognition.
#[derive(Clone)]
pub struct OcrService {
    dispatcher: Arc<Dispatcher>,
}

impl OcrService {
    /// Creates a new OCR service.
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Reads one side of a Chinese identity card.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use youtu_sdk::{YoutuClient, CardType, ImageSource};
    /// # async fn example(client: YoutuClient, bytes: Vec<u8>) -> Result<(), youtu_sdk::Error> {
    /// let card = client.ocr().id_card(ImageSource::data(bytes), CardType::Back).await?;
    /// println!("valid until {}", card.valid_date);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn id_card(&self, image: ImageSource, card_type: CardType) -> Result<IdCardOcrResponse> {
        self.id_card_with_options(&IdCardOcrRequest::new(image, card_type)).await
    }

    /// Reads an identity card with a caller-chosen session id.
    pub async fn id_card_with_options(
        &self,
        request: &IdCardOcrRequest,
    ) -> Result<IdCardOcrResponse> {
        self.dispatcher.send(request).await
    }

    /// Reads a business card.
    pub async fn name_card(&self, image: ImageSource) -> Result<NameCardOcrResponse> {
        self.name_card_with_options(&NameCardOcrRequest::new(image)).await
    }

    /// Reads a business card, optionally asking for the processed image back.
    pub async fn name_card_with_options(
        &self,
        request: &NameCardOcrRequest,
    ) -> Result<NameCardOcrResponse> {
        self.dispatcher.send(request).await
    }
}

impl std::fmt::Debug for OcrService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrService").finish_non_exhaustive()
    }
}
