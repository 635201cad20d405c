//! API service implementations.

mod face;
mod image;
mod ocr;
mod person;

pub use face::FaceService;
pub use image::ImageService;
pub use ocr::OcrService;
pub use person::PersonService;
