//! OCR integration tests.

pub mod cards;
