//! Integration tests for the YouTu SDK.
//!
//! This module covers:
//! - Face detection, comparison and recognition calls
//! - Person library management
//! - Image analysis and OCR
//! - Transport behavior: signing, status handling, timeouts, decoding

pub mod image;
pub mod ocr;
pub mod person;
pub mod transport;
