//! Transport, signing and decoding integration tests.

pub mod errors;
