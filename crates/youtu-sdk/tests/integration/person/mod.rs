//! Person library integration tests.

pub mod groups;
pub mod library;
