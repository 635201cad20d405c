//! Image analysis integration tests.
