//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the ports take `&str` parameters and the
//! in-memory versions let tests inspect what was sent.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
