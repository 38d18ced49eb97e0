//! Core operations.
//!
//! This module contains the business logic for genmap commands,
//! separated from CLI argument parsing and output rendering.

pub mod ls;
pub mod manifest;

pub use ls::ls;
pub use manifest::{Project, manifest};
