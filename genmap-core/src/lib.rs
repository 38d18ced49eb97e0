//! Core utilities shared across the genmap crates.
//!
//! This crate provides identifier casing helpers and POSIX-style path
//! helpers. Every path that flows through a manifest is project-relative and
//! uses `/` separators regardless of the host platform.

pub mod path;
mod utils;

// String utilities
pub use utils::{to_camel_case, to_pascal_case};
