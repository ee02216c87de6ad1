//! Core utilities and types for the tsgen API client generator.
//!
//! This crate provides fundamental helpers used across the tsgen workspace.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, write_file};
// String utilities
pub use utils::{capitalize, to_pascal_case};
