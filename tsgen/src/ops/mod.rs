//! Core operations.
//!
//! This module contains the business logic for tsgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::generate;
pub use list::list;

use tsgen_codegen::pipeline::{Diagnostic, Severity};

/// Format diagnostics of one severity, with their location on a second line.
fn messages(diagnostics: &[Diagnostic], severity: Severity) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| d.severity == severity)
        .map(|d| match &d.location {
            Some(loc) => format!("{}\n  --> {}", d.message, loc),
            None => d.message.clone(),
        })
        .collect()
}
