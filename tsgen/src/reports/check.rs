//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from document validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the document.
    pub document_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Endpoint and group counts, available when lowering ran.
    pub stats: Option<CheckStats>,
}

#[derive(Debug)]
pub struct CheckStats {
    pub endpoints: usize,
    pub groups: usize,
    pub definitions: usize,
    pub recursive: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.document_path.display()));

        if let Some(stats) = &self.stats {
            out.newline();
            out.key_value("  Endpoints", &stats.endpoints.to_string());
            out.key_value("  Groups", &stats.groups.to_string());
            out.key_value("  Definitions", &stats.definitions.to_string());
            if stats.recursive > 0 {
                out.key_value("  Recursive definitions", &stats.recursive.to_string());
            }
        }
    }
}
