//! Lint for operations with more than one body parameter.

use tsgen_document::{Document, ParameterLocation};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when an operation declares several body parameters. Only
/// the first one is used.
pub struct MultipleBodyLint;

impl Lint for MultipleBodyLint {
    fn name(&self) -> &'static str {
        "multiple-body"
    }

    fn description(&self) -> &'static str {
        "Detect operations declaring more than one body parameter"
    }

    fn check(&self, document: &Document, diagnostics: &mut Vec<Diagnostic>) {
        for (url, method, op) in document.operations() {
            let bodies: Vec<_> = op.parameters_in(ParameterLocation::Body).collect();
            if bodies.len() > 1 {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "{} body parameters declared, only '{}' is used",
                            bodies.len(),
                            bodies[0].name
                        ),
                    )
                    .at(format!("paths.{}.{}", url, method)),
                );
            }
        }
    }
}
