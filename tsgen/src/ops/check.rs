//! Check operation - document validation.

use std::path::Path;

use eyre::Result;
use tsgen_codegen::pipeline::{
    CompilationContext, Phase, Severity,
    phases::{LowerPhase, ValidatePhase},
};
use tsgen_document::Document;

use super::messages;
use crate::reports::{CheckReport, CheckStats};

/// Execute the check operation.
///
/// Runs validation and, when it passes, lowering. Diagnostics are kept even
/// when validation fails so they can be reported.
pub fn check(document: Document, document_path: &Path, strict: bool) -> Result<CheckReport> {
    let definitions = document.definitions.len();
    let mut ctx = CompilationContext::new(document);

    let stats = match ValidatePhase::new().strict(strict).run(&mut ctx) {
        Ok(()) => {
            LowerPhase.run(&mut ctx)?;
            let ir = ctx.take_ir()?;
            Some(CheckStats {
                endpoints: ir.endpoints.len(),
                groups: ir.groups().len(),
                definitions,
                recursive: ir.named.len(),
            })
        }
        Err(e) => {
            tracing::debug!(error = %e, "validation failed");
            None
        }
    };

    Ok(CheckReport {
        document_path: document_path.to_path_buf(),
        errors: messages(&ctx.diagnostics, Severity::Error),
        warnings: messages(&ctx.diagnostics, Severity::Warning),
        infos: messages(&ctx.diagnostics, Severity::Info),
        stats,
    })
}
