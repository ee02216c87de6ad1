//! Validate phase - runs lints on the document.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{DuplicateIdentifierLint, MultipleBodyLint, UnresolvedReferenceLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the document using configurable lints.
///
/// Lints report warnings. In strict mode every warning they report is raised
/// to an error, which fails the phase.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
    strict: bool,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateIdentifierLint),
                Box::new(UnresolvedReferenceLint),
                Box::new(MultipleBodyLint),
            ],
            strict: false,
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self {
            lints: Vec::new(),
            strict: false,
        }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check document integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let mut found = Vec::new();
            lint.check(&ctx.document, &mut found);
            tracing::debug!(lint = lint.name(), count = found.len(), "lint finished");

            if self.strict {
                found = found.into_iter().map(|d| d.promote()).collect();
            }
            ctx.diagnostics.extend(found);
        }

        // Warnings are allowed, errors are not
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
