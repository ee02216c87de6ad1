//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use tsgen_document::Document;
use tsgen_ir::ApiIR;

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
///
/// Carries the document, the lowered IR once `LowerPhase` has run, and the
/// diagnostics collected so far.
#[derive(Debug)]
pub struct CompilationContext {
    /// The parsed document being compiled.
    pub document: Document,
    /// The lowered API IR (populated by LowerPhase).
    pub ir: Option<ApiIR>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the IR out of the context.
    ///
    /// # Errors
    ///
    /// Fails if LowerPhase hasn't run.
    pub fn take_ir(&mut self) -> Result<ApiIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("API IR not set - did LowerPhase run?"))
    }
}
