//! Pipeline orchestrator.

use eyre::Result;
use tsgen_document::Document;

use super::{
    CompilationContext, Phase,
    phases::{LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower) followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .strict(true)
///     .phase(MyCustomPhase)
///     .run(document)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    strict: bool,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            strict: false,
        }
    }

    /// Treat lint warnings as errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a document.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, including validation
    /// recording an error diagnostic.
    pub fn run(&self, document: Document) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ValidatePhase::new().strict(self.strict)),
            Box::new(LowerPhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    const DUPLICATES: &str = r#"{
        "swagger": "2.0",
        "paths": {
            "/user/list": {"get": {}},
            "/user/list/": {"get": {}}
        }
    }"#;

    struct CountingPhase(Arc<AtomicUsize>);

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn description(&self) -> &'static str {
            "Count endpoints"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let count = ctx.ir.as_ref().map(|ir| ir.endpoints.len()).unwrap_or(0);
            self.0.store(count, Ordering::SeqCst);
            Ok(())
        }
    }

    fn make_test_document(content: &str) -> Document {
        content.parse().expect("Failed to parse test document")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let doc = make_test_document(r#"{"paths": {"/role": {"get": {}, "post": {}}}}"#);
        let ctx = Pipeline::new().run(doc).expect("pipeline should succeed");

        assert_eq!(ctx.ir.as_ref().map(|ir| ir.endpoints.len()), Some(2));
    }

    #[test]
    fn test_user_phases_run_after_lowering() {
        let seen = Arc::new(AtomicUsize::new(0));
        let doc = make_test_document(r#"{"paths": {"/role": {"get": {}}}}"#);

        Pipeline::new()
            .phase(CountingPhase(seen.clone()))
            .run(doc)
            .expect("pipeline should succeed");

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_duplicates_warn_by_default() {
        let ctx = Pipeline::new()
            .run(make_test_document(DUPLICATES))
            .expect("warnings don't fail the pipeline");

        assert_eq!(ctx.warning_count(), 1);
        assert!(ctx.ir.is_some());
    }

    #[test]
    fn test_duplicates_fail_in_strict_mode() {
        let result = Pipeline::new()
            .strict(true)
            .run(make_test_document(DUPLICATES));

        assert!(result.is_err());
    }
}
