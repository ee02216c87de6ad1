//! Compilation pipeline for code generation.
//!
//! The [`Pipeline`] runs the built-in phases (validate → lower) over a parsed
//! document and hands back a [`CompilationContext`] holding the lowered
//! [`ApiIR`](tsgen_ir::ApiIR) and every diagnostic collected on the way.
//!
//! # Example
//!
//! ```ignore
//! use tsgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().strict(false).run(document)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = Generator::from_context(ctx)?.with_options(options);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
