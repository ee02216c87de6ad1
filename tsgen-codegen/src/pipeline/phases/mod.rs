//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the document and collects diagnostics
//! - [`LowerPhase`] - transforms the document into API IR

mod lower;
mod validate;

pub use lower::{LowerPhase, lower_document};
pub use validate::{
    DuplicateIdentifierLint, Lint, LintInfo, MultipleBodyLint, UnresolvedReferenceLint,
    ValidatePhase,
};
