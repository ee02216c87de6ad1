//! Shared code generation utilities for the tsgen API client generator.
//!
//! This crate provides the language-agnostic half of generation: lowering
//! document schemas into [`tsgen_ir::TypeExpr`] trees, naming endpoints, and
//! running the compilation pipeline. Language back ends (e.g.,
//! `tsgen-codegen-typescript`) turn the result into source text.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`schema`] - Schema lowering (SchemaLowering, EffectiveType)
//! - [`naming`] - Identifier synthesis and grouping
//! - [`pipeline`] - Compilation phases, lints and diagnostics
//! - [`language`] - Language-specific abstractions (LanguageCodegen, etc.)

pub mod builder;
pub mod language;
pub mod naming;
pub mod pipeline;
pub mod schema;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable, escape_jsdoc};
