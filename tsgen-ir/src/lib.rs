//! Intermediate representation types for the tsgen API client generator.
//!
//! This crate provides the unified type definitions used across the tsgen
//! code generation pipeline.
//!
//! # Architecture
//!
//! ```text
//! swagger.json → tsgen-document (parsing) → tsgen-ir (lowered types) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (type expressions are a tree, rendering happens later)
//! - Self-contained (no external dependencies beyond std)

mod api;
mod types;

pub use api::{ApiIR, Endpoint, EndpointNames, NamedType, QueryParam};
pub use types::{Literal, Member, ObjectShape, Primitive, TypeExpr};
