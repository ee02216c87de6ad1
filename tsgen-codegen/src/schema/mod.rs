//! Schema lowering.
//!
//! Turns document [`SchemaNode`](tsgen_document::SchemaNode)s into
//! [`TypeExpr`](tsgen_ir::TypeExpr) trees. Resolution order per node is
//! `$ref`, `allOf`, `anyOf`, `enum`, then the effective type.

mod lower;

pub use lower::{EffectiveType, SchemaLowering};
