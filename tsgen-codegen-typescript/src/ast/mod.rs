//! TypeScript AST builders for generating type aliases, functions, object
//! literals and imports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod imports;
mod objects;
mod types;

pub use fns::{Fn, Param};
pub use imports::Import;
pub use objects::{JsObject, Property, PropertyValue};
pub use types::TypeAlias;
