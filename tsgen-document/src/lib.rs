//! Swagger 2.0 document model for the tsgen API client generator.
//!
//! Only the parts of the document the generator reads are modelled: the
//! path-to-operation map and the `definitions` dictionary. Everything else is
//! ignored during deserialization.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod document;
mod error;
mod method;
mod parse;
mod schema;

pub use document::{
    Definitions, Document, Operation, Parameter, ParameterLocation, PathItem, Response,
};
pub use error::{Error, Result, SourceContext};
pub use method::HttpMethod;
pub use parse::parse_document;
pub use schema::{AdditionalProperties, SchemaNode, SchemaType, TypeField, DEFINITIONS_PREFIX};
