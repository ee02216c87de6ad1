//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Indentation-aware buffer that applies fragments
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::{CodeBuilder, escape_jsdoc};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
