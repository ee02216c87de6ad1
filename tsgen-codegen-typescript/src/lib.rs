//! TypeScript back end for the tsgen API client generator.
//!
//! This crate turns lowered API IR into TypeScript modules: one file per URL
//! group, each holding the type declarations and the axios-based client
//! function of every endpoint in the group.
//!
//! # Usage
//!
//! ```ignore
//! use tsgen_codegen::pipeline::Pipeline;
//! use tsgen_codegen_typescript::{Generator, LanguageCodegen};
//! use tsgen_document::Document;
//! use std::path::Path;
//!
//! let document = Document::open("swagger.json")?;
//! let ctx = Pipeline::new().run(document)?;
//! let generator = Generator::from_context(ctx)?;
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("src/apis"))?;
//! ```
//!
//! # Generated Output
//!
//! For every group `<group>` the generator writes `<group>Api.ts`:
//!
//! - the preamble (`import axios from 'axios'` unless configured)
//! - per endpoint: `Path`, `Query`, `Body` and `Res` type aliases, then an
//!   `export async function` calling axios

mod code_file;
mod generator;
mod render;
mod translate;

pub mod ast;
pub mod files;

pub use ast::{Fn, Import, JsObject, Param, TypeAlias};
pub use code_file::{CodeFile, RawCode};
pub use generator::{ErrorStyle, Generator, GeneratorOptions, generate_api_groups};
pub use render::{Position, TypeScriptRenderer, property_key};
pub use translate::translate;
pub use tsgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
