//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with an import
//! preamble followed by body content.

use tsgen_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript file.
///
/// Organizes code into two sections: the preamble (imports or raw setup
/// code) and the body. Body elements are separated by blank lines.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("axios").default("axios"))
///     .add_all([RawCode::new("export const base = '/api'")])
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    preamble: Vec<Vec<CodeFragment>>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement to the preamble.
    pub fn import(mut self, import: Import) -> Self {
        self.preamble.push(import.to_fragments());
        self
    }

    /// Add raw preamble code.
    pub fn preamble(mut self, code: RawCode) -> Self {
        self.preamble.push(code.to_fragments());
        self
    }

    /// Add body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for fragments in &self.preamble {
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.preamble.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Useful for adding pre-rendered code to a CodeFile. Trailing newlines are
/// dropped so that element spacing is decided by the file.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .trim_end_matches('\n')
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}
