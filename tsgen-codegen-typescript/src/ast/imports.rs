//! TypeScript import builder.

use tsgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// An import statement: `import name from 'module'`, or a side-effect import
/// when no binding is given.
///
/// Module specifiers are single-quoted and no semicolon is emitted, matching
/// the generated client code.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
        }
    }

    /// Bind the module's default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    fn statement(&self) -> String {
        match &self.default {
            Some(name) => format!("import {} from '{}'", name, self.from),
            None => format!("import '{}'", self.from),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}
