//! TypeScript function builder.

use tsgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a TypeScript function.
///
/// `name` may be a destructuring pattern such as `{id,orgId}`.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// A destructured object parameter (`{a,b}:Type`).
    pub fn destructured<S: AsRef<str>>(fields: &[S], ty: impl Into<String>) -> Self {
        let fields: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();
        Self::new(format!("{{{}}}", fields.join(",")), ty)
    }
}

/// Builder for TypeScript functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    is_async: bool,
    params: Vec<Param>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            is_async: false,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a nested fragment (e.g. a `try` block) to the function body.
    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn format_signature(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };

        let params_str = self
            .params
            .iter()
            .map(|p| format!("{}:{}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "export {}function {}({}) {{",
            async_kw, self.name, params_str
        )
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        fragments.push(CodeFragment::Block {
            header: self.format_signature(),
            body: self.body.clone(),
            close: Some("}".to_string()),
        });

        fragments
    }
}
