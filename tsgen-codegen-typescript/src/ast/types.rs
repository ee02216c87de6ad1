//! TypeScript type alias builder.

use tsgen_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript type aliases (`export type Foo = ...;`).
///
/// The right-hand side is taken verbatim and may span several lines.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        fragments.push(CodeFragment::Line(format!(
            "export type {} = {};",
            self.name, self.ty
        )));

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("UserId", "string").build();
        assert_eq!(t, "export type UserId = string;\n");
    }

    #[test]
    fn test_type_alias_with_doc() {
        let t = TypeAlias::new("GetRoleListRes", "unknown")
            .doc("List roles response")
            .build();
        assert_eq!(
            t,
            "/** List roles response */\nexport type GetRoleListRes = unknown;\n"
        );
    }

    #[test]
    fn test_multiline_type() {
        let t = TypeAlias::new("GetRoleByIdPath", "{\nid:string\n}").build();
        assert_eq!(t, "export type GetRoleByIdPath = {\nid:string\n};\n");
    }
}
