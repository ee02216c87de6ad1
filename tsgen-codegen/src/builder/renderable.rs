//! Fragments produced by AST nodes and consumed by [`CodeBuilder`](super::CodeBuilder).

/// One piece of generated source. Indentation is decided when the fragment is
/// applied, not when it is built.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// Text ended by a newline.
    Line(String),
    /// Text with no newline.
    Raw(String),
    /// Header line, indented body, optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    Indent(Vec<CodeFragment>),
    /// Doc comment text, one or more lines.
    JsDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}

/// A node that can be turned into code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(CodeFragment::line("return res"), CodeFragment::Line("return res".to_string()));
        assert_eq!(
            CodeFragment::block("try {", vec![], None),
            CodeFragment::Block {
                header: "try {".to_string(),
                body: vec![],
                close: None,
            }
        );
    }

    #[test]
    fn test_reference_forwards_fragments() {
        struct Semicolon;
        impl Renderable for Semicolon {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Raw(";".to_string())]
            }
        }

        fn fragments(node: impl Renderable) -> Vec<CodeFragment> {
            node.to_fragments()
        }

        assert_eq!(fragments(&Semicolon), vec![CodeFragment::Raw(";".to_string())]);
    }
}
