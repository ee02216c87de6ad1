//! Indentation-aware text buffer that renders [`CodeFragment`]s.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated source, tracking the current nesting depth.
///
/// ```
/// use tsgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("try {")
///     .push_indent()
///     .push_line("return res")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "try {\n  return res\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Append text followed by a newline. Multi-line text is indented line by
    /// line; empty lines stay empty.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for line in s.split('\n') {
            if !line.is_empty() {
                self.write_indent();
                self.buffer.push_str(line);
            }
            self.buffer.push('\n');
        }
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append text as is: no indentation, no newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Append a doc comment: `/** text */` for one line, a starred block
    /// otherwise. A `*/` inside the text is escaped.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        let text = escape_jsdoc(text);
        if !text.contains('\n') {
            return self.push_line(&format!("/** {} */", text));
        }

        self.push_line("/**");
        for line in text.lines() {
            self.push_line(&format!(" * {}", line));
        }
        self.push_line(" */")
    }

    /// Append every fragment of a node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.apply_indented(body);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(fragments) => self.apply_indented(fragments),
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn apply_indented(&mut self, fragments: Vec<CodeFragment>) {
        self.push_indent();
        for fragment in fragments {
            self.apply_fragment(fragment);
        }
        self.push_dedent();
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

/// Make text safe to place inside a `/** ... */` comment.
pub fn escape_jsdoc(text: &str) -> String {
    text.replace("*/", "*\\/")
}
