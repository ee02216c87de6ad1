//! Indentation unit for generated code.

/// The text written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// Two spaces.
    pub const TYPESCRIPT: Self = Self("  ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}
