//! TypeScript/JavaScript object literal builder.

use tsgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (will be single-quoted).
    String(String),
    /// A template literal body (will be wrapped in backticks).
    Template(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// Shorthand property, the key names a variable in scope.
    Shorthand,
}

impl Property {
    fn render(&self) -> String {
        match &self.value {
            PropertyValue::String(s) => format!("{}: '{}'", self.key, s),
            PropertyValue::Template(s) => format!("{}: `{}`", self.key, s),
            PropertyValue::Raw(s) => format!("{}: {}", self.key, s),
            PropertyValue::Shorthand => self.key.clone(),
        }
    }
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value,
        });
        self
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::String(value.into()))
    }

    /// Add a property with a template literal value.
    pub fn template(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::Template(value.into()))
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::Raw(value.into()))
    }

    /// Conditionally add a raw property.
    pub fn raw_if(self, condition: bool, key: impl Into<String>, value: impl Into<String>) -> Self {
        if condition {
            self.raw(key, value)
        } else {
            self
        }
    }

    /// Add a shorthand property where key equals the variable name.
    pub fn shorthand(self, name: impl Into<String>) -> Self {
        self.push(name, PropertyValue::Shorthand)
    }

    /// Conditionally add a shorthand property.
    pub fn shorthand_if(self, condition: bool, name: impl Into<String>) -> Self {
        if condition {
            self.shorthand(name)
        } else {
            self
        }
    }

    /// Render on a single line (`{ ok: true, data: res }`).
    pub fn inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let props: Vec<String> = self.properties.iter().map(Property::render).collect();
        format!("{{ {} }}", props.join(", "))
    }

    /// Convert properties to code fragments, one line each with a trailing
    /// comma.
    pub fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| CodeFragment::Line(format!("{},", prop.render())))
            .collect()
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Raw("{}".to_string())];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.properties_to_fragments(),
            close: Some("}".to_string()),
        }]
    }
}
