//! Schema nodes of the `definitions` dictionary and of inline schemas.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Prefix of `$ref` pointers into the definitions dictionary.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// A type token of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Integer,
    Number,
    Boolean,
    Null,
    Undefined,
    /// Any token not listed above (e.g. `file`).
    #[serde(other)]
    Unrecognized,
}

/// The `type` field: a single token or a list of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeField {
    Single(SchemaType),
    Multiple(Vec<SchemaType>),
}

/// The `additionalProperties` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<SchemaNode>),
}

/// One node of a schema tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub ty: Option<TypeField>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    #[serde(rename = "allOf")]
    pub all_of: Vec<SchemaNode>,
    #[serde(rename = "anyOf")]
    pub any_of: Vec<SchemaNode>,
    #[serde(rename = "enum")]
    pub enumeration: Vec<serde_json::Value>,
    pub properties: Option<IndexMap<String, SchemaNode>>,
    pub items: Option<Box<SchemaNode>>,
    /// Required property names of this object only.
    #[serde(deserialize_with = "deserialize_required")]
    pub required: Vec<String>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<AdditionalProperties>,
    pub description: Option<String>,
}

impl SchemaNode {
    /// Definition name targeted by `$ref`, with the definitions prefix removed.
    pub fn reference_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .map(|r| r.strip_prefix(DEFINITIONS_PREFIX).unwrap_or(r))
    }

    /// Whether `name` is listed in this node's `required` set.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// The schema form of `additionalProperties`, if any.
    pub fn additional_schema(&self) -> Option<&SchemaNode> {
        match &self.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => Some(schema),
            _ => None,
        }
    }

    /// Description text, empty when absent.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Accept `required` as a list of names; a stray boolean (seen on properties in
/// hand-written documents) is treated as an empty list.
fn deserialize_required<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRequired {
        Names(Vec<String>),
        Flag(bool),
    }

    Ok(match RawRequired::deserialize(deserializer)? {
        RawRequired::Names(names) => names,
        RawRequired::Flag(_) => Vec::new(),
    })
}
