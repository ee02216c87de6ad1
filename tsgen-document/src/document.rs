//! Root document, path items and operations.

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{HttpMethod, SchemaNode};

/// Named schemas referenced by `#/definitions/<name>` pointers.
pub type Definitions = IndexMap<String, SchemaNode>;

/// Root of a Swagger 2.0 document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Spec version string (`"2.0"`).
    pub swagger: Option<String>,
    /// Set by OpenAPI 3 documents, which are rejected during validation.
    pub openapi: Option<String>,
    #[serde(rename = "basePath")]
    pub base_path: Option<String>,
    /// URL template → path item, in document order.
    pub paths: IndexMap<String, PathItem>,
    pub definitions: Definitions,
}

impl Document {
    /// Iterate `(url, method, operation)` in document order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
        self.paths.iter().flat_map(|(url, item)| {
            item.operations
                .iter()
                .map(move |(method, op)| (url.as_str(), *method, op))
        })
    }

    /// Total number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|p| p.operations.len()).sum()
    }
}

/// The operations declared under one URL template.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    /// Verb → operation, in document order. Path-level parameters are
    /// already merged into each operation.
    pub operations: IndexMap<HttpMethod, Operation>,
}

#[derive(Deserialize)]
struct RawPathItem {
    #[serde(default)]
    parameters: Vec<Parameter>,
    #[serde(flatten)]
    entries: IndexMap<String, serde_json::Value>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = RawPathItem::deserialize(deserializer)?;
        let mut operations = IndexMap::new();

        for (key, value) in raw.entries {
            // Vendor extensions and other non-verb keys are skipped
            let Ok(method) = HttpMethod::from_str(&key) else {
                continue;
            };
            let mut op: Operation = serde_json::from_value(value)
                .map_err(|e| D::Error::custom(format!("in '{}' operation: {}", key, e)))?;
            op.inherit_parameters(&raw.parameters);
            operations.insert(method, op);
        }

        Ok(Self { operations })
    }
}

/// A single API operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
    /// Status code → response, in document order.
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// First tag, or `"default"`.
    pub fn tag(&self) -> &str {
        self.tags
            .first()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or("default")
    }

    /// Human label: description, else summary, else the URL itself.
    pub fn label<'a>(&'a self, url: &'a str) -> &'a str {
        [self.description.as_deref(), self.summary.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or(url)
    }

    /// Schema of the success response: `200`, else the first `2xx`, else `default`.
    pub fn success_schema(&self) -> Option<&SchemaNode> {
        let response = self.responses.get("200").or_else(|| {
            self.responses
                .iter()
                .find(|(status, _)| status.len() == 3 && status.starts_with('2'))
                .map(|(_, r)| r)
                .or_else(|| self.responses.get("default"))
        })?;
        response.schema.as_ref()
    }

    /// Parameters declared at a given location, in declaration order.
    pub fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(move |p| p.location == location)
    }

    /// Add path-level parameters not overridden by this operation.
    fn inherit_parameters(&mut self, shared: &[Parameter]) {
        let inherited: Vec<Parameter> = shared
            .iter()
            .filter(|s| {
                !self
                    .parameters
                    .iter()
                    .any(|p| p.name == s.name && p.location == s.location)
            })
            .cloned()
            .collect();
        if !inherited.is_empty() {
            self.parameters.splice(0..0, inherited);
        }
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Path,
    Body,
    Header,
    FormData,
}

/// A declared operation parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub schema: Option<SchemaNode>,
}

/// A response entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Response {
    pub description: Option<String>,
    pub schema: Option<SchemaNode>,
}
