//! API Intermediate Representation.
//!
//! This module defines the lowered form of an API document. Each operation of
//! the document becomes one [`Endpoint`] with every name and type already
//! resolved, so back ends only have to spell them.
//!
//! # Architecture
//!
//! ```text
//! Document (parsing) → ApiIR (lowering) → Generator (codegen)
//! ```

use crate::TypeExpr;

/// API IR - unified representation for code generation.
#[derive(Debug, Clone, Default)]
pub struct ApiIR {
    /// Endpoints in document order (paths, then verbs within a path).
    pub endpoints: Vec<Endpoint>,
    /// Definitions that refer back to themselves and must be declared by name.
    pub named: Vec<NamedType>,
}

impl ApiIR {
    /// Look up a named declaration.
    pub fn named_type(&self, name: &str) -> Option<&NamedType> {
        self.named.iter().find(|n| n.name == name)
    }

    /// Group names in first-encounter order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for endpoint in &self.endpoints {
            if !groups.contains(&endpoint.group.as_str()) {
                groups.push(&endpoint.group);
            }
        }
        groups
    }

    /// Endpoints belonging to a group, in document order.
    pub fn endpoints_in<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Endpoint> {
        self.endpoints.iter().filter(move |e| e.group == group)
    }
}

/// A definition emitted as a named type alias.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    pub name: String,
    pub ty: TypeExpr,
}

/// Identifiers derived for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointNames {
    /// Synthesized PascalCase identifier (e.g., "UserByIdRole").
    pub identifier: String,
    /// Client function name (e.g., "postUserByIdRole").
    pub function: String,
    pub path_type: String,
    pub query_type: String,
    pub body_type: String,
    pub response_type: String,
}

/// A query parameter. Query values are always serialized as strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: String,
    pub required: bool,
    pub description: Option<String>,
}

/// One lowered API operation.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Lower-cased HTTP verb.
    pub method: String,
    /// URL template as written in the document.
    pub url: String,
    /// Output group (first URL segment, or "root").
    pub group: String,
    /// First operation tag, or "default".
    pub tag: String,
    /// Human label: description, else summary, else the URL.
    pub label: String,
    pub names: EndpointNames,
    /// Placeholder names from the URL template, in template order.
    pub path_params: Vec<String>,
    pub query: Vec<QueryParam>,
    /// Schema of the first body parameter, if it has one.
    pub body: Option<TypeExpr>,
    /// `None` when the document declares no success schema.
    pub response: Option<TypeExpr>,
    /// Named types this endpoint's types refer to.
    pub requires: Vec<String>,
}

impl Endpoint {
    pub fn has_path_params(&self) -> bool {
        !self.path_params.is_empty()
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}
