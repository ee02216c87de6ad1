//! Lint for `$ref` pointers that name no definition.

use std::collections::HashSet;

use tsgen_document::{AdditionalProperties, Document, SchemaNode};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about references to missing definitions. Such references
/// are emitted as bare type names.
pub struct UnresolvedReferenceLint;

impl Lint for UnresolvedReferenceLint {
    fn name(&self) -> &'static str {
        "unresolved-reference"
    }

    fn description(&self) -> &'static str {
        "Detect $ref pointers to definitions that don't exist"
    }

    fn check(&self, document: &Document, diagnostics: &mut Vec<Diagnostic>) {
        let mut reported = HashSet::new();
        let mut report = |name: &str, location: String| {
            if !document.definitions.contains_key(name) && reported.insert(name.to_string()) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("reference to undefined definition '{}'", name),
                    )
                    .at(location),
                );
            }
        };

        for (name, node) in &document.definitions {
            walk(node, &mut |r| report(r, format!("definitions.{}", name)));
        }

        for (url, method, op) in document.operations() {
            let location = format!("paths.{}.{}", url, method);
            let schemas = op
                .parameters
                .iter()
                .filter_map(|p| p.schema.as_ref())
                .chain(op.responses.values().filter_map(|r| r.schema.as_ref()));
            for schema in schemas {
                walk(schema, &mut |r| report(r, location.clone()));
            }
        }
    }
}

/// Visit every reference name below `node`.
fn walk(node: &SchemaNode, visit: &mut dyn FnMut(&str)) {
    if let Some(name) = node.reference_name() {
        visit(name);
    }
    for child in node.all_of.iter().chain(&node.any_of) {
        walk(child, visit);
    }
    if let Some(properties) = &node.properties {
        for child in properties.values() {
            walk(child, visit);
        }
    }
    if let Some(items) = &node.items {
        walk(items, visit);
    }
    if let Some(AdditionalProperties::Schema(value)) = &node.additional_properties {
        walk(value, visit);
    }
}
