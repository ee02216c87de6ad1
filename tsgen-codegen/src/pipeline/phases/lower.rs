//! Lower phase - transforms the document to API IR.
//!
//! Every operation becomes one [`Endpoint`] with its names, parameters and
//! lowered body and response types. Definitions that refer back to themselves
//! are collected once for the whole document.

use eyre::Result;
use indexmap::IndexSet;
use tsgen_document::{Document, HttpMethod, Operation, ParameterLocation};
use tsgen_ir::{ApiIR, Endpoint, NamedType, QueryParam, TypeExpr};

use crate::{
    naming::{endpoint_names, group_key, path_placeholders},
    pipeline::{CompilationContext, Phase},
    schema::SchemaLowering,
};

/// Phase that transforms the document into API IR.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform document to API IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = lower_document(&ctx.document);
        tracing::info!(
            endpoints = ir.endpoints.len(),
            groups = ir.groups().len(),
            named = ir.named.len(),
            "lowered document"
        );
        ctx.ir = Some(ir);
        Ok(())
    }
}

/// Lower a document into API IR.
pub fn lower_document(document: &Document) -> ApiIR {
    let mut lowering = SchemaLowering::new(&document.definitions);

    let mut endpoints: Vec<Endpoint> = document
        .operations()
        .map(|(url, method, op)| {
            let endpoint = lower_operation(&mut lowering, url, method, op);
            tracing::debug!(
                function = %endpoint.names.function,
                group = %endpoint.group,
                "lowered endpoint"
            );
            endpoint
        })
        .collect();

    let named = lowering.named_types();
    for endpoint in &mut endpoints {
        endpoint.requires = requires(endpoint, &named);
    }

    ApiIR { endpoints, named }
}

fn lower_operation(
    lowering: &mut SchemaLowering<'_>,
    url: &str,
    method: HttpMethod,
    op: &Operation,
) -> Endpoint {
    let names = endpoint_names(method, url);

    let query = op
        .parameters_in(ParameterLocation::Query)
        .filter(|p| !p.name.is_empty())
        .map(|p| QueryParam {
            name: p.name.clone(),
            required: p.required,
            description: p.description.clone().filter(|d| !d.is_empty()),
        })
        .collect();

    let body = op
        .parameters_in(ParameterLocation::Body)
        .next()
        .and_then(|p| p.schema.as_ref())
        .map(|schema| lowering.lower(Some(schema)));

    let response = op.success_schema().map(|s| lowering.lower(Some(s)));

    Endpoint {
        method: method.as_str().to_string(),
        url: url.to_string(),
        group: group_key(url).to_string(),
        tag: op.tag().to_string(),
        label: op.label(url).to_string(),
        names,
        path_params: path_placeholders(url),
        query,
        body,
        response,
        requires: Vec::new(),
    }
}

/// Named types reachable from the body and response of an endpoint, in
/// discovery order.
fn requires(endpoint: &Endpoint, named: &[NamedType]) -> Vec<String> {
    let mut found: IndexSet<&str> = IndexSet::new();
    let mut pending: Vec<&TypeExpr> = endpoint.body.iter().chain(&endpoint.response).collect();

    while let Some(ty) = pending.pop() {
        for name in ty.references() {
            let Some(declaration) = named.iter().find(|n| n.name == name) else {
                continue;
            };
            if found.insert(declaration.name.as_str()) {
                pending.push(&declaration.ty);
            }
        }
    }

    found.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(content: &str) -> ApiIR {
        let doc: Document = content.parse().expect("Failed to parse test document");
        lower_document(&doc)
    }

    #[test]
    fn test_lower_names_and_groups() {
        let ir = lower(
            r#"{"paths": {
                "/permission": {"get": {"tags": ["Permission"], "summary": "List"}},
                "/role/{id}": {"delete": {}}
            }}"#,
        );

        assert_eq!(ir.endpoints.len(), 2);
        let first = &ir.endpoints[0];
        assert_eq!(first.method, "get");
        assert_eq!(first.names.function, "getPermission");
        assert_eq!(first.group, "permission");
        assert_eq!(first.tag, "Permission");
        assert_eq!(first.label, "List");
        assert!(first.response.is_none());

        let second = &ir.endpoints[1];
        assert_eq!(second.names.function, "deleteRoleById");
        assert_eq!(second.path_params, vec!["id"]);
        assert_eq!(second.tag, "default");
        assert_eq!(second.label, "/role/{id}");
        assert_eq!(ir.groups(), vec!["permission", "role"]);
    }

    #[test]
    fn test_lower_query_and_body() {
        let ir = lower(
            r#"{"paths": {"/template": {"post": {
                "parameters": [
                    {"name": "page", "in": "query", "description": "Page number", "required": true},
                    {"name": "", "in": "query"},
                    {"name": "X-Token", "in": "header"},
                    {"name": "data", "in": "body", "schema": {"type": "object",
                        "properties": {"name": {"type": "string"}}}}
                ]
            }}}}"#,
        );

        let endpoint = &ir.endpoints[0];
        assert_eq!(endpoint.query.len(), 1);
        assert_eq!(endpoint.query[0].name, "page");
        assert!(endpoint.query[0].required);
        assert_eq!(endpoint.query[0].description.as_deref(), Some("Page number"));
        assert!(matches!(endpoint.body, Some(TypeExpr::Object(_))));
    }

    #[test]
    fn test_first_body_parameter_wins() {
        let ir = lower(
            r#"{"paths": {"/note": {"post": {"parameters": [
                {"name": "text", "in": "body", "schema": {"type": "string"}},
                {"name": "count", "in": "body", "schema": {"type": "number"}}
            ]}}}}"#,
        );
        assert_eq!(ir.endpoints[0].body, Some(TypeExpr::string()));
    }

    #[test]
    fn test_body_without_schema_is_absent() {
        let ir = lower(r#"{"paths": {"/file": {"put": {"parameters": [{"name": "f", "in": "body"}]}}}}"#);
        assert!(ir.endpoints[0].body.is_none());
    }

    #[test]
    fn test_recursive_definition_required() {
        let ir = lower(
            r##"{
                "paths": {
                    "/menu/tree": {"get": {"responses": {"200": {"schema": {
                        "type": "array", "items": {"$ref": "#/definitions/Menu"}
                    }}}}},
                    "/menu/count": {"get": {"responses": {"200": {"schema": {"type": "number"}}}}}
                },
                "definitions": {
                    "Menu": {"type": "object", "properties": {
                        "children": {"type": "array", "items": {"$ref": "#/definitions/Menu"}}
                    }}
                }
            }"##,
        );

        assert_eq!(ir.named.len(), 1);
        assert_eq!(ir.named[0].name, "Menu");
        assert_eq!(ir.endpoints[0].requires, vec!["Menu"]);
        assert!(ir.endpoints[1].requires.is_empty());
    }
}
