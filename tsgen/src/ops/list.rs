//! List operation - endpoints by output group.

use tsgen_codegen::pipeline::phases::lower_document;
use tsgen_codegen_typescript::files::ApiTs;
use tsgen_document::Document;

use crate::reports::{GroupListing, ListReport, ListedEndpoint};

/// Execute the list operation. Lints are not run.
pub fn list(document: &Document) -> ListReport {
    let ir = lower_document(document);

    let groups = ir
        .groups()
        .into_iter()
        .map(|group| GroupListing {
            name: group.to_string(),
            file: ApiTs::file_name(group),
            endpoints: ir
                .endpoints_in(group)
                .map(|e| ListedEndpoint {
                    method: e.method.to_uppercase(),
                    url: e.url.clone(),
                    function: e.names.function.clone(),
                })
                .collect(),
        })
        .collect();

    ListReport { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_groups() {
        let doc: Document = r#"{"paths": {
            "/permission": {"get": {}, "post": {}},
            "/permission/{id}": {"put": {}}
        }}"#
        .parse()
        .unwrap();

        let report = list(&doc);

        assert_eq!(report.groups.len(), 1);
        let group = &report.groups[0];
        assert_eq!(group.file, "permissionApi.ts");
        let functions: Vec<&str> = group.endpoints.iter().map(|e| e.function.as_str()).collect();
        assert_eq!(functions, vec!["getPermission", "postPermission", "putPermissionById"]);
        assert_eq!(group.endpoints[2].method, "PUT");
    }
}
