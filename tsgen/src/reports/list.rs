//! List command report data structures.

use super::output::{Output, Report};

/// Endpoints of a document by output group.
#[derive(Debug)]
pub struct ListReport {
    pub groups: Vec<GroupListing>,
}

#[derive(Debug)]
pub struct GroupListing {
    pub name: String,
    /// Output file name (e.g. "roleApi.ts").
    pub file: String,
    pub endpoints: Vec<ListedEndpoint>,
}

#[derive(Debug)]
pub struct ListedEndpoint {
    /// Upper-cased HTTP verb.
    pub method: String,
    pub url: String,
    pub function: String,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.groups.is_empty() {
            out.preformatted("No operations defined");
            return;
        }

        let width = self
            .groups
            .iter()
            .flat_map(|g| &g.endpoints)
            .map(|e| e.method.len() + 1 + e.url.len())
            .max()
            .unwrap_or(0);

        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!("{} ({})", group.name, group.file));
            for endpoint in &group.endpoints {
                let route = format!("{} {}", endpoint.method, endpoint.url);
                out.list_item(&format!("{:width$}  {}", route, endpoint.function, width = width));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_empty_listing() {
        let mut out = RecordingOutput::default();
        ListReport { groups: Vec::new() }.render(&mut out);
        assert_eq!(out.stdout, vec!["No operations defined"]);
    }

    #[test]
    fn test_aligned_listing() {
        let report = ListReport {
            groups: vec![GroupListing {
                name: "role".into(),
                file: "roleApi.ts".into(),
                endpoints: vec![
                    ListedEndpoint {
                        method: "GET".into(),
                        url: "/role".into(),
                        function: "getRole".into(),
                    },
                    ListedEndpoint {
                        method: "DELETE".into(),
                        url: "/role/{id}".into(),
                        function: "deleteRoleById".into(),
                    },
                ],
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "role (roleApi.ts):",
                "  - GET /role          getRole",
                "  - DELETE /role/{id}  deleteRoleById",
            ]
        );
    }
}
