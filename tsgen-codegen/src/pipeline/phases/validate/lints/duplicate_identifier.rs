//! Lint for endpoint identifier collisions.

use std::collections::HashMap;

use tsgen_document::Document;

use super::super::Lint;
use crate::{
    naming::{endpoint_names, group_key},
    pipeline::Diagnostic,
};

/// Lint that warns when two operations of one output group synthesize the
/// same function name. The later declarations would shadow the earlier ones.
pub struct DuplicateIdentifierLint;

impl Lint for DuplicateIdentifierLint {
    fn name(&self) -> &'static str {
        "duplicate-identifier"
    }

    fn description(&self) -> &'static str {
        "Detect operations that generate the same function name within a group"
    }

    fn check(&self, document: &Document, diagnostics: &mut Vec<Diagnostic>) {
        // (group, function) -> first "VERB url"
        let mut seen: HashMap<(&str, String), String> = HashMap::new();

        for (url, method, _) in document.operations() {
            let function = endpoint_names(method, url).function;
            let group = group_key(url);
            let current = format!("{} {}", method.as_str().to_uppercase(), url);

            match seen.get(&(group, function.clone())) {
                Some(first) => diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "duplicate function '{}' in group '{}' ({} conflicts with {})",
                            function, group, current, first
                        ),
                    )
                    .at(format!("paths.{}.{}", url, method)),
                ),
                None => {
                    seen.insert((group, function), current);
                }
            }
        }
    }
}
