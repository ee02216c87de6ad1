//! Single-node schema translation.

use tsgen_codegen::{escape_jsdoc, schema::SchemaLowering};
use tsgen_document::{Definitions, SchemaNode};

use crate::render::{Position, TypeScriptRenderer};

/// Translate one schema node into TypeScript type text.
///
/// With an empty `key` the bare type is returned. Otherwise the result is
/// `key:<type>`, preceded by a `/** description */` line when `description`
/// is non-empty. `key` may already carry the `?` optionality marker.
///
/// Absent or shapeless nodes translate to `unknown`; references to missing
/// definitions translate to the bare definition name.
///
/// ```
/// use tsgen_codegen_typescript::translate;
/// use tsgen_document::{Definitions, SchemaNode};
///
/// let node: SchemaNode = serde_json::from_str(r#"{"type": "integer"}"#).unwrap();
/// let defs = Definitions::new();
///
/// assert_eq!(translate("total?", Some(&node), &defs, ""), "total?:number");
/// assert_eq!(translate("", None, &defs, ""), "unknown");
/// ```
pub fn translate(
    key: &str,
    node: Option<&SchemaNode>,
    definitions: &Definitions,
    description: &str,
) -> String {
    let ty = SchemaLowering::new(definitions).lower(node);
    let renderer = TypeScriptRenderer::new();

    if key.is_empty() {
        return renderer.render_at(&ty, Position::Top);
    }

    let mut out = String::new();
    if !description.is_empty() {
        out.push_str(&format!("/** {} */\n", escape_jsdoc(description)));
    }
    out.push_str(key);
    out.push(':');
    out.push_str(&renderer.render_at(&ty, Position::Member));
    out
}
