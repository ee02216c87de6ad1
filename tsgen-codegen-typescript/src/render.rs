//! TypeScript spelling of [`TypeExpr`] trees.
//!
//! Output is compact (`name?:string`, no spaces around operators) and objects
//! put every member on its own line without indentation.

use std::{collections::HashSet, sync::LazyLock};

use tsgen_codegen::{escape_jsdoc, naming::is_identifier};
use tsgen_core::to_pascal_case;
use tsgen_ir::{Literal, Member, ObjectShape, Primitive, TypeExpr};

/// Words that can't name a local binding.
static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "arguments", "await", "break", "case", "catch", "class", "const", "continue",
        "debugger", "default", "delete", "do", "else", "enum", "eval", "export", "extends",
        "false", "finally", "for", "function", "if", "implements", "import", "in",
        "instanceof", "interface", "let", "new", "null", "package", "private", "protected",
        "public", "return", "static", "super", "switch", "this", "throw", "true", "try",
        "typeof", "var", "void", "while", "with", "yield",
    ]
    .into_iter()
    .collect()
});

/// Where an expression is rendered. Decides parenthesisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Right-hand side of an alias, or an unkeyed translation.
    Top,
    /// Type of a keyed member.
    Member,
    /// Element of an array or member of a composite.
    Operand,
}

/// Renders type expressions as TypeScript source.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl TypeScriptRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render at the top level.
    pub fn render(&self, ty: &TypeExpr) -> String {
        self.render_at(ty, Position::Top)
    }

    pub fn render_at(&self, ty: &TypeExpr, position: Position) -> String {
        match ty {
            TypeExpr::Primitive(p) => primitive(*p).to_string(),
            TypeExpr::Reference(name) => name.clone(),
            TypeExpr::Array(inner) => format!("{}[]", self.render_at(inner, Position::Operand)),
            TypeExpr::Map(value) => format!("{{[key:string]:{}}}", self.render_at(value, Position::Member)),
            TypeExpr::Object(shape) => self.render_object(shape),
            TypeExpr::Union(items) => {
                let joined = self.join(items, "|");
                match position {
                    Position::Top => joined,
                    Position::Member | Position::Operand => format!("({})", joined),
                }
            }
            TypeExpr::Intersection(items) => format!("({})", self.join(items, "&")),
            TypeExpr::Literals(values) => {
                let joined = values.iter().map(literal).collect::<Vec<_>>().join("|");
                if position == Position::Operand && values.len() > 1 {
                    format!("({})", joined)
                } else {
                    joined
                }
            }
        }
    }

    /// Render a keyed member: optional doc line, then `name:T` or `name?:T`.
    pub fn render_member(&self, member: &Member) -> String {
        let mut out = String::new();
        if let Some(doc) = &member.doc {
            out.push_str(&format!("/** {} */\n", escape_jsdoc(doc)));
        }
        let marker = if member.optional { "?" } else { "" };
        out.push_str(&format!(
            "{}{}:{}",
            property_key(&member.name),
            marker,
            self.render_at(&member.ty, Position::Member)
        ));
        out
    }

    fn render_object(&self, shape: &ObjectShape) -> String {
        if shape.is_empty() {
            return primitive(Primitive::Unknown).to_string();
        }

        let mut out = String::from("{");
        for member in &shape.members {
            out.push('\n');
            out.push_str(&self.render_member(member));
        }
        if let Some(index) = &shape.index {
            out.push_str(&format!("\n[key:string]:{}", self.render_at(index, Position::Member)));
        }
        out.push_str("\n}");
        out
    }

    fn join(&self, items: &[TypeExpr], separator: &str) -> String {
        items
            .iter()
            .map(|item| self.render_at(item, Position::Operand))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn primitive(p: Primitive) -> &'static str {
    match p {
        Primitive::String => "string",
        Primitive::Number => "number",
        Primitive::Boolean => "boolean",
        Primitive::Unknown => "unknown",
    }
}

fn literal(value: &Literal) -> String {
    match value {
        Literal::Number(n) => n.clone(),
        Literal::Text(s) => quote(s),
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Spell a member name, quoting it when it isn't a valid identifier.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) { name.to_string() } else { quote(name) }
}

/// Local variable name for a value keyed by `name`.
///
/// Identifiers are kept; other names are camelCased from their word parts
/// (`user-id` → `userId`) and reserved words get a trailing `_`.
pub fn binding_name(name: &str) -> String {
    let mut binding = if is_identifier(name) {
        name.to_string()
    } else {
        let words: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '$' { c } else { '_' })
            .collect();
        let pascal = to_pascal_case(&words);
        let mut chars = pascal.chars();
        match chars.next() {
            Some(c) if c.is_ascii_digit() => format!("_{}", pascal),
            Some(c) => c.to_lowercase().chain(chars).collect(),
            None => "_".to_string(),
        }
    };

    if RESERVED_WORDS.contains(binding.as_str()) {
        binding.push('_');
    }
    binding
}

#[cfg(test)]
mod tests {
    use tsgen_ir::ObjectShape;

    use super::*;

    fn render(ty: &TypeExpr) -> String {
        TypeScriptRenderer::new().render(ty)
    }

    #[test]
    fn test_primitives() {
        assert_eq!(render(&TypeExpr::string()), "string");
        assert_eq!(render(&TypeExpr::number()), "number");
        assert_eq!(render(&TypeExpr::boolean()), "boolean");
        assert_eq!(render(&TypeExpr::unknown()), "unknown");
    }

    #[test]
    fn test_object_members() {
        let ty = TypeExpr::object(
            ObjectShape::new()
                .member(Member::new("id", TypeExpr::string()))
                .member(Member::new("name", TypeExpr::string()).optional(true).doc("Display name")),
        );
        assert_eq!(render(&ty), "{\nid:string\n/** Display name */\nname?:string\n}");
    }

    #[test]
    fn test_object_with_index() {
        let ty = TypeExpr::object(
            ObjectShape::new()
                .member(Member::new("total", TypeExpr::number()).optional(true))
                .index(TypeExpr::boolean()),
        );
        assert_eq!(render(&ty), "{\ntotal?:number\n[key:string]:boolean\n}");
    }

    #[test]
    fn test_union_parenthesised_when_embedded() {
        let union = TypeExpr::Union(vec![TypeExpr::string(), TypeExpr::number()]);
        assert_eq!(render(&union), "string|number");
        assert_eq!(render(&TypeExpr::array(union.clone())), "(string|number)[]");

        let member = Member::new("v", union);
        assert_eq!(TypeScriptRenderer.render_member(&member), "v:(string|number)");
    }

    #[test]
    fn test_literals() {
        let literals = TypeExpr::Literals(vec![
            Literal::Number("1".into()),
            Literal::Number("2".into()),
            Literal::Text("a".into()),
        ]);
        assert_eq!(render(&literals), "1|2|'a'");
        assert_eq!(render(&TypeExpr::array(literals)), "(1|2|'a')[]");
    }

    #[test]
    fn test_map_and_reference() {
        assert_eq!(render(&TypeExpr::map(TypeExpr::string())), "{[key:string]:string}");
        assert_eq!(render(&TypeExpr::array(TypeExpr::reference("Menu"))), "Menu[]");
    }

    #[test]
    fn test_property_key() {
        assert_eq!(property_key("pageSize"), "pageSize");
        assert_eq!(property_key("$id"), "$id");
        assert_eq!(property_key("X-Token"), "'X-Token'");
        assert_eq!(property_key("1st"), "'1st'");
    }

    #[test]
    fn test_binding_name() {
        assert_eq!(binding_name("id"), "id");
        assert_eq!(binding_name("orgId"), "orgId");
        assert_eq!(binding_name("user-id"), "userId");
        assert_eq!(binding_name("file.name"), "fileName");
        assert_eq!(binding_name("2fa"), "_2fa");
        assert_eq!(binding_name("class"), "class_");
    }

    #[test]
    fn test_member_doc_is_escaped() {
        let member = Member::new("glob", TypeExpr::string()).doc("e.g. src/**/*.ts");
        assert_eq!(
            TypeScriptRenderer.render_member(&member),
            "/** e.g. src/**\\/*.ts */\nglob:string"
        );
    }
}
