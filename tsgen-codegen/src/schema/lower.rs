//! Lowering of document schema nodes into type expressions.

use indexmap::IndexMap;
use tsgen_document::{Definitions, SchemaNode, SchemaType, TypeField};
use tsgen_ir::{Literal, Member, NamedType, ObjectShape, TypeExpr};

use crate::naming::type_identifier;

/// The type a node resolves to once `$ref`, `allOf`, `anyOf` and `enum` have
/// been ruled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveType {
    Object,
    Array,
    String,
    /// `integer` and `number`.
    Number,
    Boolean,
    /// `null` and `undefined`: no usable static type.
    Void,
    /// A type token with no renderer.
    Unrecognized,
    /// No `type`, `properties` or `items`.
    Missing,
}

impl EffectiveType {
    fn from_token(token: SchemaType) -> Self {
        match token {
            SchemaType::Object => Self::Object,
            SchemaType::Array => Self::Array,
            SchemaType::String => Self::String,
            SchemaType::Integer | SchemaType::Number => Self::Number,
            SchemaType::Boolean => Self::Boolean,
            SchemaType::Null | SchemaType::Undefined => Self::Void,
            SchemaType::Unrecognized => Self::Unrecognized,
        }
    }

    /// Effective types of a node. Explicit `type` wins over shape inference;
    /// a `type` list yields one entry per token.
    pub fn of(node: &SchemaNode) -> Vec<Self> {
        match &node.ty {
            Some(TypeField::Single(token)) => vec![Self::from_token(*token)],
            Some(TypeField::Multiple(tokens)) if !tokens.is_empty() => {
                tokens.iter().copied().map(Self::from_token).collect()
            }
            _ if node.properties.is_some() => vec![Self::Object],
            _ if node.items.is_some() => vec![Self::Array],
            _ => vec![Self::Missing],
        }
    }
}

/// Lowers schema nodes against a definitions dictionary.
///
/// References are inlined. A reference to a definition that is already being
/// lowered further up the stack becomes a [`TypeExpr::Reference`] instead, and
/// the definition is recorded as recursive so a back end can declare it by
/// name (see [`SchemaLowering::named_types`]). The reference carries the
/// declared type name, which differs from the definition name when the latter
/// isn't an identifier (`model.Menu` is declared as `ModelMenu`).
pub struct SchemaLowering<'a> {
    definitions: &'a Definitions,
    in_progress: Vec<String>,
    /// Definition name → declared type name.
    recursive: IndexMap<String, String>,
}

impl<'a> SchemaLowering<'a> {
    pub fn new(definitions: &'a Definitions) -> Self {
        Self {
            definitions,
            in_progress: Vec::new(),
            recursive: IndexMap::new(),
        }
    }

    /// Lower an optional node. Absent nodes lower to `unknown`.
    pub fn lower(&mut self, node: Option<&SchemaNode>) -> TypeExpr {
        match node {
            Some(node) => self.lower_node(node),
            None => TypeExpr::unknown(),
        }
    }

    /// Definitions found to refer back to themselves so far, in discovery order.
    pub fn recursive_names(&self) -> impl Iterator<Item = &str> {
        self.recursive.keys().map(String::as_str)
    }

    pub fn is_recursive(&self, name: &str) -> bool {
        self.recursive.contains_key(name)
    }

    /// Lower every recursive definition into a named declaration.
    ///
    /// Lowering one declaration may discover further recursive definitions;
    /// those are declared as well.
    pub fn named_types(&mut self) -> Vec<NamedType> {
        let mut named = Vec::new();
        let mut index = 0;

        while let Some((definition_name, type_name)) = self
            .recursive
            .get_index(index)
            .map(|(d, t)| (d.clone(), t.clone()))
        {
            index += 1;
            let Some(definition) = self.definitions.get(&definition_name) else {
                continue;
            };
            self.in_progress.push(definition_name);
            let ty = self.lower_node(definition);
            self.in_progress.pop();
            named.push(NamedType { name: type_name, ty });
        }

        named
    }

    fn lower_node(&mut self, node: &SchemaNode) -> TypeExpr {
        if let Some(name) = node.reference_name() {
            return self.lower_reference(name);
        }

        if !node.all_of.is_empty() {
            let members = node.all_of.iter().map(|n| self.lower_node(n)).collect();
            return TypeExpr::Intersection(members);
        }

        if !node.any_of.is_empty() {
            let members = node.any_of.iter().map(|n| self.lower_node(n)).collect();
            return TypeExpr::Union(members);
        }

        if !node.enumeration.is_empty() {
            return TypeExpr::Literals(node.enumeration.iter().map(literal).collect());
        }

        let mut types = EffectiveType::of(node);
        if types.len() == 1 {
            let ty = types.remove(0);
            return self.lower_typed(node, ty);
        }
        TypeExpr::Union(
            types
                .into_iter()
                .map(|ty| self.lower_typed(node, ty))
                .collect(),
        )
    }

    fn lower_reference(&mut self, name: &str) -> TypeExpr {
        let Some(target) = self.definitions.get(name) else {
            // Unknown definitions are assumed to be declared elsewhere
            return TypeExpr::reference(name);
        };

        if self.in_progress.iter().any(|n| n == name) {
            return TypeExpr::reference(self.declare(name));
        }

        self.in_progress.push(name.to_string());
        let ty = self.lower_node(target);
        self.in_progress.pop();
        ty
    }

    /// Type name of a recursive definition, assigned on first sight. Distinct
    /// definitions whose names sanitize alike get a numeric suffix.
    fn declare(&mut self, name: &str) -> String {
        if let Some(type_name) = self.recursive.get(name) {
            return type_name.clone();
        }

        let base = type_identifier(name);
        let mut type_name = base.clone();
        let mut n = 2;
        while self.recursive.values().any(|t| *t == type_name) {
            type_name = format!("{}{}", base, n);
            n += 1;
        }

        tracing::warn!(definition = name, type_name = %type_name, "recursive definition, emitting named type");
        self.recursive.insert(name.to_string(), type_name.clone());
        type_name
    }

    fn lower_typed(&mut self, node: &SchemaNode, ty: EffectiveType) -> TypeExpr {
        match ty {
            EffectiveType::Object => self.lower_object(node),
            EffectiveType::Array => match &node.items {
                Some(items) => TypeExpr::array(self.lower_node(items)),
                None => TypeExpr::array(TypeExpr::unknown()),
            },
            EffectiveType::String => TypeExpr::string(),
            EffectiveType::Number => TypeExpr::number(),
            EffectiveType::Boolean => TypeExpr::boolean(),
            EffectiveType::Void => TypeExpr::unknown(),
            EffectiveType::Unrecognized | EffectiveType::Missing => match node.additional_schema() {
                Some(value) => TypeExpr::map(self.lower_node(value)),
                None => TypeExpr::unknown(),
            },
        }
    }

    fn lower_object(&mut self, node: &SchemaNode) -> TypeExpr {
        let mut shape = ObjectShape::new();

        if let Some(properties) = &node.properties {
            for (name, property) in properties {
                let member = Member::new(name, self.lower_node(property))
                    .optional(!node.is_required(name))
                    .doc(property.description());
                shape = shape.member(member);
            }
        }

        if let Some(value) = node.additional_schema() {
            shape = shape.index(self.lower_node(value));
        }

        TypeExpr::object(shape)
    }
}

fn literal(value: &serde_json::Value) -> Literal {
    match value {
        serde_json::Value::Number(n) => Literal::Number(n.to_string()),
        serde_json::Value::String(s) => Literal::Text(s.clone()),
        other => Literal::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tsgen_ir::Primitive;

    use super::*;

    fn node(value: serde_json::Value) -> SchemaNode {
        serde_json::from_value(value).expect("valid schema")
    }

    fn definitions(value: serde_json::Value) -> Definitions {
        serde_json::from_value(value).expect("valid definitions")
    }

    #[test]
    fn test_absent_node_is_unknown() {
        let defs = Definitions::new();
        assert!(SchemaLowering::new(&defs).lower(None).is_unknown());
    }

    #[test]
    fn test_primitives() {
        let defs = Definitions::new();
        let mut lowering = SchemaLowering::new(&defs);
        assert_eq!(lowering.lower(Some(&node(json!({"type": "string"})))), TypeExpr::string());
        assert_eq!(lowering.lower(Some(&node(json!({"type": "integer"})))), TypeExpr::number());
        assert_eq!(lowering.lower(Some(&node(json!({"type": "boolean"})))), TypeExpr::boolean());
        assert!(lowering.lower(Some(&node(json!({"type": "null"})))).is_unknown());
    }

    #[test]
    fn test_explicit_type_wins_over_inference() {
        let defs = Definitions::new();
        let n = node(json!({"type": "string", "properties": {"a": {"type": "string"}}}));
        assert_eq!(SchemaLowering::new(&defs).lower(Some(&n)), TypeExpr::string());
    }

    #[test]
    fn test_object_inferred_from_properties() {
        let defs = Definitions::new();
        let n = node(json!({
            "required": ["id"],
            "properties": {
                "id": {"type": "string", "description": "Identifier"},
                "age": {"type": "integer"}
            }
        }));
        let TypeExpr::Object(shape) = SchemaLowering::new(&defs).lower(Some(&n)) else {
            panic!("expected object");
        };
        assert_eq!(shape.members.len(), 2);
        assert!(!shape.members[0].optional);
        assert_eq!(shape.members[0].doc.as_deref(), Some("Identifier"));
        assert!(shape.members[1].optional);
    }

    #[test]
    fn test_required_does_not_propagate() {
        let defs = Definitions::new();
        let n = node(json!({
            "required": ["inner"],
            "properties": {
                "inner": {"properties": {"inner": {"type": "string"}}}
            }
        }));
        let TypeExpr::Object(outer) = SchemaLowering::new(&defs).lower(Some(&n)) else {
            panic!("expected object");
        };
        assert!(!outer.members[0].optional);
        let TypeExpr::Object(inner) = &outer.members[0].ty else {
            panic!("expected nested object");
        };
        assert!(inner.members[0].optional);
    }

    #[test]
    fn test_empty_object_is_unknown() {
        let defs = Definitions::new();
        let n = node(json!({"type": "object", "properties": {}}));
        assert!(SchemaLowering::new(&defs).lower(Some(&n)).is_unknown());
    }

    #[test]
    fn test_reference_is_inlined() {
        let defs = definitions(json!({"Tag": {"type": "string"}}));
        let n = node(json!({"items": {"$ref": "#/definitions/Tag"}}));
        assert_eq!(
            SchemaLowering::new(&defs).lower(Some(&n)),
            TypeExpr::array(TypeExpr::string())
        );
    }

    #[test]
    fn test_unresolved_reference_keeps_name() {
        let defs = Definitions::new();
        let n = node(json!({"$ref": "#/definitions/Missing"}));
        assert_eq!(
            SchemaLowering::new(&defs).lower(Some(&n)),
            TypeExpr::reference("Missing")
        );
    }

    #[test]
    fn test_reference_takes_priority_over_composition() {
        let defs = definitions(json!({"Id": {"type": "number"}}));
        let n = node(json!({"$ref": "#/definitions/Id", "anyOf": [{"type": "string"}]}));
        assert_eq!(SchemaLowering::new(&defs).lower(Some(&n)), TypeExpr::number());
    }

    #[test]
    fn test_enum_literals() {
        let defs = Definitions::new();
        let n = node(json!({"enum": [1, 2, "a", true]}));
        assert_eq!(
            SchemaLowering::new(&defs).lower(Some(&n)),
            TypeExpr::Literals(vec![
                Literal::Number("1".into()),
                Literal::Number("2".into()),
                Literal::Text("a".into()),
                Literal::Text("true".into()),
            ])
        );
    }

    #[test]
    fn test_type_list_is_union() {
        let defs = Definitions::new();
        let n = node(json!({"type": ["string", "number"]}));
        assert_eq!(
            SchemaLowering::new(&defs).lower(Some(&n)),
            TypeExpr::Union(vec![TypeExpr::string(), TypeExpr::number()])
        );
    }

    #[test]
    fn test_additional_properties_without_type_is_map() {
        let defs = Definitions::new();
        let n = node(json!({"additionalProperties": {"type": "integer"}}));
        assert_eq!(
            SchemaLowering::new(&defs).lower(Some(&n)),
            TypeExpr::map(TypeExpr::number())
        );

        let unrecognized = node(json!({"type": "file", "additionalProperties": {"type": "string"}}));
        assert_eq!(
            SchemaLowering::new(&defs).lower(Some(&unrecognized)),
            TypeExpr::map(TypeExpr::string())
        );
    }

    #[test]
    fn test_self_reference_terminates() {
        let defs = definitions(json!({
            "Node": {
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "children": {"type": "array", "items": {"$ref": "#/definitions/Node"}}
                }
            }
        }));
        let mut lowering = SchemaLowering::new(&defs);
        let ty = lowering.lower(Some(&node(json!({"$ref": "#/definitions/Node"}))));

        assert_eq!(ty.references(), vec!["Node"]);
        assert!(lowering.is_recursive("Node"));

        let named = lowering.named_types();
        assert_eq!(named.len(), 1);
        assert_eq!(named[0].name, "Node");
        assert_eq!(named[0].ty.references(), vec!["Node"]);
    }

    #[test]
    fn test_mutual_recursion_terminates() {
        let defs = definitions(json!({
            "A": {"properties": {"b": {"$ref": "#/definitions/B"}}},
            "B": {"properties": {"a": {"$ref": "#/definitions/A"}}}
        }));
        let mut lowering = SchemaLowering::new(&defs);
        lowering.lower(Some(&node(json!({"$ref": "#/definitions/A"}))));

        let names: Vec<_> = lowering.recursive_names().collect();
        assert_eq!(names, vec!["A"]);
        let named = lowering.named_types();
        assert_eq!(named.len(), 1);
        assert!(matches!(named[0].ty, TypeExpr::Object(_)));
    }

    #[test]
    fn test_recursive_definition_gets_identifier_name() {
        let defs = definitions(json!({
            "model.Menu": {
                "type": "object",
                "properties": {
                    "children": {"type": "array", "items": {"$ref": "#/definitions/model.Menu"}}
                }
            },
            "ModelMenu": {
                "properties": {"next": {"$ref": "#/definitions/ModelMenu"}}
            }
        }));
        let mut lowering = SchemaLowering::new(&defs);
        let ty = lowering.lower(Some(&node(json!({"$ref": "#/definitions/model.Menu"}))));
        lowering.lower(Some(&node(json!({"$ref": "#/definitions/ModelMenu"}))));

        assert_eq!(ty.references(), vec!["ModelMenu"]);
        assert!(lowering.is_recursive("model.Menu"));

        let named = lowering.named_types();
        let names: Vec<&str> = named.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["ModelMenu", "ModelMenu2"]);
        assert_eq!(named[0].ty.references(), vec!["ModelMenu"]);
    }

    #[test]
    fn test_unresolved_dotted_reference_keeps_name() {
        let defs = Definitions::new();
        let n = node(json!({"$ref": "#/definitions/model.Missing"}));
        assert_eq!(
            SchemaLowering::new(&defs).lower(Some(&n)),
            TypeExpr::reference("model.Missing")
        );
    }

    #[test]
    fn test_missing_shape_is_unknown() {
        let defs = Definitions::new();
        let n = node(json!({"description": "nothing here"}));
        assert_eq!(
            SchemaLowering::new(&defs).lower(Some(&n)),
            TypeExpr::Primitive(Primitive::Unknown)
        );
    }
}
