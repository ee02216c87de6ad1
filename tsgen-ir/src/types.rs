//! Type expression tree.
//!
//! A [`TypeExpr`] is the result of lowering one schema node. It carries no
//! syntax of its own; a language back end decides how each variant is spelled
//! and where parentheses are needed.

/// Primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    /// Both `integer` and `number` schemas lower to this.
    Number,
    Boolean,
    /// No usable static type.
    Unknown,
}

/// One member of a literal union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Numeric literal, kept in its source spelling.
    Number(String),
    /// Any non-numeric literal, rendered quoted.
    Text(String),
}

/// A named field of an object shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub optional: bool,
    pub doc: Option<String>,
    pub ty: TypeExpr,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            optional: false,
            doc: None,
            ty,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Attach a doc comment. Empty strings are ignored.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        let doc = doc.into();
        if !doc.is_empty() {
            self.doc = Some(doc);
        }
        self
    }
}

/// A structural object type: named members plus an optional dynamic-key member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectShape {
    pub members: Vec<Member>,
    pub index: Option<Box<TypeExpr>>,
}

impl ObjectShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Set the value type of the dynamic-key member.
    pub fn index(mut self, ty: TypeExpr) -> Self {
        self.index = Some(Box::new(ty));
        self
    }

    /// True when the shape carries neither named nor dynamic members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.index.is_none()
    }
}

/// A language-agnostic type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Primitive(Primitive),
    Object(ObjectShape),
    /// Array of the inner type.
    Array(Box<TypeExpr>),
    /// `anyOf` composition.
    Union(Vec<TypeExpr>),
    /// `allOf` composition.
    Intersection(Vec<TypeExpr>),
    /// `enum` values.
    Literals(Vec<Literal>),
    /// A nominal type name, either an unresolved reference or a recursive one.
    Reference(String),
    /// A map with dynamic string keys and values of the inner type.
    Map(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn string() -> Self {
        Self::Primitive(Primitive::String)
    }

    pub fn number() -> Self {
        Self::Primitive(Primitive::Number)
    }

    pub fn boolean() -> Self {
        Self::Primitive(Primitive::Boolean)
    }

    pub fn unknown() -> Self {
        Self::Primitive(Primitive::Unknown)
    }

    pub fn array(inner: TypeExpr) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn map(value: TypeExpr) -> Self {
        Self::Map(Box::new(value))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// Build an object type, collapsing an empty shape to `unknown`.
    pub fn object(shape: ObjectShape) -> Self {
        if shape.is_empty() {
            Self::unknown()
        } else {
            Self::Object(shape)
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Primitive(Primitive::Unknown))
    }

    /// Names of all nominal references in this expression, in visit order.
    pub fn references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_references(&mut names);
        names
    }

    fn collect_references<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Primitive(_) | Self::Literals(_) => {}
            Self::Reference(name) => names.push(name),
            Self::Array(inner) | Self::Map(inner) => inner.collect_references(names),
            Self::Union(items) | Self::Intersection(items) => {
                for item in items {
                    item.collect_references(names);
                }
            }
            Self::Object(shape) => {
                for member in &shape.members {
                    member.ty.collect_references(names);
                }
                if let Some(index) = &shape.index {
                    index.collect_references(names);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_collapses_to_unknown() {
        assert!(TypeExpr::object(ObjectShape::new()).is_unknown());
    }

    #[test]
    fn test_object_with_index_only_is_kept() {
        let ty = TypeExpr::object(ObjectShape::new().index(TypeExpr::string()));
        assert!(matches!(ty, TypeExpr::Object(_)));
    }

    #[test]
    fn test_member_ignores_empty_doc() {
        let member = Member::new("id", TypeExpr::string()).doc("");
        assert!(member.doc.is_none());

        let member = Member::new("id", TypeExpr::string()).doc("Identifier");
        assert_eq!(member.doc.as_deref(), Some("Identifier"));
    }

    #[test]
    fn test_references_walks_nested_shapes() {
        let ty = TypeExpr::object(
            ObjectShape::new()
                .member(Member::new("children", TypeExpr::array(TypeExpr::reference("Node"))))
                .member(Member::new(
                    "extra",
                    TypeExpr::Union(vec![TypeExpr::reference("Leaf"), TypeExpr::string()]),
                ))
                .index(TypeExpr::map(TypeExpr::reference("Meta"))),
        );

        assert_eq!(ty.references(), vec!["Node", "Leaf", "Meta"]);
    }
}
