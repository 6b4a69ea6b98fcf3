//! Type schemas: the introspectable shape of a validated value.
//!
//! A `TypeSchema` is a plain tree built once per root type, either by hand,
//! through `Described` impls in `fieldptr-core`, or from a TOML document in
//! `fieldptr-schema`. It is never mutated after construction, so one schema
//! can be shared by any number of concurrent resolutions.

use serde::{Deserialize, Serialize};

/// The shape of one node in a value's type graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeSchema {
    /// A struct-like node with named fields.
    Object(ObjectSchema),
    /// A sequence or keyed map; every element shares the child schema.
    Array { element: Box<TypeSchema> },
    /// A terminal value with no addressable children.
    Opaque,
}

impl TypeSchema {
    /// An empty object node.
    pub fn object() -> ObjectSchema {
        ObjectSchema::default()
    }

    /// An array node whose elements have schema `element`.
    pub fn array_of(element: impl Into<TypeSchema>) -> Self {
        TypeSchema::Array {
            element: Box::new(element.into()),
        }
    }

    /// A terminal node.
    pub fn opaque() -> Self {
        TypeSchema::Opaque
    }

    /// The object node, if this is one.
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            TypeSchema::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The element schema, if this is an array node.
    pub fn element(&self) -> Option<&TypeSchema> {
        match self {
            TypeSchema::Array { element } => Some(element),
            _ => None,
        }
    }
}

impl From<ObjectSchema> for TypeSchema {
    fn from(object: ObjectSchema) -> Self {
        TypeSchema::Object(object)
    }
}

/// A struct-like node: an optional type name plus fields in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    /// The type's own name, used to recognise type-prefixed namespaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl ObjectSchema {
    /// Set the type name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a field exposed under its own identifier.
    pub fn field(self, ident: impl Into<String>, schema: impl Into<TypeSchema>) -> Self {
        self.with_field(FieldSchema::new(ident, Exposure::Default, schema))
    }

    /// Add a field exposed under `exposed` instead of its identifier.
    pub fn renamed(
        self,
        ident: impl Into<String>,
        exposed: impl Into<String>,
        schema: impl Into<TypeSchema>,
    ) -> Self {
        self.with_field(FieldSchema::new(ident, Exposure::Renamed(exposed.into()), schema))
    }

    /// Add a field that never appears in the external representation.
    pub fn hidden(self, ident: impl Into<String>) -> Self {
        self.with_field(FieldSchema::new(ident, Exposure::Hidden, TypeSchema::Opaque))
    }

    /// Add a fully specified field.
    ///
    /// A field whose identifier is already declared replaces the earlier
    /// declaration in place.
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        match self.fields.iter_mut().find(|f| f.ident == field.ident) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Look up a field by identifier (exact, case-sensitive).
    pub fn get(&self, ident: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.ident == ident)
    }
}

/// How a field appears in the external (JSON) representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exposure {
    /// Exposed under the field identifier.
    #[default]
    Default,
    /// Exposed under a different name.
    Renamed(String),
    /// Never exposed.
    Hidden,
}

/// One field of an object node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// The identifier the validation engine uses in namespaces.
    pub ident: String,
    #[serde(default)]
    pub exposure: Exposure,
    pub schema: TypeSchema,
}

impl FieldSchema {
    pub fn new(
        ident: impl Into<String>,
        exposure: Exposure,
        schema: impl Into<TypeSchema>,
    ) -> Self {
        Self {
            ident: ident.into(),
            exposure,
            schema: schema.into(),
        }
    }

    /// The pointer segment for this field, or `None` when hidden.
    pub fn exposed_name(&self) -> Option<&str> {
        match &self.exposure {
            Exposure::Default => Some(&self.ident),
            Exposure::Renamed(name) => Some(name),
            Exposure::Hidden => None,
        }
    }
}
