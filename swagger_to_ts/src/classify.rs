//! Per-property type classification.
//!
//! Decides, for one `(property name, property)` pair, whether the property is
//! a primitive, an array of primitives, or a reference (direct or as array
//! elements) to another schema whose name is inferred from the property key.

use tracing::{debug, warn};

use crate::naming::{singularize, to_file_stem, to_type_identifier};
use crate::primitive::{TsPrimitive, lookup_primitive, resolve_primitive};
use crate::schema::{Property, TypeKeyword};

/// Marker prepended to every generated interface identifier.
pub const INTERFACE_PREFIX: &str = "I";

/// A schema referenced by a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRef {
    /// Interface identifier, e.g. `IPet`.
    pub type_name: String,
    /// Lowercase kebab-case file stem of the referenced schema, e.g. `pet`.
    pub schema_key: String,
}

/// Classification result for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    Primitive(TsPrimitive),
    ArrayOfPrimitive(TsPrimitive),
    ArrayOfReference(SchemaRef),
    Reference(SchemaRef),
    /// A `type` token outside the primitive table; rendered as `any`.
    Unknown(String),
}

/// `pet_owner` -> `IPetOwner`
#[must_use]
pub fn interface_name(schema_name: &str) -> String {
    format!("{INTERFACE_PREFIX}{}", to_type_identifier(schema_name))
}

impl SchemaRef {
    /// Reference to the schema named `schema_name`, taken as-is.
    /// `None` when the name has no alphanumeric content to build a file stem from.
    #[must_use]
    pub fn named(schema_name: &str) -> Option<Self> {
        let schema_key: String = to_file_stem(schema_name);
        if schema_key.is_empty() {
            return None;
        }
        Some(Self {
            type_name: interface_name(schema_name),
            schema_key,
        })
    }

    /// Reference inferred from a (presumably plural) property key.
    #[must_use]
    pub fn inferred(property_name: &str) -> Option<Self> {
        Self::named(&singularize(property_name))
    }
}

impl ResolvedType {
    /// The TypeScript type written after the field name.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Primitive(primitive) => primitive.as_str().to_string(),
            Self::ArrayOfPrimitive(primitive) => format!("{primitive}[]"),
            Self::ArrayOfReference(schema_ref) => format!("{}[]", schema_ref.type_name),
            Self::Reference(schema_ref) => schema_ref.type_name.clone(),
            Self::Unknown(_) => TsPrimitive::Any.as_str().to_string(),
        }
    }

    /// The schema this type imports, if any.
    #[must_use]
    pub const fn schema_ref(&self) -> Option<&SchemaRef> {
        match self {
            Self::ArrayOfReference(schema_ref) | Self::Reference(schema_ref) => Some(schema_ref),
            Self::Primitive(_) | Self::ArrayOfPrimitive(_) | Self::Unknown(_) => None,
        }
    }
}

/// Classify one property. Rules, first match wins:
///
/// 1. no `type` -> implicit reference to `singularize(name)`
/// 2. `array` with typed `items` -> array of that primitive
/// 3. `array` with untyped or missing `items` -> array of references to `singularize(name)`
/// 4. `object` -> reference to `name` itself (not singularized)
/// 5. anything else -> primitive lookup, `Unknown` if the token is not in the table
///
/// A reference whose name yields no file stem (e.g. an empty key) falls back
/// to `any`.
#[must_use]
pub fn classify(property_name: &str, property: &Property) -> ResolvedType {
    let resolved: ResolvedType = match &property.r#type {
        None => SchemaRef::inferred(property_name).map_or_else(
            || unnamed_reference(property_name, ResolvedType::Primitive(TsPrimitive::Any)),
            ResolvedType::Reference,
        ),
        Some(TypeKeyword::Other(value)) => unknown(property_name, value.to_string()),
        Some(TypeKeyword::Name(token)) => match token.as_str() {
            "array" => classify_array(property_name, property.items.as_deref()),
            "object" => SchemaRef::named(property_name).map_or_else(
                || unnamed_reference(property_name, ResolvedType::Primitive(TsPrimitive::Any)),
                ResolvedType::Reference,
            ),
            token => lookup_primitive(token).map_or_else(
                || unknown(property_name, token.to_string()),
                ResolvedType::Primitive,
            ),
        },
    };
    debug!(property = property_name, ?resolved, "classified property");
    resolved
}

fn classify_array(property_name: &str, items: Option<&Property>) -> ResolvedType {
    match items.and_then(|items| items.r#type.as_ref()) {
        Some(TypeKeyword::Name(item_token)) => {
            ResolvedType::ArrayOfPrimitive(resolve_primitive(Some(item_token.as_str())))
        }
        Some(TypeKeyword::Other(value)) => {
            warn!(
                property = property_name,
                token = %value,
                "unmapped items type, rendering as `any[]`"
            );
            ResolvedType::ArrayOfPrimitive(TsPrimitive::Any)
        }
        None => SchemaRef::inferred(property_name).map_or_else(
            || unnamed_reference(property_name, ResolvedType::ArrayOfPrimitive(TsPrimitive::Any)),
            ResolvedType::ArrayOfReference,
        ),
    }
}

fn unknown(property_name: &str, token: String) -> ResolvedType {
    warn!(
        property = property_name,
        token = %token,
        "unmapped property type, rendering as `any`"
    );
    ResolvedType::Unknown(token)
}

fn unnamed_reference(property_name: &str, fallback: ResolvedType) -> ResolvedType {
    warn!(
        property = property_name,
        "cannot infer a schema name from the property key, rendering as `any`"
    );
    fallback
}
