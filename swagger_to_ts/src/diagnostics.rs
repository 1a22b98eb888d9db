//! Non-fatal document checks.
//!
//! Walks the raw document (as `serde_json::Value`) and collects everything the
//! generator will silently ignore or guess at, each located by a JSON Pointer
//! (RFC 6901). Nothing here blocks generation.

use std::fmt;

use serde_json::{Map, Value};

use crate::classify::SchemaRef;
use crate::naming::{pluralize, singularize, to_file_stem};
use crate::primitive::lookup_primitive;
use crate::settings::GenerateSettings;

/// Property keywords that generation ignores.
const UNSUPPORTED_KEYWORDS: &[&str] = &["oneOf", "anyOf", "allOf", "enum", "additionalProperties"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A schema without a `properties` object; generated as an empty interface.
    MissingProperties,
    /// `type: "array"` without `items`; treated as an array of references.
    ArrayMissingItems,
    /// A type token outside the primitive table; rendered as `any`.
    UnmappedType(String),
    /// A keyword generation does not understand.
    UnsupportedKeyword(&'static str),
    /// `$ref` points at a schema other than the one inferred from the property key.
    RefNameMismatch { inferred: String, referenced: String },
    /// An array of references named in singular form; its element type is
    /// inferred from the name as-is.
    SingularArrayName { suggested: String },
    /// A reserved schema was present and skipped.
    ReservedKeySkipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// JSON Pointer to the offending node, e.g. `/definitions/Pet/properties/tags`.
    pub path: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::MissingProperties => {
                write!(f, "{}: schema has no properties", self.path)
            }
            DiagnosticKind::ArrayMissingItems => write!(
                f,
                "{}: array without items, element type inferred from the property name",
                self.path
            ),
            DiagnosticKind::UnmappedType(token) => {
                write!(f, "{}: unmapped type {token:?}, using `any`", self.path)
            }
            DiagnosticKind::UnsupportedKeyword(keyword) => {
                write!(f, "{}: keyword {keyword:?} is ignored", self.path)
            }
            DiagnosticKind::RefNameMismatch {
                inferred,
                referenced,
            } => write!(
                f,
                "{}: $ref targets {referenced:?} but the import is inferred as {inferred:?}",
                self.path
            ),
            DiagnosticKind::SingularArrayName { suggested } => write!(
                f,
                "{}: array property name is singular, consider {suggested:?}",
                self.path
            ),
            DiagnosticKind::ReservedKeySkipped => {
                write!(f, "{}: reserved schema, not generated", self.path)
            }
        }
    }
}

/// Append one escaped segment to a JSON Pointer.
fn pointer(base: &str, segment: &str) -> String {
    let mut path: String = String::with_capacity(base.len() + segment.len() + 1);
    path.push_str(base);
    path.push('/');
    for c in segment.chars() {
        match c {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            other => path.push(other),
        }
    }
    path
}

/// Collect diagnostics for every schema under `/definitions`.
///
/// Returns nothing for documents without a `definitions` object; parsing
/// reports those.
#[must_use]
pub fn scan(document: &Value, settings: &GenerateSettings) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let Some(definitions) = document.get("definitions").and_then(Value::as_object) else {
        return diagnostics;
    };
    let definitions_path: String = pointer("", "definitions");

    for (schema_key, schema) in definitions {
        let schema_path: String = pointer(&definitions_path, schema_key);
        if settings.is_reserved(schema_key) {
            diagnostics.push(Diagnostic {
                path: schema_path,
                kind: DiagnosticKind::ReservedKeySkipped,
            });
            continue;
        }
        let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
            diagnostics.push(Diagnostic {
                path: schema_path,
                kind: DiagnosticKind::MissingProperties,
            });
            continue;
        };
        let properties_path: String = pointer(&schema_path, "properties");
        for (name, property) in properties {
            if let Some(property) = property.as_object() {
                scan_property(name, property, &pointer(&properties_path, name), &mut diagnostics);
            }
        }
    }
    diagnostics
}

fn scan_property(
    name: &str,
    property: &Map<String, Value>,
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut push = |path: &str, kind: DiagnosticKind| {
        diagnostics.push(Diagnostic {
            path: path.to_string(),
            kind,
        });
    };

    for &keyword in UNSUPPORTED_KEYWORDS {
        if property.contains_key(keyword) {
            push(&pointer(path, keyword), DiagnosticKind::UnsupportedKeyword(keyword));
        }
    }

    match type_of(property) {
        TypeNode::Missing => {
            if let Some(kind) = SchemaRef::inferred(name).and_then(|r| ref_mismatch(property, &r)) {
                push(path, kind);
            }
        }
        TypeNode::Other(token) => push(path, DiagnosticKind::UnmappedType(token)),
        TypeNode::Name("object") => {
            if let Some(kind) = SchemaRef::named(name).and_then(|r| ref_mismatch(property, &r)) {
                push(path, kind);
            }
        }
        TypeNode::Name("array") => {
            let items: Option<&Map<String, Value>> =
                property.get("items").and_then(Value::as_object);
            if items.is_none() {
                push(path, DiagnosticKind::ArrayMissingItems);
            }
            match items.map_or(TypeNode::Missing, type_of) {
                TypeNode::Name(token) => {
                    if lookup_primitive(token).is_none() {
                        push(
                            &pointer(path, "items"),
                            DiagnosticKind::UnmappedType(token.to_string()),
                        );
                    }
                }
                TypeNode::Other(token) => {
                    push(&pointer(path, "items"), DiagnosticKind::UnmappedType(token));
                }
                TypeNode::Missing => {
                    if singularize(name) == name && pluralize(name) != name {
                        push(
                            path,
                            DiagnosticKind::SingularArrayName {
                                suggested: pluralize(name),
                            },
                        );
                    }
                    let inferred: Option<SchemaRef> = SchemaRef::inferred(name);
                    if let Some(kind) = items
                        .zip(inferred.as_ref())
                        .and_then(|(i, r)| ref_mismatch(i, r))
                    {
                        push(&pointer(path, "items"), kind);
                    }
                }
            }
        }
        TypeNode::Name(token) => {
            if lookup_primitive(token).is_none() {
                push(path, DiagnosticKind::UnmappedType(token.to_string()));
            }
        }
    }
}

/// The `type` keyword of a node, as the classifier sees it.
enum TypeNode<'a> {
    /// Absent or `null`.
    Missing,
    Name(&'a str),
    /// Any other JSON value, as compact JSON.
    Other(String),
}

fn type_of(node: &Map<String, Value>) -> TypeNode<'_> {
    match node.get("type") {
        None | Some(Value::Null) => TypeNode::Missing,
        Some(Value::String(token)) => TypeNode::Name(token),
        Some(other) => TypeNode::Other(other.to_string()),
    }
}

/// Compare a `$ref`'s target with the schema inferred from the property key.
fn ref_mismatch(node: &Map<String, Value>, inferred: &SchemaRef) -> Option<DiagnosticKind> {
    let target: &str = node.get("$ref").and_then(Value::as_str)?;
    let referenced: &str = target.rsplit('/').next().unwrap_or(target);
    if to_file_stem(referenced) == inferred.schema_key {
        None
    } else {
        Some(DiagnosticKind::RefNameMismatch {
            inferred: inferred.schema_key.clone(),
            referenced: referenced.to_string(),
        })
    }
}
