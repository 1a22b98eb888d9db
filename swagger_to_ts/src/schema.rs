use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::SwaggerGenError;

/// The parts of a Swagger document the generator reads.
///
/// Only `definitions` is modeled; every other top-level key is ignored.
/// `IndexMap` keeps schemas and properties in document order.
#[derive(Debug, Deserialize)]
pub struct SwaggerDocument {
    pub definitions: IndexMap<String, Schema>,
}

/// One named entry of `definitions`.
#[derive(Debug, Default, Deserialize)]
pub struct Schema {
    /// Absent `properties` reads as an empty map.
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
}

/// The `type` keyword of a property.
///
/// Anything other than a single string (e.g. `["string", "null"]`) is kept
/// as `Other` so one odd property cannot fail the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeKeyword {
    Name(String),
    Other(serde_json::Value),
}

/// One property of a schema, or the `items` of an array property.
#[derive(Debug, Default, Deserialize)]
pub struct Property {
    /// No `type` key (or `null`) means the property is an implicit reference.
    #[serde(default)]
    pub r#type: Option<TypeKeyword>,

    #[serde(default)]
    pub items: Option<Box<Property>>,
}

impl SwaggerDocument {
    /// Parse a document, reporting the JSON path of the first structural error.
    ///
    /// # Errors
    ///
    /// Returns `SwaggerGenError::InputParse` if the text is not JSON, has no
    /// `definitions` object, or a schema/property has the wrong shape.
    pub fn from_json(source: &str) -> Result<Self, SwaggerGenError> {
        let deserializer = &mut serde_json::Deserializer::from_str(source);
        let document: Self = serde_path_to_error::deserialize(deserializer)?;
        Ok(document)
    }

    /// Build from an already parsed value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SwaggerDocument::from_json`].
    pub fn from_value(value: &serde_json::Value) -> Result<Self, SwaggerGenError> {
        let document: Self = serde_path_to_error::deserialize(value)?;
        Ok(document)
    }
}

impl Property {
    /// The `type` token when it is a plain string.
    #[must_use]
    pub fn type_token(&self) -> Option<&str> {
        match &self.r#type {
            Some(TypeKeyword::Name(token)) => Some(token.as_str()),
            Some(TypeKeyword::Other(_)) | None => None,
        }
    }
}

impl TypeKeyword {
    /// `string` for names, compact JSON for anything else.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Name(token) => token.clone(),
            Self::Other(value) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_and_properties_keep_document_order() {
        let json: &str = r#"{
            "swagger": "2.0",
            "definitions": {
                "Zebra": { "properties": { "z": { "type": "string" }, "a": { "type": "string" } } },
                "Apple": { "properties": {} }
            }
        }"#;
        let document = SwaggerDocument::from_json(json).expect("document should parse");

        let schema_keys: Vec<&str> = document.definitions.keys().map(String::as_str).collect();
        assert_eq!(vec!["Zebra", "Apple"], schema_keys);

        let property_keys: Vec<&str> = document.definitions["Zebra"]
            .properties
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(vec!["z", "a"], property_keys);
    }

    #[test]
    fn missing_properties_reads_as_empty() {
        let json: &str = r#"{ "definitions": { "Empty": { "type": "object" } } }"#;
        let document = SwaggerDocument::from_json(json).expect("document should parse");
        assert!(document.definitions["Empty"].properties.is_empty());
    }

    #[test]
    fn nested_items_are_parsed() {
        let json: &str = r##"{ "definitions": { "Pet": { "properties": {
            "tags": { "type": "array", "items": { "type": "string" } },
            "owner": { "$ref": "#/definitions/User" }
        } } } }"##;
        let document = SwaggerDocument::from_json(json).expect("document should parse");
        let pet: &Schema = &document.definitions["Pet"];
        let tags: &Property = &pet.properties["tags"];
        assert_eq!(Some("array"), tags.type_token());
        assert_eq!(
            Some("string"),
            tags.items.as_ref().and_then(|items| items.type_token())
        );
        assert_eq!(None, pet.properties["owner"].type_token());
    }

    #[test]
    fn missing_definitions_is_a_parse_error() {
        let json: &str = r#"{ "swagger": "2.0", "paths": {} }"#;
        let error = SwaggerDocument::from_json(json).expect_err("parse should fail");
        assert!(
            matches!(error, SwaggerGenError::InputParse { .. }),
            "expected InputParse, got {error:?}"
        );
        assert!(error.to_string().contains("definitions"), "{error}");
    }

    #[test]
    fn wrong_shape_reports_json_path() {
        let json: &str = r#"{ "definitions": { "Pet": { "properties": ["id", "name"] } } }"#;
        let error = SwaggerDocument::from_json(json).expect_err("parse should fail");
        let SwaggerGenError::InputParse { path, .. } = error else {
            panic!("expected InputParse");
        };
        assert_eq!("definitions.Pet.properties", path);
    }

    #[test]
    fn non_string_type_is_kept_as_other() {
        let json: &str = r#"{ "definitions": { "Pet": { "properties": {
            "nickname": { "type": ["string", "null"] },
            "age": { "type": 7 },
            "owner": { "type": null }
        } } } }"#;
        let document = SwaggerDocument::from_json(json).expect("document should parse");
        let pet: &Schema = &document.definitions["Pet"];

        let nickname: &Property = &pet.properties["nickname"];
        assert_eq!(None, nickname.type_token());
        assert_eq!(
            Some(TypeKeyword::Other(serde_json::json!(["string", "null"]))),
            nickname.r#type
        );
        assert_eq!(
            Some("7".to_string()),
            pet.properties["age"].r#type.as_ref().map(TypeKeyword::describe)
        );
        assert_eq!(None, pet.properties["owner"].r#type);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let error = SwaggerDocument::from_json("{ not json").expect_err("parse should fail");
        assert!(matches!(error, SwaggerGenError::InputParse { .. }));
    }
}
