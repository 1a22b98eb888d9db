//! Interface rendering: turns one schema into the text of its `.ts` file.
//!
//! [`build_interface`] classifies every property and collects the imports;
//! [`emit_interface`] writes the result to any `io::Write`.

use std::io::{self, Write};

use indexmap::IndexSet;
use tracing::debug;

use crate::classify::{ResolvedType, SchemaRef, classify, interface_name};
use crate::schema::Schema;
use crate::settings::GenerateSettings;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Generated by swagger-to-ts. Do not edit manually.";

/// An interface to be emitted, with its imports and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDef {
    pub name: String,
    pub imports: Vec<ImportDef>,
    pub fields: Vec<FieldDef>,
}

/// `import { <type_name> } from '<module_path>';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDef {
    pub type_name: String,
    pub module_path: String,
}

/// One `<name>: <type>;` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: ResolvedType,
}

/// Classify every property of `schema` and collect the imports it needs.
/// Field and import order follow property order.
#[must_use]
pub fn build_interface(
    schema_name: &str,
    schema: &Schema,
    settings: &GenerateSettings,
) -> InterfaceDef {
    let fields: Vec<FieldDef> = schema
        .properties
        .iter()
        .map(|(key, property)| FieldDef {
            name: key.clone(),
            ty: classify(key, property),
        })
        .collect();

    let mut seen: IndexSet<&str> = IndexSet::new();
    let mut imports: Vec<ImportDef> = Vec::new();
    for schema_ref in fields.iter().filter_map(|f| f.ty.schema_ref()) {
        if settings.dedupe_imports && !seen.insert(schema_ref.schema_key.as_str()) {
            continue;
        }
        imports.push(import_for(schema_ref, settings));
    }

    InterfaceDef {
        name: interface_name(schema_name),
        imports,
        fields,
    }
}

fn import_for(schema_ref: &SchemaRef, settings: &GenerateSettings) -> ImportDef {
    ImportDef {
        type_name: schema_ref.type_name.clone(),
        module_path: settings.import_path(&schema_ref.schema_key),
    }
}

/// True if `name` can be written as a bare TypeScript property name.
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Property name as written in the interface body; quoted when it is not a
/// plain identifier (e.g. `'foo-bar'`).
fn field_key(name: &str) -> String {
    if is_plain_identifier(name) {
        name.to_string()
    } else {
        let escaped: String = name.replace('\\', "\\\\").replace('\'', "\\'");
        format!("'{escaped}'")
    }
}

/// Emit a single interface file to the writer.
///
/// # Errors
///
/// Propagates any error from `writer`.
pub fn emit_interface<W: Write>(interface: &InterfaceDef, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{GENERATED_HEADER}")?;
    writeln!(writer)?;
    for import in &interface.imports {
        writeln!(
            writer,
            "import {{ {} }} from '{}';",
            import.type_name, import.module_path
        )?;
    }
    if !interface.imports.is_empty() {
        writeln!(writer)?;
    }
    writeln!(writer, "export interface {} {{", interface.name)?;
    for field in &interface.fields {
        writeln!(writer, "    {}: {};", field_key(&field.name), field.ty.render())?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// Build and render the full file content for one schema.
///
/// # Errors
///
/// Propagates any error from [`emit_interface`], or `InvalidData` if the
/// rendered bytes are not UTF-8.
pub fn render_interface(
    schema_name: &str,
    schema: &Schema,
    settings: &GenerateSettings,
) -> io::Result<String> {
    let interface: InterfaceDef = build_interface(schema_name, schema, settings);
    let mut output: Vec<u8> = Vec::new();
    emit_interface(&interface, &mut output)?;
    debug!(
        schema = schema_name,
        imports = interface.imports.len(),
        fields = interface.fields.len(),
        "rendered interface"
    );
    String::from_utf8(output).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}
