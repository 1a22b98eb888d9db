//! Generate TypeScript interface files from the `definitions` of a Swagger document.

mod classify;
mod diagnostics;
mod emit;
mod error;
mod naming;
mod primitive;
mod schema;
mod settings;
mod walker;

pub use classify::{ResolvedType, SchemaRef, classify, interface_name};
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use emit::{GENERATED_HEADER, render_interface};
pub use error::SwaggerGenError;
pub use naming::{pluralize, singularize, to_file_stem, to_type_identifier};
pub use primitive::{TsPrimitive, resolve_primitive};
pub use schema::{Property, Schema, SwaggerDocument, TypeKeyword};
pub use settings::{DEFAULT_RESERVED_KEY, GenerateSettings};
pub use walker::{GeneratedUnit, UnitOutcome, generate_units, write_units};

use std::path::Path;

/// Rendered output of one document, not yet written anywhere.
#[derive(Debug)]
pub struct Generation {
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of a full file-to-directory run.
#[derive(Debug)]
pub struct GenerationReport {
    pub outcomes: Vec<UnitOutcome>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Number of units that failed to write.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_ok()).count()
    }
}

/// Generate interface units from a Swagger JSON string.
///
/// # Errors
///
/// Returns `SwaggerGenError::InputParse` if the JSON is invalid or has no
/// `definitions` object, or `SwaggerGenError::Render` if a schema fails to
/// render.
pub fn generate_from_str(
    swagger_json: &str,
    settings: &GenerateSettings,
) -> Result<Generation, SwaggerGenError> {
    let value: serde_json::Value =
        serde_json::from_str(swagger_json).map_err(|source| SwaggerGenError::InputParse {
            path: ".".to_string(),
            source,
        })?;
    let document: SwaggerDocument = SwaggerDocument::from_value(&value)?;
    let diagnostics: Vec<Diagnostic> = diagnostics::scan(&value, settings);
    let units: Vec<GeneratedUnit> = generate_units(&document, settings)?;
    Ok(Generation { units, diagnostics })
}

/// Read a Swagger file and generate its interface units without writing them.
///
/// # Errors
///
/// Returns `SwaggerGenError::InputNotFound` if the file cannot be read, or
/// any error from [`generate_from_str`].
pub fn generate_from_path(
    input_path: impl AsRef<Path>,
    settings: &GenerateSettings,
) -> Result<Generation, SwaggerGenError> {
    let input_path: &Path = input_path.as_ref();
    let swagger_json: String =
        std::fs::read_to_string(input_path).map_err(|source| SwaggerGenError::InputNotFound {
            path: input_path.to_path_buf(),
            source,
        })?;
    generate_from_str(&swagger_json, settings)
}

/// Read a Swagger file and write one interface file per schema into
/// `settings.output_dir`.
///
/// # Errors
///
/// Returns a fatal `SwaggerGenError` if reading, parsing or creating the
/// output directory fails. Per-file write failures are reported in the
/// returned [`GenerationReport`] instead.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    settings: &GenerateSettings,
) -> Result<GenerationReport, SwaggerGenError> {
    let generation: Generation = generate_from_path(input_path, settings)?;
    let outcomes: Vec<UnitOutcome> = write_units(&generation.units, &settings.output_dir)?;
    Ok(GenerationReport {
        outcomes,
        diagnostics: generation.diagnostics,
    })
}
