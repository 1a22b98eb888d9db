//! Drives generation across every schema and hands the results to the
//! filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, error};

use crate::emit::render_interface;
use crate::error::SwaggerGenError;
use crate::naming::to_file_stem;
use crate::schema::{Schema, SwaggerDocument};
use crate::settings::GenerateSettings;

/// The file produced for one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Key of the schema in `definitions`.
    pub schema_key: String,
    /// e.g. `order-item.interface.ts`
    pub file_name: String,
    pub content: String,
}

/// Result of writing one unit.
#[derive(Debug)]
pub struct UnitOutcome {
    pub schema_key: String,
    pub path: PathBuf,
    pub result: Result<(), SwaggerGenError>,
}

impl UnitOutcome {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

fn generate_unit(
    schema_key: &str,
    schema: &Schema,
    settings: &GenerateSettings,
) -> Result<GeneratedUnit, SwaggerGenError> {
    let content: String =
        render_interface(schema_key, schema, settings).map_err(|source| {
            SwaggerGenError::Render {
                schema_key: schema_key.to_string(),
                source,
            }
        })?;
    Ok(GeneratedUnit {
        schema_key: schema_key.to_string(),
        file_name: settings.file_name(&to_file_stem(schema_key)),
        content,
    })
}

/// Render one unit per non-reserved schema, in `definitions` order.
///
/// Each unit depends only on its own schema, so with `settings.parallel` the
/// rendering runs on the rayon pool.
///
/// # Errors
///
/// Returns `SwaggerGenError::Render` for the first schema that fails to render.
pub fn generate_units(
    document: &SwaggerDocument,
    settings: &GenerateSettings,
) -> Result<Vec<GeneratedUnit>, SwaggerGenError> {
    let schemas: Vec<(&String, &Schema)> = document
        .definitions
        .iter()
        .filter(|(key, _)| !settings.is_reserved(key))
        .collect();

    if settings.parallel {
        schemas
            .par_iter()
            .map(|(key, schema)| generate_unit(key, schema, settings))
            .collect()
    } else {
        schemas
            .iter()
            .map(|(key, schema)| generate_unit(key, schema, settings))
            .collect()
    }
}

/// Write every unit into `output_dir`, creating it first if absent.
///
/// A failed write is recorded in that unit's outcome and does not stop the
/// remaining writes.
///
/// # Errors
///
/// Returns `SwaggerGenError::CreateOutputDir` if the directory cannot be
/// created; nothing is written in that case.
pub fn write_units(
    units: &[GeneratedUnit],
    output_dir: &Path,
) -> Result<Vec<UnitOutcome>, SwaggerGenError> {
    fs::create_dir_all(output_dir).map_err(|source| SwaggerGenError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let outcomes: Vec<UnitOutcome> = units
        .iter()
        .map(|unit| {
            let path: PathBuf = output_dir.join(&unit.file_name);
            let result = fs::write(&path, &unit.content).map_err(|source| {
                error!(path = %path.display(), %source, "failed to write unit");
                SwaggerGenError::OutputWrite {
                    path: path.clone(),
                    source,
                }
            });
            if result.is_ok() {
                debug!(path = %path.display(), "wrote unit");
            }
            UnitOutcome {
                schema_key: unit.schema_key.clone(),
                path,
                result,
            }
        })
        .collect();
    Ok(outcomes)
}
