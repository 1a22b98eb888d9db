use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for Swagger-to-TypeScript generation.
#[derive(Debug, Error)]
pub enum SwaggerGenError {
    /// The input document could not be read.
    #[error("cannot read input file {}: {}", .path.display(), .source)]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid JSON or does not have the expected shape
    /// (e.g. no top-level `definitions` object).
    #[error("cannot parse input document at JSON path {path}: {source}")]
    InputParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The output directory could not be created.
    #[error("cannot create output directory {}: {}", .path.display(), .source)]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An interface could not be rendered into memory.
    #[error("cannot render interface for schema {schema_key}: {source}")]
    Render {
        schema_key: String,
        #[source]
        source: io::Error,
    },

    /// A single generated unit could not be written.
    #[error("cannot write {}: {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SwaggerGenError {
    /// True for errors that abort a run before any unit is generated.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::OutputWrite { .. })
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for SwaggerGenError {
    fn from(error: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path: String = error.path().to_string();
        Self::InputParse {
            path,
            source: error.into_inner(),
        }
    }
}
