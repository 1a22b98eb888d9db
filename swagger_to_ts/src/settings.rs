//! Settings for Swagger-to-TypeScript generation.

use std::path::PathBuf;

/// Schema key skipped by default: the shared error-response model most
/// Swagger documents carry.
pub const DEFAULT_RESERVED_KEY: &str = "ApiResponse";

/// Settings that control where and how interface files are generated.
#[derive(Debug, Clone)]
pub struct GenerateSettings {
    /// Directory receiving the generated files. Created if absent.
    pub output_dir: PathBuf,

    /// Schema keys that are never generated.
    pub reserved_keys: Vec<String>,

    /// Middle component of `<stem>.<suffix>.<ext>`; also used in import paths.
    pub file_suffix: String,

    /// Output file extension, without the dot.
    pub extension: String,

    /// When true, an interface imports each referenced schema at most once.
    ///
    /// **Default: true.** Set to false to emit one import per referencing
    /// property, in property order.
    pub dedupe_imports: bool,

    /// Render units on the rayon thread pool. Output order is unaffected.
    pub parallel: bool,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("interfaces"),
            reserved_keys: vec![DEFAULT_RESERVED_KEY.to_string()],
            file_suffix: "interface".to_string(),
            extension: "ts".to_string(),
            dedupe_imports: true,
            parallel: true,
        }
    }
}

impl GenerateSettings {
    #[must_use]
    pub fn is_reserved(&self, schema_key: &str) -> bool {
        self.reserved_keys.iter().any(|k| k == schema_key)
    }

    /// `pet` -> `pet.interface.ts`
    #[must_use]
    pub fn file_name(&self, file_stem: &str) -> String {
        format!("{file_stem}.{}.{}", self.file_suffix, self.extension)
    }

    /// `pet` -> `./pet.interface`
    #[must_use]
    pub fn import_path(&self, file_stem: &str) -> String {
        format!("./{file_stem}.{}", self.file_suffix)
    }
}
