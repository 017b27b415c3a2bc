use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::output::templates::DEFAULT_IMPORT_MODULE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "columns.marker")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSettings {
    /// Project name written into headers and the enum file name.
    /// Must be set; there is no sensible default.
    pub project_name: String,

    /// Root directory for the generated files.
    pub output_dir: PathBuf,

    pub source: SourceConfig,
    pub columns: ColumnsConfig,

    /// Module the generated Swift file imports.
    pub import_module: String,

    pub logging: LoggingConfig,
}

/// CSV snapshots of the two sheets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    pub translations_file: PathBuf,
    pub plurals_file: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            translations_file: PathBuf::from("translations.csv"),
            plurals_file: PathBuf::from("plurals.csv"),
        }
    }
}

/// Names of the structural columns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnsConfig {
    /// Key column of the translations sheet.
    pub key: String,
    /// Marker column of the plurals sheet.
    pub marker: String,
    /// Language column of the plurals sheet.
    pub language: String,
    /// Columns that are neither languages nor plural categories.
    pub ignored: Vec<String>,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            key: "key".to_string(),
            marker: "VARIABLE".to_string(),
            language: "LANG".to_string(),
            ignored: vec!["EXAMPLE".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives. `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Also log to this file when set.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), file: None }
    }
}

impl GeneratorSettings {
    /// # Errors
    /// - Required field is empty
    /// - Project name is not usable as a Swift identifier prefix
    /// - Plural marker and language columns coincide
    /// - A structural column is listed in `columns.ignored`
    /// - Invalid log filter
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.project_name.is_empty() {
            errors.push(ValidationError::new(
                "projectName",
                "The project name is required. Example: \"MyApp\"",
            ));
        } else if !is_identifier(&self.project_name) {
            errors.push(ValidationError::new(
                "projectName",
                format!(
                    "Invalid project name '{}': use letters, digits and '_' only, not starting with a digit",
                    self.project_name
                ),
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "outputDir",
                "The output directory cannot be empty. Example: \"output\"",
            ));
        }

        if self.source.translations_file.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "source.translationsFile",
                "The path cannot be empty. Example: \"translations.csv\"",
            ));
        }

        if self.source.plurals_file.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "source.pluralsFile",
                "The path cannot be empty. Example: \"plurals.csv\"",
            ));
        }

        for (field, value) in [
            ("columns.key", &self.columns.key),
            ("columns.marker", &self.columns.marker),
            ("columns.language", &self.columns.language),
        ] {
            if value.is_empty() {
                errors.push(ValidationError::new(field, "The column name cannot be empty"));
            }
        }

        if !self.columns.marker.is_empty() && self.columns.marker == self.columns.language {
            errors.push(ValidationError::new(
                "columns.marker/columns.language",
                "The marker and language columns must be different",
            ));
        }

        for (role, column) in [
            ("key", &self.columns.key),
            ("marker", &self.columns.marker),
            ("language", &self.columns.language),
        ] {
            if let Some(index) = self.columns.ignored.iter().position(|c| c == column) {
                errors.push(ValidationError::new(
                    format!("columns.ignored[{index}]"),
                    format!("Cannot ignore the {role} column '{column}'"),
                ));
            }
        }

        if self.import_module.is_empty() {
            errors.push(ValidationError::new(
                "importModule",
                format!("The module cannot be empty. Example: \"{DEFAULT_IMPORT_MODULE}\""),
            ));
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            errors.push(ValidationError::new(
                "logging.level",
                format!("Invalid log filter '{}': {e}", self.logging.level),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            output_dir: PathBuf::from("output"),
            source: SourceConfig::default(),
            columns: ColumnsConfig::default(),
            import_module: DEFAULT_IMPORT_MODULE.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}
