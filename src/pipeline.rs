//! Validate → parse → render, for one snapshot of the sheets.

use std::collections::BTreeSet;
use std::path::PathBuf;

use indexmap::IndexMap;
use thiserror::Error;

use crate::config::{
    ColumnsConfig,
    ConfigManager,
    GeneratorSettings,
};
use crate::input::snapshot::read_source;
use crate::input::{
    ColumnTable,
    SourceData,
    SourceError,
    ValidationResult,
    validate,
    validate_plurals,
};
use crate::ir::{
    PluralColumns,
    ValidatedTranslations,
    parse,
};
use crate::output::{
    ArtifactSink,
    DirectorySink,
    RenderedFile,
    SinkError,
    Templates,
    render_enum_file,
    render_plain_strings,
    render_plural_strings,
};
use crate::types::{
    TranslationRow,
    marker_names,
};

/// Conditions that stop generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Translations sheet has no '{0}' key column")]
    MissingKeyColumn(String),

    #[error("Plurals sheet has no '{0}' marker column")]
    MissingMarkerColumn(String),
}

/// Failure of a full generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Reads the configured snapshots, runs the pipeline and writes every file
/// under the output directory. Relative paths resolve against the project root.
///
/// Returns the written paths.
///
/// # Errors
/// - A snapshot cannot be read
/// - A fatal pipeline condition
/// - A file cannot be written
pub fn generate(config: &ConfigManager, templates: Templates) -> Result<Vec<PathBuf>, GenerateError> {
    let settings = config.get_settings();
    let translations = config.resolve(&settings.source.translations_file);
    let plurals = config.resolve(&settings.source.plurals_file);
    tracing::info!("Reading {} and {}", translations.display(), plurals.display());

    let source = read_source(&translations, &plurals)?;
    let report = Pipeline::from_settings(settings, templates).run(&source)?;
    for language in report.languages_with_findings() {
        tracing::warn!("'{language}' has validation findings, see the warnings above");
    }

    let mut sink = DirectorySink::new(config.resolve(&settings.output_dir));
    report.write_to(&mut sink)?;
    Ok(sink.written().to_vec())
}

/// Everything one run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Plain strings files, then stringsdict files, then the enum file.
    pub files: Vec<RenderedFile>,
    /// Validation outcome per language, in sheet order.
    pub validations: IndexMap<String, ValidationResult>,
}

impl GenerationReport {
    /// Languages with at least one advisory finding.
    pub fn languages_with_findings(&self) -> impl Iterator<Item = &str> {
        self.validations
            .iter()
            .filter(|(_, validation)| !validation.is_clean())
            .map(|(language, _)| language.as_str())
    }

    /// Hands every file to `sink`, stopping at the first failure.
    ///
    /// # Errors
    /// The first error reported by the sink.
    pub fn write_to(&self, sink: &mut impl ArtifactSink) -> Result<(), SinkError> {
        self.files.iter().try_for_each(|file| sink.write(file))
    }
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Written into headers and the enum file name.
    project_name: String,
    /// Names of the structural columns.
    columns: ColumnsConfig,
    templates: Templates,
}

impl Pipeline {
    #[must_use]
    pub fn new(project_name: impl Into<String>, columns: ColumnsConfig, templates: Templates) -> Self {
        Self { project_name: project_name.into(), columns, templates }
    }

    /// Pipeline for validated settings. The import module comes from the settings.
    #[must_use]
    pub fn from_settings(settings: &GeneratorSettings, templates: Templates) -> Self {
        Self::new(
            settings.project_name.clone(),
            settings.columns.clone(),
            templates.with_import_module(settings.import_module.clone()),
        )
    }

    /// Runs every stage on `source`.
    ///
    /// # Errors
    /// - The translations table has no key column
    /// - The plurals table has no marker column
    pub fn run(&self, source: &SourceData) -> Result<GenerationReport, PipelineError> {
        let keys = source
            .keys
            .get(&self.columns.key)
            .ok_or_else(|| PipelineError::MissingKeyColumn(self.columns.key.clone()))?;
        if !source.plurals.contains_key(&self.columns.marker) {
            return Err(PipelineError::MissingMarkerColumn(self.columns.marker.clone()));
        }

        let validations: IndexMap<String, ValidationResult> = source
            .language_columns(&self.columns.key)
            .filter(|(language, _)| !self.is_ignored(language))
            .map(|(language, values)| {
                let validation = validate(language, keys, values);
                tracing::debug!(
                    "{language}: {} entries, {} missing keys, {} missing values, {} value warnings",
                    validation.result.len(),
                    validation.missing_keys.len(),
                    validation.missing_values.len(),
                    validation.value_warnings.len()
                );
                (language.to_string(), validation)
            })
            .collect();

        let validated: ValidatedTranslations = validations
            .iter()
            .map(|(language, validation)| (language.clone(), validation.result.clone()))
            .collect();

        let plurals: ColumnTable = validate_plurals(&source.plurals)
            .into_iter()
            .filter(|(column, _)| !self.is_ignored(column))
            .collect();

        let rows = parse(
            &validated,
            &plurals,
            PluralColumns { marker: &self.columns.marker, language: &self.columns.language },
        );
        warn_unbound_plural_markers(&rows);

        let mut files = render_plain_strings(&rows, &self.templates, &self.project_name);
        files.extend(render_plural_strings(&rows, &self.templates, &self.project_name));
        files.push(render_enum_file(&rows, &self.templates, &self.project_name));

        tracing::info!(
            "Rendered {} files from {} rows in {} languages",
            files.len(),
            rows.len(),
            validations.len()
        );

        Ok(GenerationReport { files, validations })
    }

    fn is_ignored(&self, column: &str) -> bool {
        self.columns.ignored.iter().any(|ignored| ignored == column)
    }
}

/// Warns about plural markers that have a binding in some language but not
/// in the language of the row using them. Such markers stay in the output as
/// plain placeholders.
fn warn_unbound_plural_markers(rows: &[TranslationRow]) {
    let plural_names: BTreeSet<&str> =
        rows.iter().flat_map(|row| row.arguments.iter().map(|binding| binding.name())).collect();

    for row in rows {
        for name in marker_names(&row.translation) {
            let bound = row.arguments.iter().any(|binding| binding.name() == name);
            if !bound && plural_names.contains(name) {
                tracing::warn!(
                    "Marker '{name}' in '{}' has no {} plural forms",
                    row.key,
                    row.language
                );
            }
        }
    }
}
