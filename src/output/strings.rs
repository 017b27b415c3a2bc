//! `.strings` and `.stringsdict` rendering, one file per language.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::artifact::RenderedFile;
use super::templates::{
    PluralRecord,
    PluralVariable,
    StringEntry,
    Templates,
};
use crate::types::{
    TranslationRow,
    placeholder,
    replace_markers,
};

/// `{lang}/{lang}.localizable.strings`
#[must_use]
pub fn strings_path(language: &str) -> PathBuf {
    PathBuf::from(language).join(format!("{language}.localizable.strings"))
}

/// `{lang}/{lang}.Localizable.stringsdict`
#[must_use]
pub fn stringsdict_path(language: &str) -> PathBuf {
    PathBuf::from(language).join(format!("{language}.Localizable.stringsdict"))
}

/// Groups rows by language, languages sorted, rows kept in input order.
fn by_language<'a>(
    rows: impl Iterator<Item = &'a TranslationRow>,
) -> BTreeMap<&'a str, Vec<&'a TranslationRow>> {
    let mut grouped: BTreeMap<&str, Vec<&TranslationRow>> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.language.as_str()).or_default().push(row);
    }
    grouped
}

/// The `.strings` line for a row without plural arguments.
#[must_use]
pub fn plain_entry(row: &TranslationRow) -> StringEntry {
    StringEntry { key: row.key.clone(), value: replace_markers(&row.translation, placeholder) }
}

/// Format string of a plural row.
///
/// Bound markers become `%#@__name__@` variable references, any other marker
/// becomes `__name__`.
#[must_use]
pub fn format_string(row: &TranslationRow) -> String {
    let bound = row.arguments.iter().fold(row.translation.clone(), |text, binding| {
        text.replace(&binding.marker, &format!("%#@{}@", placeholder(binding.name())))
    });
    replace_markers(&bound, placeholder)
}

/// The stringsdict record for a row with plural arguments.
#[must_use]
pub fn plural_record(row: &TranslationRow) -> PluralRecord {
    let variables = row
        .arguments
        .iter()
        .map(|binding| PluralVariable {
            name: placeholder(binding.name()),
            forms: binding
                .plural_forms
                .iter()
                .map(|(category, text)| (*category, replace_markers(text, |_| "%d".to_string())))
                .collect(),
        })
        .collect();

    PluralRecord { key: row.key.clone(), format: format_string(row), variables }
}

/// One `.strings` file per language for rows without arguments.
///
/// A language whose rows are all plural still gets an empty file.
#[must_use]
pub fn render_plain_strings(
    rows: &[TranslationRow],
    templates: &Templates,
    project_name: &str,
) -> Vec<RenderedFile> {
    by_language(rows.iter())
        .into_iter()
        .map(|(language, rows)| {
            let path = strings_path(language);
            let entries: Vec<StringEntry> =
                rows.into_iter().filter(|row| !row.is_plural()).map(plain_entry).collect();
            tracing::debug!("{} plain entries for '{language}'", entries.len());

            let contents = templates.render_strings(&file_name(&path), project_name, &entries);
            RenderedFile::new(path, contents)
        })
        .collect()
}

/// One `.stringsdict` file per language, with the rows that have plural
/// arguments.
///
/// A language without plural rows still gets a file with an empty root dict.
#[must_use]
pub fn render_plural_strings(
    rows: &[TranslationRow],
    templates: &Templates,
    project_name: &str,
) -> Vec<RenderedFile> {
    by_language(rows.iter())
        .into_iter()
        .map(|(language, rows)| {
            let path = stringsdict_path(language);
            let records: Vec<PluralRecord> =
                rows.into_iter().filter(|row| row.is_plural()).map(plural_record).collect();
            tracing::debug!("{} plural records for '{language}'", records.len());

            let contents = templates.render_stringsdict(&file_name(&path), project_name, &records);
            RenderedFile::new(path, contents)
        })
        .collect()
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}
