//! Row builders shared by the unit tests.
#![cfg(test)]

use std::collections::BTreeMap;

use crate::types::{
    ArgumentBinding,
    PluralCategory,
    TranslationRow,
};

/// A `TranslationRow` without arguments.
pub(crate) fn plain_row(key: &str, language: &str, translation: &str) -> TranslationRow {
    TranslationRow {
        key: key.to_string(),
        language: language.to_string(),
        translation: translation.to_string(),
        arguments: Vec::new(),
    }
}

/// A plural `ArgumentBinding`.
///
/// # Arguments
/// * `marker` - The `${name}` marker
/// * `language` - Language code, e.g. "en" or "pt"
/// * `forms` - Category and text pairs
pub(crate) fn binding(
    marker: &str,
    language: &str,
    forms: &[(PluralCategory, &str)],
) -> ArgumentBinding {
    ArgumentBinding {
        marker: marker.to_string(),
        language: language.to_string(),
        plural_forms: forms
            .iter()
            .map(|(category, text)| (*category, (*text).to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// A `TranslationRow` with plural arguments.
pub(crate) fn plural_row(
    key: &str,
    language: &str,
    translation: &str,
    arguments: Vec<ArgumentBinding>,
) -> TranslationRow {
    TranslationRow { arguments, ..plain_row(key, language, translation) }
}
