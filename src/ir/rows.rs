//! Joins validated translations with the plural table into [`TranslationRow`]s.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::input::ColumnTable;
use crate::types::{
    ArgumentBinding,
    PluralCategory,
    TranslationRow,
};

/// Language → key → translation, in sheet order.
pub type ValidatedTranslations = IndexMap<String, IndexMap<String, String>>;

/// Names of the structural columns of the plural table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralColumns<'a> {
    /// Column holding `${name}` markers, one binding per row.
    pub marker: &'a str,
    /// Column holding the language code of each binding.
    pub language: &'a str,
}

impl Default for PluralColumns<'static> {
    fn default() -> Self {
        Self { marker: "VARIABLE", language: "LANG" }
    }
}

/// Builds one [`ArgumentBinding`] per row of the plural table.
///
/// Returns nothing when the marker column is absent. Category columns are
/// matched case-insensitively; empty cells are left out of `plural_forms`.
#[must_use]
pub fn build_bindings(plurals: &ColumnTable, columns: PluralColumns<'_>) -> Vec<ArgumentBinding> {
    let Some(markers) = plurals.get(columns.marker) else {
        return Vec::new();
    };
    let languages = plurals.get(columns.language);

    let categories: Vec<(PluralCategory, &Vec<String>)> = plurals
        .iter()
        .filter(|(name, _)| name.as_str() != columns.marker && name.as_str() != columns.language)
        .filter_map(|(name, cells)| match name.parse::<PluralCategory>() {
            Ok(category) => Some((category, cells)),
            Err(e) => {
                tracing::debug!("Skipping plural column: {e}");
                None
            }
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(row, marker)| {
            let language =
                languages.and_then(|cells| cells.get(row)).cloned().unwrap_or_default();
            if language.is_empty() {
                tracing::warn!("Plural row {row} for '{marker}' has no language");
            }

            let plural_forms: BTreeMap<PluralCategory, String> = categories
                .iter()
                .filter_map(|(category, cells)| {
                    cells.get(row).filter(|text| !text.is_empty()).map(|text| (*category, text.clone()))
                })
                .collect();

            ArgumentBinding { marker: marker.clone(), language, plural_forms }
        })
        .collect()
}

/// Produces one row per (language, key), attaching the plural bindings whose
/// marker occurs in the translation for the same language.
///
/// Rows come out language by language, each in sheet order. A marker without
/// a binding for the row's language is left in the text untouched.
#[must_use]
pub fn parse(
    validated: &ValidatedTranslations,
    plurals: &ColumnTable,
    columns: PluralColumns<'_>,
) -> Vec<TranslationRow> {
    let bindings = build_bindings(plurals, columns);
    tracing::debug!("Built {} plural bindings", bindings.len());

    validated
        .iter()
        .flat_map(|(language, translations)| {
            let bindings = &bindings;
            translations.iter().map(move |(key, translation)| {
                let arguments = bindings
                    .iter()
                    .filter(|binding| {
                        binding.language == *language && translation.contains(&binding.marker)
                    })
                    .cloned()
                    .collect();

                TranslationRow {
                    key: key.clone(),
                    language: language.clone(),
                    translation: translation.clone(),
                    arguments,
                }
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::input::table::column_table;

    fn translations(entries: Vec<(&str, Vec<(&str, &str)>)>) -> ValidatedTranslations {
        entries
            .into_iter()
            .map(|(language, pairs)| {
                let pairs = pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
                (language.to_string(), pairs)
            })
            .collect()
    }

    #[fixture]
    fn ice_cream_plurals() -> ColumnTable {
        column_table([
            (
                "VARIABLE",
                vec!["${ice_cream_toppings}", "${ice_cream_sauces}", "${ice_cream_toppings}"],
            ),
            ("LANG", vec!["en", "en", "pt"]),
            ("ZERO", vec!["no toppings", "no sauces", "cero toppings"]),
            ("ONE", vec!["one topping", "one sauce", "un topping"]),
            ("TWO", vec!["", "", ""]),
            (
                "OTHER",
                vec![
                    "${ice_cream_toppings} toppings",
                    "${ice_cream_sauces} sauces",
                    "${ice_cream_toppings} toppings",
                ],
            ),
        ])
    }

    #[rstest]
    fn parse_single_binding() {
        let plurals = column_table([
            ("VARIABLE", vec!["${x}"]),
            ("LANG", vec!["en"]),
            ("ONE", vec!["one"]),
            ("OTHER", vec!["many"]),
        ]);
        let validated = translations(vec![("en", vec![("k.case", "I have ${x}")])]);

        let rows = parse(&validated, &plurals, PluralColumns::default());

        assert_that!(rows.len(), eq(1));
        assert_that!(rows[0].key, eq("k.case"));
        assert_that!(rows[0].language, eq("en"));
        assert_that!(rows[0].arguments.len(), eq(1));
        assert_eq!(
            rows[0].arguments[0].plural_forms,
            BTreeMap::from([
                (PluralCategory::One, "one".to_string()),
                (PluralCategory::Other, "many".to_string()),
            ])
        );
    }

    #[rstest]
    fn parse_attaches_bindings_by_marker_and_language(ice_cream_plurals: ColumnTable) {
        let validated = translations(vec![
            (
                "en",
                vec![
                    ("example.icecream.toppings.title", "You have ${ice_cream_toppings}"),
                    ("example.icecream.both.title", "${ice_cream_toppings} and ${ice_cream_sauces}"),
                    ("example.plain", "Nothing to count"),
                ],
            ),
            (
                "pt",
                vec![("example.icecream.both.title", "${ice_cream_toppings} e ${ice_cream_sauces}")],
            ),
        ]);

        let rows = parse(&validated, &ice_cream_plurals, PluralColumns::default());

        assert_that!(rows.len(), eq(4));
        let markers = |row: &TranslationRow| -> Vec<String> {
            row.arguments.iter().map(|a| format!("{}@{}", a.marker, a.language)).collect()
        };
        assert_that!(markers(&rows[0]), elements_are![eq("${ice_cream_toppings}@en")]);
        assert_that!(
            markers(&rows[1]),
            elements_are![eq("${ice_cream_toppings}@en"), eq("${ice_cream_sauces}@en")]
        );
        assert_that!(rows[2].is_plural(), eq(false));
        // no pt binding for ${ice_cream_sauces}
        assert_that!(markers(&rows[3]), elements_are![eq("${ice_cream_toppings}@pt")]);
    }

    #[rstest]
    fn build_bindings_omits_empty_categories(ice_cream_plurals: ColumnTable) {
        let bindings = build_bindings(&ice_cream_plurals, PluralColumns::default());

        assert_that!(bindings.len(), eq(3));
        let categories: Vec<PluralCategory> = bindings[0].plural_forms.keys().copied().collect();
        assert_eq!(
            categories,
            vec![PluralCategory::Zero, PluralCategory::One, PluralCategory::Other]
        );
    }

    #[rstest]
    fn build_bindings_handles_short_columns() {
        let plurals = column_table([
            ("VARIABLE", vec!["${x}", "${y}"]),
            ("LANG", vec!["en", "en"]),
            ("OTHER", vec!["others"]),
        ]);

        let bindings = build_bindings(&plurals, PluralColumns::default());

        assert_that!(bindings.len(), eq(2));
        assert_that!(bindings[1].plural_forms.len(), eq(0));
    }

    #[rstest]
    fn build_bindings_ignores_unknown_columns() {
        let plurals = column_table([
            ("VARIABLE", vec!["${x}"]),
            ("LANG", vec!["en"]),
            ("EXAMPLE", vec!["3 apples"]),
            ("OTHER", vec!["apples"]),
        ]);

        let bindings = build_bindings(&plurals, PluralColumns::default());

        assert_that!(bindings[0].plural_forms.len(), eq(1));
    }

    #[rstest]
    fn parse_without_marker_column_has_no_bindings() {
        let plurals = column_table([("LANG", vec!["en"]), ("OTHER", vec!["many"])]);
        let validated = translations(vec![("en", vec![("k.case", "I have ${x}")])]);

        let rows = parse(&validated, &plurals, PluralColumns::default());

        assert_that!(rows.len(), eq(1));
        assert_that!(rows[0].is_plural(), eq(false));
    }

    #[rstest]
    fn parse_with_custom_columns() {
        let plurals = column_table([
            ("marker", vec!["${n}"]),
            ("locale", vec!["fr"]),
            ("one", vec!["un"]),
        ]);
        let validated = translations(vec![("fr", vec![("a.b", "${n} pommes")])]);

        let rows =
            parse(&validated, &plurals, PluralColumns { marker: "marker", language: "locale" });

        assert_that!(rows[0].arguments.len(), eq(1));
    }
}
