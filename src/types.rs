//! Core types shared by the validation, parsing and rendering stages.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{
    Captures,
    Regex,
};

/// Matches `${name}` argument markers, capturing `name`.
#[allow(clippy::expect_used)]
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(.+?)\}").expect("marker pattern is a valid regex"));

/// CLDR plural category.
///
/// Declaration order is the CLDR order, so ordered maps keyed by this type
/// iterate `zero, one, two, few, many, other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [Self; 6] =
        [Self::Zero, Self::One, Self::Two, Self::Few, Self::Many, Self::Other];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a column name is not a plural category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a CLDR plural category")]
pub struct UnknownPluralCategory(pub String);

impl FromStr for PluralCategory {
    type Err = UnknownPluralCategory;

    /// Case-insensitive, so sheet headers such as `ONE` parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| UnknownPluralCategory(s.to_string()))
    }
}

/// One plural-argument group for a single language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentBinding {
    /// Literal `${name}` token as written in translations.
    pub marker: String,
    pub language: String,
    /// Localized text per category. Categories without text are absent.
    pub plural_forms: BTreeMap<PluralCategory, String>,
}

impl ArgumentBinding {
    /// Name inside the marker braces, or the raw marker if it is not `${...}`.
    #[must_use]
    pub fn name(&self) -> &str {
        marker_name(&self.marker).unwrap_or(&self.marker)
    }
}

/// A validated translation for one key in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRow {
    /// Dotted key, e.g. `settings.logout.title`.
    pub key: String,
    pub language: String,
    pub translation: String,
    /// Plural bindings whose marker occurs in `translation`. Empty for plain rows.
    pub arguments: Vec<ArgumentBinding>,
}

impl TranslationRow {
    #[must_use]
    pub const fn is_plural(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// Returns `name` for a marker of the form `${name}`.
#[must_use]
pub fn marker_name(marker: &str) -> Option<&str> {
    marker.strip_prefix("${")?.strip_suffix('}').filter(|name| !name.is_empty())
}

/// Names of every `${name}` marker in `text`, in order of appearance.
#[must_use]
pub fn marker_names(text: &str) -> Vec<&str> {
    MARKER_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Replaces every `${name}` marker with the output of `replacement(name)`.
#[must_use]
pub fn replace_markers(text: &str, replacement: impl Fn(&str) -> String) -> String {
    MARKER_PATTERN
        .replace_all(text, |caps: &Captures<'_>| {
            caps.get(1).map_or_else(String::new, |name| replacement(name.as_str()))
        })
        .into_owned()
}

/// `__name__`, the neutral placeholder used where a marker cannot be bound.
#[must_use]
pub fn placeholder(name: &str) -> String {
    format!("__{name}__")
}
