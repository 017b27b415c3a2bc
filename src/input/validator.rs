//! Validation of raw sheet columns.
//!
//! Every anomaly found here is advisory: it is logged, recorded in the
//! returned [`ValidationResult`] and processing continues with a corrected
//! value.

use indexmap::IndexMap;

use super::table::ColumnTable;

/// A value whose key cell is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    /// Zero-based row index within the column.
    pub position: usize,
    pub value: String,
}

/// A key whose value cell is empty for `language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingValue {
    pub language: String,
    pub key: String,
}

/// Quote correction applied to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteIssue {
    /// An unescaped trailing `"` was removed.
    TrailingQuote,
    /// A leading `"` was removed.
    LeadingQuote,
    /// A `"` remains inside the value. Kept as is.
    StrayQuote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueWarning {
    pub key: String,
    pub issue: QuoteIssue,
}

/// Output of [`validate`] for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Cleaned key → cleaned value, in first-seen order. Duplicates overwrite.
    pub result: IndexMap<String, String>,
    pub missing_keys: Vec<MissingKey>,
    pub missing_values: Vec<MissingValue>,
    pub value_warnings: Vec<ValueWarning>,
}

impl ValidationResult {
    /// True when nothing had to be reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_keys.is_empty()
            && self.missing_values.is_empty()
            && self.value_warnings.is_empty()
    }
}

/// Validates the key column against one language column.
///
/// Both columns are walked in lockstep up to the longer of the two; a cell
/// past the end of a column counts as empty.
#[must_use]
pub fn validate(language: &str, keys: &[String], values: &[String]) -> ValidationResult {
    let mut validation = ValidationResult::default();
    let rows = keys.len().max(values.len());

    for position in 0..rows {
        let key = keys.get(position).map_or("", String::as_str);
        let value = values.get(position).map_or("", String::as_str);

        match (key.is_empty(), value.is_empty()) {
            (true, true) => {}
            (true, false) => {
                tracing::warn!("Missing key for value '{value}' at row {position}");
                validation
                    .missing_keys
                    .push(MissingKey { position, value: value.to_string() });
            }
            (false, true) => {
                tracing::warn!("Missing {language} value for key '{key}'");
                validation
                    .missing_values
                    .push(MissingValue { language: language.to_string(), key: key.to_string() });
            }
            (false, false) => {
                let key = if key.contains('-') { to_lower_camel_case(key) } else { key.to_string() };
                let (value, issue) = sanitize_value(value);
                if let Some(issue) = issue {
                    log_quote_issue(&key, value.as_str(), issue);
                    validation.value_warnings.push(ValueWarning { key: key.clone(), issue });
                }
                validation.result.insert(key, value);
            }
        }
    }

    validation
}

/// Strips trailing `\n` and `\r` from every plural table cell.
#[must_use]
pub fn validate_plurals(plurals: &ColumnTable) -> ColumnTable {
    plurals
        .iter()
        .map(|(column, cells)| {
            let cleaned =
                cells.iter().map(|cell| cell.trim_end_matches(['\n', '\r']).to_string()).collect();
            (column.clone(), cleaned)
        })
        .collect()
}

/// `legacy-key-name` → `legacyKeyName`.
fn to_lower_camel_case(key: &str) -> String {
    let mut segments = key.split('-');
    let mut joined = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            joined.extend(first.to_uppercase());
            joined.push_str(&chars.as_str().to_lowercase());
        }
    }

    let mut chars = joined.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

/// Applies the first matching quote rule: unescaped trailing `"`, else
/// leading `"`, else any `"` (flagged only).
fn sanitize_value(value: &str) -> (String, Option<QuoteIssue>) {
    if let Some(stripped) = value.strip_suffix('"')
        && !stripped.ends_with('\\')
    {
        return (stripped.to_string(), Some(QuoteIssue::TrailingQuote));
    }

    if let Some(stripped) = value.strip_prefix('"') {
        return (stripped.to_string(), Some(QuoteIssue::LeadingQuote));
    }

    let issue = value.contains('"').then_some(QuoteIssue::StrayQuote);
    (value.to_string(), issue)
}

fn log_quote_issue(key: &str, value: &str, issue: QuoteIssue) {
    match issue {
        QuoteIssue::TrailingQuote => {
            tracing::warn!("Found not-escaped trailing \" for key '{key}' - removed, now '{value}'");
        }
        QuoteIssue::LeadingQuote => {
            tracing::warn!("Found leading \" for key '{key}' - removed, now '{value}'");
        }
        QuoteIssue::StrayQuote => {
            tracing::warn!("Found \" for key '{key}' in value '{value}' - this could be a mistake");
        }
    }
}
