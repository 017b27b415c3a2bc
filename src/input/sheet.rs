//! Spreadsheet addressing for remote tabular providers.
//!
//! A provider fetching the sheets needs to turn header rows into column
//! references and those into A1 ranges. Fetching itself lives outside this
//! crate.

use std::fmt;

use indexmap::IndexMap;

/// A row number or a column/cell label in a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SheetRef {
    /// Column letters or a cell, e.g. `A`, `AB`, `A2`.
    Label(String),
    /// One-based row number.
    Index(u32),
}

impl fmt::Display for SheetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for SheetRef {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<u32> for SheetRef {
    fn from(index: u32) -> Self {
        Self::Index(index)
    }
}

/// `'Sheet'!start:end`. The range covers a single reference when `end` is `None`.
#[must_use]
pub fn a1_range(sheet_name: &str, start: &SheetRef, end: Option<&SheetRef>) -> String {
    let end = end.unwrap_or(start);
    format!("'{sheet_name}'!{start}:{end}")
}

/// Spreadsheet column letters for a zero-based index: `0 → A`, `25 → Z`, `26 → AA`.
#[must_use]
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        let offset = u8::try_from((remaining - 1) % 26).unwrap_or_default();
        letters.push(char::from(b'A' + offset));
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Column name used for a header cell.
///
/// Language headers may carry a description (`en - English`); only the text
/// before the first `-` is kept.
#[must_use]
pub fn header_name(cell: &str) -> &str {
    cell.split_once('-').map_or(cell, |(name, _)| name).trim()
}

/// Maps every named header cell to its column.
///
/// Blank headers and headers listed in `ignored` are skipped. A repeated name
/// points at its last column.
#[must_use]
pub fn header_columns(header: &[String], ignored: &[String]) -> IndexMap<String, SheetRef> {
    header
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| {
            let name = header_name(cell);
            if name.is_empty() || ignored.iter().any(|skip| skip == name) {
                return None;
            }
            tracing::debug!("Header '{name}' at column {}", column_letter(index));
            Some((name.to_string(), SheetRef::Label(column_letter(index))))
        })
        .collect()
}
