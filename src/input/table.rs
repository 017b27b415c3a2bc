//! Column-oriented tabular data handed over by a source provider.

use indexmap::IndexMap;

/// Column name → cells, top to bottom. Column order is the sheet order.
pub type ColumnTable = IndexMap<String, Vec<String>>;

/// Everything the generator needs from a tabular source.
///
/// `keys` holds one column per language plus the `key` pseudo-language column.
/// `plurals` holds the marker column, the language column and one column per
/// plural category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceData {
    pub keys: ColumnTable,
    pub plurals: ColumnTable,
}

impl SourceData {
    #[must_use]
    pub const fn new(keys: ColumnTable, plurals: ColumnTable) -> Self {
        Self { keys, plurals }
    }

    /// Language columns of the keys table, i.e. every column except `key_column`.
    pub fn language_columns<'a>(
        &'a self,
        key_column: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [String])> + 'a {
        self.keys
            .iter()
            .filter(move |(name, _)| name.as_str() != key_column)
            .map(|(name, cells)| (name.as_str(), cells.as_slice()))
    }
}

/// Builds a table from `(column, cells)` pairs, keeping the given order.
#[must_use]
pub fn column_table<N, C>(columns: impl IntoIterator<Item = (N, C)>) -> ColumnTable
where
    N: Into<String>,
    C: IntoIterator,
    C::Item: Into<String>,
{
    columns
        .into_iter()
        .map(|(name, cells)| (name.into(), cells.into_iter().map(Into::into).collect()))
        .collect()
}
