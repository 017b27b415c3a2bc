//! CSV snapshot of the translation and plural sheets.
//!
//! The header row names the columns; every following row contributes one
//! cell to each column. This is the format written by [`write_columns`] and
//! read back by [`read_columns`].

use std::fs::File;
use std::io::{
    Read,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use super::table::{
    ColumnTable,
    SourceData,
};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to write CSV: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{0}' has no header row")]
    MissingHeader(PathBuf),
}

/// Reads the translations and plurals snapshots into [`SourceData`].
///
/// # Errors
/// Either file cannot be opened or is not valid CSV.
pub fn read_source(translations: &Path, plurals: &Path) -> Result<SourceData, SourceError> {
    tracing::debug!(
        translations = %translations.display(),
        plurals = %plurals.display(),
        "Reading CSV source"
    );
    Ok(SourceData::new(read_columns(translations)?, read_columns(plurals)?))
}

/// Pivots a CSV file into columns.
///
/// # Errors
/// The file cannot be opened, is not valid CSV or has no header row.
pub fn read_columns(path: &Path) -> Result<ColumnTable, SourceError> {
    let file =
        File::open(path).map_err(|source| SourceError::Open { path: path.to_path_buf(), source })?;
    let columns = read_columns_from(file)?;
    if columns.is_empty() {
        return Err(SourceError::MissingHeader(path.to_path_buf()));
    }
    Ok(columns)
}

/// Pivots CSV text from any reader into columns. Short rows are padded with
/// empty cells.
///
/// # Errors
/// The input is not valid CSV.
pub fn read_columns_from(reader: impl Read) -> Result<ColumnTable, SourceError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut columns: Vec<(String, Vec<String>)> =
        csv_reader.headers()?.iter().map(|header| (header.to_string(), Vec::new())).collect();

    for record in csv_reader.records() {
        let record = record?;
        for (index, (_, cells)) in columns.iter_mut().enumerate() {
            cells.push(record.get(index).unwrap_or_default().to_string());
        }
    }

    Ok(columns.into_iter().collect())
}

/// Writes columns as CSV, header row first.
///
/// # Errors
/// The file cannot be created or written.
pub fn write_columns(path: &Path, columns: &ColumnTable) -> Result<(), SourceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_columns_to(file, columns)?;
    tracing::debug!(path = %path.display(), "Wrote CSV snapshot");
    Ok(())
}

/// Writes columns as CSV to any writer. Shorter columns are padded with empty
/// cells.
///
/// # Errors
/// The writer fails.
pub fn write_columns_to(writer: impl Write, columns: &ColumnTable) -> Result<(), SourceError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(columns.keys())?;

    let rows = columns.values().map(Vec::len).max().unwrap_or_default();
    for row in 0..rows {
        csv_writer
            .write_record(columns.values().map(|cells| cells.get(row).map_or("", String::as_str)))?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::input::table::column_table;

    #[rstest]
    fn read_columns_pivots_rows() {
        let text = "key,en,pt\nsome.key,Some,Algum\n,,\nanother.key,Another,Outro\n";

        let columns = read_columns_from(text.as_bytes()).unwrap();

        assert_eq!(
            columns,
            column_table([
                ("key", vec!["some.key", "", "another.key"]),
                ("en", vec!["Some", "", "Another"]),
                ("pt", vec!["Algum", "", "Outro"]),
            ])
        );
    }

    #[rstest]
    fn read_columns_pads_short_rows() {
        let text = "VARIABLE,LANG,ONE,OTHER\n${x},en\n";

        let columns = read_columns_from(text.as_bytes()).unwrap();

        assert_that!(columns.get("OTHER"), some(eq(&vec![String::new()])));
    }

    #[rstest]
    fn read_columns_keeps_quoted_newlines() {
        let text = "VARIABLE,LANG\n${x},\"pt\n\"\n";

        let columns = read_columns_from(text.as_bytes()).unwrap();

        assert_that!(columns.get("LANG"), some(eq(&vec!["pt\n".to_string()])));
    }

    #[rstest]
    fn write_then_read_preserves_columns() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("csv").join("plurals.csv");
        let columns = column_table([
            ("VARIABLE", vec!["${ice_cream_toppings}", "${x}"]),
            ("LANG", vec!["en", "pt"]),
            ("OTHER", vec!["${ice_cream_toppings} toppings, \"many\""]),
        ]);

        write_columns(&path, &columns).unwrap();
        let read_back = read_columns(&path).unwrap();

        assert_that!(read_back.get("VARIABLE"), some(eq(&columns["VARIABLE"])));
        assert_that!(
            read_back.get("OTHER"),
            some(eq(&vec!["${ice_cream_toppings} toppings, \"many\"".to_string(), String::new()]))
        );
    }

    #[rstest]
    fn read_columns_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = read_columns(&temp_dir.path().join("translations.csv"));

        assert!(matches!(result, Err(SourceError::Open { .. })));
    }

    #[rstest]
    fn read_columns_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("translations.csv");
        std::fs::write(&path, "").unwrap();

        let result = read_columns(&path);

        assert!(matches!(result, Err(SourceError::MissingHeader(_))));
    }
}
