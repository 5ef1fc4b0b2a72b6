//! Raw CSV table reading.
//!
//! Parses the source file into a [`RawTable`]: the header row plus every
//! record as untyped text cells, aligned to the headers. No cleaning happens
//! here; that is the job of [`crate::prepare`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::PrepareError;

/// An untyped table as read from the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Rows of cells. Each row has exactly `columns.len()` cells; short
    /// records are padded with empty strings.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table from column names and rows, padding or truncating
    /// each row to the column count.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }
}

/// Reads a CSV table from `reader`.
///
/// The first record is the header row. Records may have fewer or more
/// fields than the header.
///
/// # Errors
///
/// * [`PrepareError::Csv`] if the CSV is malformed
/// * [`PrepareError::NoHeader`] if there is no header row
/// * [`PrepareError::Empty`] if there are no data rows
pub fn read_raw_table<R: Read>(reader: R) -> Result<RawTable, PrepareError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();

    if columns.iter().all(String::is_empty) {
        return Err(PrepareError::NoHeader);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    if rows.is_empty() {
        return Err(PrepareError::Empty);
    }

    Ok(RawTable::new(columns, rows))
}

/// Opens `path` and reads it with [`read_raw_table`].
///
/// # Errors
///
/// * [`PrepareError::NotFound`] if `path` does not exist
/// * [`PrepareError::Io`] if the file cannot be opened
/// * any error from [`read_raw_table`]
pub fn read_raw_table_from_path(path: &Path) -> Result<RawTable, PrepareError> {
    if !path.exists() {
        return Err(PrepareError::NotFound(path.to_path_buf()));
    }

    log::info!("Found {}, attempting to load...", path.display());
    let file = File::open(path)?;
    let table = read_raw_table(file)?;

    log::info!(
        "Loaded CSV with {} rows and {} columns",
        table.rows.len(),
        table.columns.len()
    );
    log::debug!("Columns found: {:?}", table.columns);

    Ok(table)
}
