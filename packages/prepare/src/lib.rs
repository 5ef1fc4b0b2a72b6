#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Court case dataset loading and cleaning.
//!
//! [`load_cases`] reads the source CSV once at startup and turns it into an
//! immutable [`PreparedCases`] set. Every per-cell problem (unparsable
//! dates, non-numeric durations) degrades to a default, and any problem with
//! the file as a whole degrades to the built-in sample dataset, so callers
//! always receive a non-empty set of valid records.

pub mod dates;
pub mod fixture;
pub mod raw;
pub mod schema;

use std::path::{Path, PathBuf};

use sentencing_case_models::{CaseDate, CaseRecord, normalize_judge_name};

use crate::raw::{RawTable, read_raw_table_from_path};
use crate::schema::{ColumnSchema, JudgeNameSource, TEXT_COLUMNS, UnitColumn};

/// Errors that can occur while reading the source dataset.
#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    /// The source file does not exist.
    #[error("Source file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error while opening or reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file has no header row.
    #[error("Source file has no header row")]
    NoHeader,

    /// The file has a header row but no data rows.
    #[error("Source file contains no rows")]
    Empty,
}

/// Where a [`PreparedCases`] set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Loaded from the file at `path`.
    File {
        /// Source file path.
        path: PathBuf,
    },
    /// The built-in sample dataset.
    Fixture,
}

/// The prepared, read-only case record set.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedCases {
    cases: Vec<CaseRecord>,
    source: DataSource,
}

impl PreparedCases {
    /// Wraps already-prepared records.
    #[must_use]
    pub const fn new(cases: Vec<CaseRecord>, source: DataSource) -> Self {
        Self { cases, source }
    }

    /// The built-in sample dataset.
    #[must_use]
    pub fn fixture() -> Self {
        Self::new(fixture::fixture_records(), DataSource::Fixture)
    }

    /// The prepared records.
    #[must_use]
    pub fn cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// Where the records came from.
    #[must_use]
    pub const fn source(&self) -> &DataSource {
        &self.source
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Loads and prepares the dataset at `path`.
///
/// Never fails: if the file is missing, unreadable, malformed or empty, the
/// error is logged and the built-in sample dataset is returned instead.
#[must_use]
pub fn load_cases(path: &Path) -> PreparedCases {
    match read_raw_table_from_path(path) {
        Ok(raw) => {
            let cases = prepare(raw);
            log::info!("Prepared {} case records", cases.len());
            PreparedCases::new(
                cases,
                DataSource::File {
                    path: path.to_path_buf(),
                },
            )
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", path.display());
            log::warn!("Using built-in sample dataset");
            PreparedCases::fixture()
        }
    }
}

/// Cleans a raw table into case records.
///
/// Strips a byte-order mark from column names, converts date columns,
/// trims text columns, derives the four sentence fields with their unit
/// priority rules, and derives `has_sentence` and `judge_full_name`.
#[must_use]
pub fn prepare(raw: RawTable) -> Vec<CaseRecord> {
    let RawTable { columns, rows } = raw;
    let columns: Vec<String> = columns.iter().map(|c| strip_bom(c).to_string()).collect();
    let schema = ColumnSchema::from_columns(&columns);

    let file_dates = convert_dates(&rows, &columns, schema.file_date);
    let offense_dates = convert_dates(&rows, &columns, schema.offense_date);
    let disposition_dates = convert_dates(&rows, &columns, schema.disposition_date);

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let text = |index: Option<usize>| index.and_then(|idx| clean_text(&row[idx]));
            let number = |unit: Option<UnitColumn>| {
                unit.map_or(0.0, |u| coerce_number(&row[u.index]) * u.days_per_unit)
            };

            let mut record = CaseRecord::new(judge_full_name(row, schema.judge_name))
                .with_sentences(
                    number(schema.jail),
                    number(schema.probation),
                    number(schema.community_control),
                    number(schema.community_service),
                );

            record.case_number = text(schema.case_number);
            record.judge = text(schema.judge);
            record.charge_description = text(schema.charge_description);
            record.statute = text(schema.statute);
            record.statute_description = text(schema.statute_description);
            record.disposition_description = text(schema.disposition_description);
            record.confinement_type = text(schema.confinement_type);
            record.race_tier = text(schema.race_tier);
            record.gender = text(schema.gender);
            record.file_date = file_dates.get(i).cloned().flatten();
            record.offense_date = offense_dates.get(i).cloned().flatten();
            record.disposition_date = disposition_dates.get(i).cloned().flatten();
            record.extra = schema
                .extra
                .iter()
                .map(|(name, index)| {
                    let cell = &row[*index];
                    let value = if TEXT_COLUMNS.contains(&name.as_str()) {
                        cell.trim().to_string()
                    } else {
                        cell.clone()
                    };
                    (name.clone(), value)
                })
                .collect();

            record
        })
        .collect()
}

/// Coerces a cell to a number. Blank, unparsable or non-finite values
/// become `0`.
#[must_use]
pub fn coerce_number(cell: &str) -> f64 {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn strip_bom(name: &str) -> &str {
    name.trim_start_matches('\u{feff}')
}

/// Trims a text cell, mapping blank cells to `None`.
fn clean_text(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn judge_full_name(row: &[String], source: JudgeNameSource) -> String {
    let name = match source {
        JudgeNameSource::Parts {
            first,
            middle,
            last,
        } => [first, middle, last]
            .iter()
            .map(|&i| row[i].trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        JudgeNameSource::Combined(i) => row[i].clone(),
        JudgeNameSource::Missing => String::new(),
    };
    normalize_judge_name(&name)
}

fn convert_dates(
    rows: &[Vec<String>],
    columns: &[String],
    index: Option<usize>,
) -> Vec<Option<CaseDate>> {
    let Some(index) = index else {
        return Vec::new();
    };
    let cells: Vec<&str> = rows.iter().map(|row| row[index].as_str()).collect();
    let (converted, ok) = dates::convert_column(&cells);
    if ok {
        log::debug!("Converted {} to dates", columns[index]);
    } else {
        log::warn!("Could not convert {} to dates; keeping text", columns[index]);
    }
    converted
}
