//! Flat-file export of the detail table.

use std::io::Write;

use sentencing_dashboard_models::{TableColumn, TableRow};

/// Errors that can occur while exporting table rows.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing a CSV record failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `rows` as CSV to `writer`, headed by the table's column labels.
///
/// Missing text values are written as empty cells.
///
/// # Errors
///
/// * [`ExportError::Csv`] if a record cannot be written
/// * [`ExportError::Io`] if the output cannot be flushed
pub fn write_csv<'a, W: Write>(
    rows: impl IntoIterator<Item = &'a TableRow>,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(TableColumn::all().iter().map(|c| c.label()))?;

    let mut count = 0_usize;
    for row in rows {
        csv_writer.write_record(TableColumn::all().iter().map(|c| cell(row, *c)))?;
        count += 1;
    }

    csv_writer.flush()?;
    log::debug!("Exported {count} table rows");
    Ok(())
}

fn cell(row: &TableRow, column: TableColumn) -> String {
    match column {
        TableColumn::JudgeFullName => row.judge_full_name.clone(),
        TableColumn::ChargeDescription => row.charge_description.clone().unwrap_or_default(),
        TableColumn::Statute => row.statute.clone().unwrap_or_default(),
        TableColumn::JailDays => row.jail_days.to_string(),
        TableColumn::ProbationDays => row.probation_days.to_string(),
        TableColumn::CommunityControlDays => row.community_control_days.to_string(),
        TableColumn::CommunityServiceHours => row.community_service_hours.to_string(),
        TableColumn::RaceTier => row.race_tier.clone().unwrap_or_default(),
        TableColumn::HasSentence => row.has_sentence.to_string(),
    }
}
