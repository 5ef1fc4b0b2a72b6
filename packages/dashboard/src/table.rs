//! Detail table projection, sorting, searching and paging.

use std::cmp::Ordering;

use sentencing_case_models::CaseRecord;
use sentencing_dashboard_models::{TableColumn, TablePage, TableQuery, TableRow};

/// Projects the filtered cases onto the detail table columns.
#[must_use]
pub fn project(cases: &[&CaseRecord]) -> Vec<TableRow> {
    cases.iter().map(|c| TableRow::from(*c)).collect()
}

/// Applies the search and sort of `query` to `rows`, without paging.
///
/// Sorting is stable, so rows comparing equal keep their dataset order.
#[must_use]
pub fn select_rows<'a>(rows: &'a [TableRow], query: &TableQuery) -> Vec<&'a TableRow> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut selected: Vec<&TableRow> = rows
        .iter()
        .filter(|row| needle.as_deref().is_none_or(|n| row_contains(row, n)))
        .collect();

    if let Some(column) = query.sort_by {
        selected.sort_by(|a, b| {
            let ordering = compare(a, b, column);
            if query.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    selected
}

/// Returns one page of `rows` after searching and sorting.
#[must_use]
pub fn query_table(rows: &[TableRow], query: &TableQuery) -> TablePage {
    let selected = select_rows(rows, query);
    let total_count = selected.len();
    let page: Vec<TableRow> = selected
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .cloned()
        .collect();
    let has_more = query.offset.saturating_add(page.len()) < total_count;

    TablePage {
        rows: page,
        total_count,
        has_more,
    }
}

fn row_contains(row: &TableRow, needle: &str) -> bool {
    [
        Some(row.judge_full_name.as_str()),
        row.charge_description.as_deref(),
        row.statute.as_deref(),
        row.race_tier.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|text| text.to_lowercase().contains(needle))
}

fn compare(a: &TableRow, b: &TableRow, column: TableColumn) -> Ordering {
    match column {
        TableColumn::JudgeFullName => a.judge_full_name.cmp(&b.judge_full_name),
        TableColumn::ChargeDescription => a.charge_description.cmp(&b.charge_description),
        TableColumn::Statute => a.statute.cmp(&b.statute),
        TableColumn::JailDays => a.jail_days.cmp(&b.jail_days),
        TableColumn::ProbationDays => a.probation_days.cmp(&b.probation_days),
        TableColumn::CommunityControlDays => {
            a.community_control_days.cmp(&b.community_control_days)
        }
        TableColumn::CommunityServiceHours => {
            a.community_service_hours.cmp(&b.community_service_hours)
        }
        TableColumn::RaceTier => a.race_tier.cmp(&b.race_tier),
        TableColumn::HasSentence => a.has_sentence.cmp(&b.has_sentence),
    }
}
