#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter, aggregate and chart-building cycle.
//!
//! [`refresh`] is re-run on every filter change. It is a pure function of
//! the prepared records and the [`FilterSelection`]: it never mutates the
//! records and holds no state between calls, so it is safe to call from
//! several request handlers at once.

pub mod comparison;
pub mod distribution;
pub mod export;
pub mod filter;
pub mod overview;
pub mod summary;
pub mod table;

use sentencing_case_models::{CaseRecord, SentenceType};
use sentencing_dashboard_models::{DashboardView, FilterSelection};

pub use comparison::comparison;
pub use distribution::distribution;
pub use export::{ExportError, write_csv};
pub use filter::filter_cases;
pub use overview::{filter_options, overview};
pub use summary::summarize;
pub use table::{project, query_table, select_rows};

/// Runs one full filter-aggregate cycle over `cases`.
#[must_use]
pub fn refresh(cases: &[CaseRecord], selection: &FilterSelection) -> DashboardView {
    let filtered = filter_cases(cases, selection);
    log::debug!(
        "refresh: judge={} charge={} sentence={} matched {} of {} cases",
        selection.judge.value(),
        selection.charge.value(),
        selection.sentence,
        filtered.len(),
        cases.len()
    );

    DashboardView {
        summary: summarize(&filtered),
        jail_distribution: distribution(&filtered, SentenceType::Jail),
        probation_distribution: distribution(&filtered, SentenceType::Probation),
        community_control_distribution: distribution(&filtered, SentenceType::CommunityControl),
        community_service_distribution: distribution(&filtered, SentenceType::CommunityService),
        comparison: comparison(&filtered, selection),
        table_rows: project(&filtered),
    }
}
