#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the sentencing dashboard server.
//!
//! These types are serialized to JSON for the REST API. They wrap the
//! dashboard's own output types so the API contract can evolve without
//! touching the aggregation code.

use sentencing_dashboard_models::{
    ChartSpec, Comparison, DashboardView, FilterSelection, Overview, Selection, SentenceFilter,
    SummaryStats, TableColumn, TablePage, TableQuery,
};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Query parameters shared by the dashboard and CSV export endpoints.
///
/// Every parameter is optional; a missing selector means "all".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQueryParams {
    /// Judge display name, or `all`.
    pub judge: Option<String>,
    /// Charge description, or `all`.
    pub charge: Option<String>,
    /// Sentence-presence filter.
    pub sentence: Option<SentenceFilter>,
    /// Table column to sort by.
    pub sort_by: Option<TableColumn>,
    /// Sort descending.
    pub descending: Option<bool>,
    /// Case-insensitive table search.
    pub search: Option<String>,
    /// Maximum table rows to return.
    pub limit: Option<usize>,
    /// Table rows to skip.
    pub offset: Option<usize>,
}

impl DashboardQueryParams {
    /// The filter selectors described by these parameters.
    #[must_use]
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            judge: Selection::from_param(self.judge.as_deref()),
            charge: Selection::from_param(self.charge.as_deref()),
            sentence: self.sentence.unwrap_or_default(),
        }
    }

    /// The table query described by these parameters, using `page_size`
    /// when no limit is given.
    #[must_use]
    pub fn table_query(&self, page_size: usize) -> TableQuery {
        TableQuery {
            sort_by: self.sort_by,
            descending: self.descending.unwrap_or(false),
            search: self.search.clone(),
            limit: self.limit.unwrap_or(page_size),
            offset: self.offset.unwrap_or(0),
        }
    }
}

/// Summary statistics plus their display strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSummary {
    /// Numeric statistics.
    #[serde(flatten)]
    pub stats: SummaryStats,
    /// Display strings, with placeholders for empty views.
    pub lines: Vec<String>,
}

impl From<SummaryStats> for ApiSummary {
    fn from(stats: SummaryStats) -> Self {
        let lines = stats.display_lines();
        Self { stats, lines }
    }
}

/// The five dashboard charts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCharts {
    /// Jail days histogram.
    pub jail: ChartSpec,
    /// Probation days histogram.
    pub probation: ChartSpec,
    /// Community control days histogram.
    pub community_control: ChartSpec,
    /// Community service hours histogram.
    pub community_service: ChartSpec,
    /// Comparison chart.
    pub comparison: Comparison,
}

/// Response of the dashboard endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// The selectors the view was computed for.
    pub selection: FilterSelection,
    /// Summary statistics.
    pub summary: ApiSummary,
    /// Charts.
    pub charts: ApiCharts,
    /// One page of the detail table.
    pub table: TablePage,
}

impl DashboardResponse {
    /// Assembles a response from a computed view and its table page. The
    /// view's full table rows are dropped in favour of `table`.
    #[must_use]
    pub fn new(selection: FilterSelection, view: DashboardView, table: TablePage) -> Self {
        Self {
            selection,
            summary: view.summary.into(),
            charts: ApiCharts {
                jail: view.jail_distribution,
                probation: view.probation_distribution,
                community_control: view.community_control_distribution,
                community_service: view.community_service_distribution,
                comparison: view.comparison,
            },
            table,
        }
    }
}

/// Where the served dataset came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ApiDataSource {
    /// Loaded from a file.
    File {
        /// Source file path.
        path: String,
    },
    /// Built-in sample dataset.
    Fixture,
}

/// Response of the overview endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOverview {
    /// Headline metrics.
    #[serde(flatten)]
    pub overview: Overview,
    /// Dataset origin.
    pub source: ApiDataSource,
}

/// Error body returned by failing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Error message.
    pub error: String,
}
