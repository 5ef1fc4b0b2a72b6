#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard input and output types.
//!
//! Inputs are the three filter selectors ([`FilterSelection`]). Outputs are
//! what the rendering layer consumes: summary statistics, chart
//! specifications ([`ChartSpec`]) and detail table rows ([`TableRow`]). Chart
//! specifications describe *what* to draw; drawing is left to the client.

use sentencing_case_models::CaseRecord;
use serde::{Deserialize, Serialize, Serializer};
use strum_macros::{AsRefStr, Display, EnumString};

/// Sentinel filter value meaning "no filter".
pub const ALL: &str = "all";

/// Default number of table rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// A judge or charge selector value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// No filter.
    #[default]
    All,
    /// Exact-match filter on this value.
    Only(String),
}

impl Selection {
    /// Parses a selector value, treating [`ALL`] as [`Selection::All`].
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Parses an optional selector value; `None` means [`Selection::All`].
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        value.map_or(Self::All, Self::from_value)
    }

    /// The selector value as sent by the client.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(v) => v,
        }
    }

    /// The selected value, or `None` for [`Selection::All`].
    #[must_use]
    pub fn only(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }

    /// Whether `candidate` passes this filter.
    #[must_use]
    pub fn matches(&self, candidate: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(v) => candidate == Some(v.as_str()),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

/// Sentence-presence selector.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SentenceFilter {
    /// Every case.
    #[default]
    All,
    /// Only cases with at least one positive sentence field.
    WithSentence,
    /// Only cases with no sentence.
    NoSentence,
}

impl SentenceFilter {
    /// Dropdown label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Cases",
            Self::WithSentence => "With Sentence Only",
            Self::NoSentence => "No Sentence Only",
        }
    }

    /// Whether a case with the given `has_sentence` flag passes this filter.
    #[must_use]
    pub const fn matches(self, has_sentence: bool) -> bool {
        match self {
            Self::All => true,
            Self::WithSentence => has_sentence,
            Self::NoSentence => !has_sentence,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::All, Self::WithSentence, Self::NoSentence]
    }
}

/// The three filter selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    /// Judge display name filter.
    pub judge: Selection,
    /// Charge description filter.
    pub charge: Selection,
    /// Sentence-presence filter.
    pub sentence: SentenceFilter,
}

/// Summary statistics for the filtered cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Number of cases in view.
    pub cases_in_view: usize,
    /// Number of cases in view with a sentence.
    pub cases_with_sentence: usize,
    /// Percentage of cases in view with a sentence; `None` when the view is
    /// empty.
    pub percent_with_sentence: Option<f64>,
    /// Mean jail days over cases with positive jail days.
    pub average_jail_days: Option<f64>,
    /// Mean probation days over cases with positive probation days.
    pub average_probation_days: Option<f64>,
}

impl SummaryStats {
    /// The summary as display strings, with placeholders for statistics that
    /// cannot be computed on the current view.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        vec![
            format!("Cases in View: {}", format_count(self.cases_in_view)),
            self.percent_with_sentence.map_or_else(
                || "No data".to_string(),
                |pct| {
                    format!(
                        "Cases with Sentences: {} ({pct:.1}%)",
                        format_count(self.cases_with_sentence)
                    )
                },
            ),
            self.average_jail_days.map_or_else(
                || "No jail sentences".to_string(),
                |avg| format!("Average Jail Time: {avg:.1} days"),
            ),
            self.average_probation_days.map_or_else(
                || "No probation sentences".to_string(),
                |avg| format!("Average Probation: {avg:.1} days"),
            ),
        ]
    }
}

/// Formats a count with thousands separators, e.g. `12,345`.
#[must_use]
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One histogram bin covering `[start, end)` (the last bin is closed).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    /// Lower edge.
    pub start: f64,
    /// Upper edge.
    pub end: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// One series of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    /// Legend name.
    pub name: String,
    /// Bar colour (CSS hex).
    pub color: String,
    /// One value per category.
    pub values: Vec<f64>,
}

/// Per-group means used by the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    /// Group key (charge description or judge name).
    pub key: String,
    /// Number of cases in the group.
    pub count: usize,
    /// Mean jail days, rounded to one decimal.
    pub jail_days: f64,
    /// Mean probation days, rounded to one decimal.
    pub probation_days: f64,
    /// Mean community control days, rounded to one decimal.
    pub community_control_days: f64,
    /// Mean community service hours, rounded to one decimal.
    pub community_service_hours: f64,
}

/// A chart specification for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ChartSpec {
    /// Frequency histogram.
    Histogram {
        /// Chart title.
        title: String,
        /// X axis title.
        x_axis_title: String,
        /// Y axis title.
        y_axis_title: String,
        /// Bar colour (CSS hex).
        color: String,
        /// Number of values binned.
        sample_size: usize,
        /// Bins in ascending order.
        bins: Vec<HistogramBin>,
    },
    /// Bar chart with several series per category.
    GroupedBar {
        /// Chart title.
        title: String,
        /// X axis title.
        x_axis_title: String,
        /// Y axis title.
        y_axis_title: String,
        /// Category labels along the X axis.
        categories: Vec<String>,
        /// One series per plotted measure.
        series: Vec<BarSeries>,
        /// Full per-group aggregates behind the bars.
        groups: Vec<GroupSummary>,
    },
    /// Single-series bar chart.
    Bar {
        /// Chart title.
        title: String,
        /// X axis title.
        x_axis_title: String,
        /// Y axis title.
        y_axis_title: String,
        /// Category labels along the X axis.
        categories: Vec<String>,
        /// One value per category.
        values: Vec<f64>,
    },
    /// Message shown instead of an empty chart.
    Placeholder {
        /// Chart title.
        title: String,
        /// Message text.
        message: String,
    },
}

impl ChartSpec {
    /// The chart's title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Histogram { title, .. }
            | Self::GroupedBar { title, .. }
            | Self::Bar { title, .. }
            | Self::Placeholder { title, .. } => title,
        }
    }

    /// Whether this is a [`ChartSpec::Placeholder`].
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }
}

/// Which breakdown the comparison chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ComparisonMode {
    /// Per-charge means for the selected judge.
    ByCharge,
    /// Per-judge means for the selected charge.
    ByJudge,
    /// Judges ranked by case count.
    TopJudges,
}

/// The comparison chart and the mode that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Breakdown mode.
    pub mode: ComparisonMode,
    /// Chart specification.
    pub chart: ChartSpec,
}

/// A detail table column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TableColumn {
    /// Judge display name.
    JudgeFullName,
    /// Charge description.
    ChargeDescription,
    /// Statute code.
    Statute,
    /// Jail days.
    JailDays,
    /// Probation days.
    ProbationDays,
    /// Community control days.
    CommunityControlDays,
    /// Community service hours.
    CommunityServiceHours,
    /// Race tier.
    RaceTier,
    /// Has-sentence flag.
    HasSentence,
}

impl TableColumn {
    /// Column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::JudgeFullName => "Judge",
            Self::ChargeDescription => "Charge",
            Self::Statute => "Statute",
            Self::JailDays => "Jail Days",
            Self::ProbationDays => "Probation Days",
            Self::CommunityControlDays => "Comm. Control Days",
            Self::CommunityServiceHours => "Comm. Service Hours",
            Self::RaceTier => "Race",
            Self::HasSentence => "Has Sentence",
        }
    }

    /// Returns all variants of this enum, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::JudgeFullName,
            Self::ChargeDescription,
            Self::Statute,
            Self::JailDays,
            Self::ProbationDays,
            Self::CommunityControlDays,
            Self::CommunityServiceHours,
            Self::RaceTier,
            Self::HasSentence,
        ]
    }
}

/// One row of the detail table. Sentence fields are rounded to whole units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Judge display name.
    pub judge_full_name: String,
    /// Charge description.
    pub charge_description: Option<String>,
    /// Statute code.
    pub statute: Option<String>,
    /// Jail days.
    pub jail_days: i64,
    /// Probation days.
    pub probation_days: i64,
    /// Community control days.
    pub community_control_days: i64,
    /// Community service hours.
    pub community_service_hours: i64,
    /// Race tier.
    pub race_tier: Option<String>,
    /// Has-sentence flag.
    pub has_sentence: bool,
}

impl From<&CaseRecord> for TableRow {
    fn from(record: &CaseRecord) -> Self {
        Self {
            judge_full_name: record.judge_full_name.clone(),
            charge_description: record.charge_description.clone(),
            statute: record.statute.clone(),
            jail_days: whole_units(record.jail_days),
            probation_days: whole_units(record.probation_days),
            community_control_days: whole_units(record.community_control_days),
            community_service_hours: whole_units(record.community_service_hours),
            race_tier: record.race_tier.clone(),
            has_sentence: record.has_sentence,
        }
    }
}

/// Rounds a sentence value to the nearest whole unit, ties to even.
#[allow(clippy::cast_possible_truncation)]
fn whole_units(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Sorting, searching and paging options for the detail table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    /// Column to sort by; `None` keeps dataset order.
    pub sort_by: Option<TableColumn>,
    /// Sort descending instead of ascending.
    pub descending: bool,
    /// Case-insensitive substring matched against the text columns.
    pub search: Option<String>,
    /// Maximum rows per page.
    pub limit: usize,
    /// Rows to skip.
    pub offset: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            sort_by: None,
            descending: false,
            search: None,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// One page of the detail table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage {
    /// Rows on this page.
    pub rows: Vec<TableRow>,
    /// Rows matching the filters and search, across all pages.
    pub total_count: usize,
    /// Whether more rows follow this page.
    pub has_more: bool,
}

/// Everything the dashboard renders for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Summary statistics.
    pub summary: SummaryStats,
    /// Jail days histogram.
    pub jail_distribution: ChartSpec,
    /// Probation days histogram.
    pub probation_distribution: ChartSpec,
    /// Community control days histogram.
    pub community_control_distribution: ChartSpec,
    /// Community service hours histogram.
    pub community_service_distribution: ChartSpec,
    /// Comparison chart.
    pub comparison: Comparison,
    /// Detail table rows for the whole filtered set.
    pub table_rows: Vec<TableRow>,
}

/// Headline metrics over the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    /// Total cases.
    pub total_cases: usize,
    /// Distinct judge display names.
    pub judge_count: usize,
    /// Cases with a sentence.
    pub cases_with_sentence: usize,
    /// Mean jail days over every case, zeros included.
    pub average_jail_days: Option<f64>,
    /// Mean probation days over every case, zeros included.
    pub average_probation_days: Option<f64>,
}

/// A dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    /// Display label.
    pub label: String,
    /// Value sent back as the selector.
    pub value: String,
}

impl FilterOption {
    /// Creates an option.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Options for the three filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Judge options, "All Judges" first.
    pub judges: Vec<FilterOption>,
    /// Charge options, "All Charges" first.
    pub charges: Vec<FilterOption>,
    /// Sentence-presence options.
    pub sentences: Vec<FilterOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_parses_to_all() {
        assert_eq!(Selection::from_value("all"), Selection::All);
        assert_eq!(Selection::from_param(None), Selection::All);
        assert_eq!(
            Selection::from_value("Jane Doe"),
            Selection::Only("Jane Doe".to_string())
        );
    }

    #[test]
    fn selection_matches_exactly() {
        let sel = Selection::from_value("THEFT");
        assert!(sel.matches(Some("THEFT")));
        assert!(!sel.matches(Some("theft")));
        assert!(!sel.matches(None));
        assert!(Selection::All.matches(None));
    }

    #[test]
    fn sentence_filter_parses() {
        let filter: SentenceFilter = "with_sentence".parse().unwrap();
        assert_eq!(filter, SentenceFilter::WithSentence);
        assert!("sometimes".parse::<SentenceFilter>().is_err());
        assert!(filter.matches(true));
        assert!(!SentenceFilter::NoSentence.matches(true));
    }

    #[test]
    fn formats_counts_with_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn empty_summary_uses_placeholders() {
        let summary = SummaryStats {
            cases_in_view: 0,
            cases_with_sentence: 0,
            percent_with_sentence: None,
            average_jail_days: None,
            average_probation_days: None,
        };
        assert_eq!(
            summary.display_lines(),
            vec![
                "Cases in View: 0",
                "No data",
                "No jail sentences",
                "No probation sentences"
            ]
        );
    }

    #[test]
    fn summary_lines_format_values() {
        let summary = SummaryStats {
            cases_in_view: 1200,
            cases_with_sentence: 300,
            percent_with_sentence: Some(25.0),
            average_jail_days: Some(10.0),
            average_probation_days: Some(365.26),
        };
        let lines = summary.display_lines();
        assert_eq!(lines[0], "Cases in View: 1,200");
        assert_eq!(lines[1], "Cases with Sentences: 300 (25.0%)");
        assert_eq!(lines[2], "Average Jail Time: 10.0 days");
        assert_eq!(lines[3], "Average Probation: 365.3 days");
    }

    #[test]
    fn chart_spec_serializes_with_type_tag() {
        let chart = ChartSpec::Placeholder {
            title: "Jail Time Distribution".to_string(),
            message: "No jail sentences in filtered data".to_string(),
        };
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["type"], "placeholder");
        assert_eq!(json["message"], "No jail sentences in filtered data");
    }

    #[test]
    fn histogram_fields_are_camel_case() {
        let chart = ChartSpec::Histogram {
            title: "t".to_string(),
            x_axis_title: "x".to_string(),
            y_axis_title: "y".to_string(),
            color: "#000000".to_string(),
            sample_size: 0,
            bins: Vec::new(),
        };
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["type"], "histogram");
        assert_eq!(json["xAxisTitle"], "x");
        assert_eq!(json["sampleSize"], 0);
    }

    #[test]
    fn table_row_rounds_half_to_even() {
        let record = CaseRecord::new("Jane Doe").with_sentences(2.5, 3.5, 0.4, 10.6);
        let row = TableRow::from(&record);
        assert_eq!(row.jail_days, 2);
        assert_eq!(row.probation_days, 4);
        assert_eq!(row.community_control_days, 0);
        assert_eq!(row.community_service_hours, 11);
        assert!(row.has_sentence);
    }

    #[test]
    fn selection_serializes_as_value() {
        let json = serde_json::to_value(FilterSelection::default()).unwrap();
        assert_eq!(json["judge"], "all");
        assert_eq!(json["sentence"], "all");
    }
}
