//! Comparative aggregate chart.
//!
//! Exactly one of three breakdowns is produced, chosen by precedence:
//!
//! 1. a judge is selected: per-charge means for that judge
//! 2. a charge is selected: per-judge means for that charge
//! 3. otherwise: judges ranked by case count
//!
//! An empty filtered set always falls through to the third mode, which then
//! renders a placeholder.

use std::collections::BTreeMap;

use sentencing_case_models::{CaseRecord, SentenceType};
use sentencing_dashboard_models::{
    BarSeries, ChartSpec, Comparison, ComparisonMode, FilterSelection, GroupSummary,
};

use crate::summary::mean;

/// Groups kept by the per-charge and per-judge breakdowns.
pub const TOP_GROUPS: usize = 15;

/// Judges kept by the case count ranking.
pub const TOP_JUDGES: usize = 20;

/// Characters of the selected charge shown in the per-judge chart title.
const CHARGE_TITLE_LEN: usize = 50;

const SERIES: [(SentenceType, &str, &str); 3] = [
    (SentenceType::Jail, "Jail Days", "#e74c3c"),
    (SentenceType::Probation, "Probation Days", "#3498db"),
    (SentenceType::CommunityControl, "Community Control Days", "#27ae60"),
];

/// Builds the comparison chart for the filtered `cases`.
#[must_use]
pub fn comparison(cases: &[&CaseRecord], selection: &FilterSelection) -> Comparison {
    if !cases.is_empty() {
        if let Some(judge) = selection.judge.only() {
            let groups = group_means(cases, |c| c.charge_description.as_deref());
            return Comparison {
                mode: ComparisonMode::ByCharge,
                chart: grouped_bar(
                    format!("Average Sentences by Charge for {judge}"),
                    "Charge",
                    groups,
                ),
            };
        }

        if let Some(charge) = selection.charge.only() {
            let short: String = charge.chars().take(CHARGE_TITLE_LEN).collect();
            let groups = group_means(cases, |c| Some(c.judge_full_name.as_str()));
            return Comparison {
                mode: ComparisonMode::ByJudge,
                chart: grouped_bar(
                    format!("Average Sentences by Judge for '{short}...'"),
                    "Judge",
                    groups,
                ),
            };
        }
    }

    Comparison {
        mode: ComparisonMode::TopJudges,
        chart: top_judges(cases),
    }
}

/// Groups `cases` by `key`, skipping rows without one, and returns the
/// [`TOP_GROUPS`] largest groups with their rounded means.
///
/// Groups are ordered by case count descending, then key ascending.
#[must_use]
pub fn group_means<'a>(
    cases: &[&'a CaseRecord],
    key: impl Fn(&'a CaseRecord) -> Option<&'a str>,
) -> Vec<GroupSummary> {
    let mut groups: BTreeMap<&str, Vec<&CaseRecord>> = BTreeMap::new();
    for case in cases {
        if let Some(k) = key(*case) {
            groups.entry(k).or_default().push(*case);
        }
    }

    let mut summaries: Vec<GroupSummary> = groups
        .into_iter()
        .map(|(key, members)| {
            let avg = |sentence: SentenceType| {
                one_decimal(mean(members.iter().map(|c| sentence.value(c))).unwrap_or(0.0))
            };
            GroupSummary {
                key: key.to_string(),
                count: members.len(),
                jail_days: avg(SentenceType::Jail),
                probation_days: avg(SentenceType::Probation),
                community_control_days: avg(SentenceType::CommunityControl),
                community_service_hours: avg(SentenceType::CommunityService),
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries.truncate(TOP_GROUPS);
    summaries
}

fn grouped_bar(title: String, x_axis_title: &str, groups: Vec<GroupSummary>) -> ChartSpec {
    let series = SERIES
        .iter()
        .map(|(sentence, name, color)| BarSeries {
            name: (*name).to_string(),
            color: (*color).to_string(),
            values: groups.iter().map(|g| group_value(g, *sentence)).collect(),
        })
        .collect();

    ChartSpec::GroupedBar {
        title,
        x_axis_title: x_axis_title.to_string(),
        y_axis_title: "Average Days".to_string(),
        categories: groups.iter().map(|g| g.key.clone()).collect(),
        series,
        groups,
    }
}

const fn group_value(group: &GroupSummary, sentence: SentenceType) -> f64 {
    match sentence {
        SentenceType::Jail => group.jail_days,
        SentenceType::Probation => group.probation_days,
        SentenceType::CommunityControl => group.community_control_days,
        SentenceType::CommunityService => group.community_service_hours,
    }
}

/// Ranks judges by case count, descending, with ties ordered by judge name
/// ascending, and keeps the first [`TOP_JUDGES`].
#[allow(clippy::cast_precision_loss)]
fn top_judges(cases: &[&CaseRecord]) -> ChartSpec {
    if cases.is_empty() {
        return ChartSpec::Placeholder {
            title: "Sentence Comparison".to_string(),
            message: "No data to display".to_string(),
        };
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for case in cases {
        *counts.entry(case.judge_full_name.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_JUDGES);

    ChartSpec::Bar {
        title: format!("Top {TOP_JUDGES} Judges by Case Count"),
        x_axis_title: "Judge".to_string(),
        y_axis_title: "Number of Cases".to_string(),
        categories: ranked.iter().map(|(judge, _)| (*judge).to_string()).collect(),
        values: ranked.iter().map(|(_, count)| *count as f64).collect(),
    }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use sentencing_dashboard_models::{Selection, SentenceFilter};

    use super::*;

    fn case(judge: &str, charge: &str, jail: f64) -> CaseRecord {
        let mut record = CaseRecord::new(judge).with_sentences(jail, 0.0, 0.0, 0.0);
        record.charge_description = Some(charge.to_string());
        record
    }

    fn select(judge: Option<&str>, charge: Option<&str>) -> FilterSelection {
        FilterSelection {
            judge: Selection::from_param(judge),
            charge: Selection::from_param(charge),
            sentence: SentenceFilter::All,
        }
    }

    #[test]
    fn judge_selection_breaks_down_by_charge() {
        let cases = [
            case("Jane Doe", "THEFT", 10.0),
            case("Jane Doe", "THEFT", 20.0),
            case("Jane Doe", "BATTERY", 5.0),
        ];
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        let result = comparison(&refs, &select(Some("Jane Doe"), None));
        assert_eq!(result.mode, ComparisonMode::ByCharge);
        match result.chart {
            ChartSpec::GroupedBar {
                title,
                categories,
                series,
                groups,
                ..
            } => {
                assert_eq!(title, "Average Sentences by Charge for Jane Doe");
                assert_eq!(categories, vec!["THEFT", "BATTERY"]);
                assert_eq!(series.len(), 3);
                assert_eq!(series[0].values, vec![15.0, 5.0]);
                assert_eq!(groups[0].count, 2);
            }
            other => panic!("expected grouped bar, got {other:?}"),
        }
    }

    #[test]
    fn judge_wins_over_charge() {
        let cases = [case("Jane Doe", "THEFT", 10.0)];
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        let result = comparison(&refs, &select(Some("Jane Doe"), Some("THEFT")));
        assert_eq!(result.mode, ComparisonMode::ByCharge);
    }

    #[test]
    fn charge_selection_breaks_down_by_judge() {
        let long_charge = "A".repeat(60);
        let cases = [case("Jane Doe", &long_charge, 1.0), case("John Roe", &long_charge, 2.0)];
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        let result = comparison(&refs, &select(None, Some(&long_charge)));
        assert_eq!(result.mode, ComparisonMode::ByJudge);
        assert_eq!(
            result.chart.title(),
            format!("Average Sentences by Judge for '{}...'", "A".repeat(50))
        );
    }

    #[test]
    fn no_selection_ranks_judges() {
        let cases = [
            case("John Roe", "THEFT", 0.0),
            case("Jane Doe", "THEFT", 0.0),
            case("Jane Doe", "THEFT", 0.0),
        ];
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        let result = comparison(&refs, &select(None, None));
        assert_eq!(result.mode, ComparisonMode::TopJudges);
        match result.chart {
            ChartSpec::Bar {
                title,
                categories,
                values,
                ..
            } => {
                assert_eq!(title, "Top 20 Judges by Case Count");
                assert_eq!(categories, vec!["Jane Doe", "John Roe"]);
                assert_eq!(values, vec![2.0, 1.0]);
            }
            other => panic!("expected bar, got {other:?}"),
        }
    }

    #[test]
    fn tied_judges_rank_alphabetically() {
        let cases = [
            case("Zed Young", "THEFT", 0.0),
            case("Amy Adams", "THEFT", 0.0),
            case("Max Moore", "THEFT", 0.0),
            case("Max Moore", "THEFT", 0.0),
        ];
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        match top_judges(&refs) {
            ChartSpec::Bar { categories, .. } => {
                assert_eq!(categories, vec!["Max Moore", "Amy Adams", "Zed Young"]);
            }
            other => panic!("expected bar, got {other:?}"),
        }
    }

    #[test]
    fn empty_view_shows_placeholder_even_with_judge_selected() {
        let result = comparison(&[], &select(Some("NoSuchJudge"), None));
        assert_eq!(result.mode, ComparisonMode::TopJudges);
        assert_eq!(
            result.chart,
            ChartSpec::Placeholder {
                title: "Sentence Comparison".to_string(),
                message: "No data to display".to_string(),
            }
        );
    }

    #[test]
    fn keeps_fifteen_largest_groups() {
        let cases: Vec<CaseRecord> = (0..20)
            .flat_map(|i| {
                (0..=i).map(move |_| case("Jane Doe", &format!("CHARGE {i:02}"), 1.0))
            })
            .collect();
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        let groups = group_means(&refs, |c| c.charge_description.as_deref());
        assert_eq!(groups.len(), TOP_GROUPS);
        assert_eq!(groups[0].key, "CHARGE 19");
        assert_eq!(groups[0].count, 20);
        assert_eq!(groups[14].key, "CHARGE 05");
    }

    #[test]
    fn means_round_to_one_decimal() {
        let cases = [
            case("Jane Doe", "THEFT", 1.0),
            case("Jane Doe", "THEFT", 1.0),
            case("Jane Doe", "THEFT", 2.0),
        ];
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        let groups = group_means(&refs, |c| c.charge_description.as_deref());
        assert!((groups[0].jail_days - 1.3).abs() < 1e-9);
    }
}
