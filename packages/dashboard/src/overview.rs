//! Whole-dataset headline metrics and dropdown options.

use std::collections::BTreeSet;

use sentencing_case_models::{CaseRecord, is_nan_like};
use sentencing_dashboard_models::{ALL, FilterOption, FilterOptions, Overview, SentenceFilter};

use crate::summary::mean;

/// Characters of a charge description shown in its dropdown label.
pub const CHARGE_LABEL_LEN: usize = 80;

/// Headline metrics over every prepared case.
///
/// Unlike the filtered summary, the averages here include zero values.
#[must_use]
pub fn overview(cases: &[CaseRecord]) -> Overview {
    Overview {
        total_cases: cases.len(),
        judge_count: cases
            .iter()
            .map(|c| c.judge_full_name.as_str())
            .collect::<BTreeSet<_>>()
            .len(),
        cases_with_sentence: cases.iter().filter(|c| c.has_sentence).count(),
        average_jail_days: mean(cases.iter().map(|c| c.jail_days)),
        average_probation_days: mean(cases.iter().map(|c| c.probation_days)),
    }
}

/// Dropdown options for the three filters.
#[must_use]
pub fn filter_options(cases: &[CaseRecord]) -> FilterOptions {
    let judges = distinct(cases.iter().map(|c| Some(c.judge_full_name.as_str())));
    let charges = distinct(cases.iter().map(|c| c.charge_description.as_deref()));

    FilterOptions {
        judges: std::iter::once(FilterOption::new("All Judges", ALL))
            .chain(judges.into_iter().map(|j| FilterOption::new(j, j)))
            .collect(),
        charges: std::iter::once(FilterOption::new("All Charges", ALL))
            .chain(
                charges
                    .into_iter()
                    .map(|c| FilterOption::new(charge_label(c), c)),
            )
            .collect(),
        sentences: SentenceFilter::all()
            .iter()
            .map(|s| FilterOption::new(s.label(), s.to_string()))
            .collect(),
    }
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> BTreeSet<&'a str> {
    values
        .flatten()
        .filter(|v| !is_nan_like(v))
        .collect()
}

fn charge_label(charge: &str) -> String {
    if charge.chars().count() > CHARGE_LABEL_LEN {
        let mut label: String = charge.chars().take(CHARGE_LABEL_LEN).collect();
        label.push_str("...");
        label
    } else {
        charge.to_string()
    }
}
