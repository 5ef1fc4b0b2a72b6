//! Summary statistics over the filtered cases.

use sentencing_case_models::{CaseRecord, SentenceType};
use sentencing_dashboard_models::SummaryStats;

/// Computes the summary for the filtered cases.
///
/// The jail and probation averages only consider cases where that sentence
/// is positive, so unsentenced cases do not pull the mean towards zero.
#[must_use]
pub fn summarize(cases: &[&CaseRecord]) -> SummaryStats {
    let cases_in_view = cases.len();
    let cases_with_sentence = cases.iter().filter(|c| c.has_sentence).count();

    #[allow(clippy::cast_precision_loss)]
    let percent_with_sentence = (cases_in_view > 0)
        .then(|| cases_with_sentence as f64 / cases_in_view as f64 * 100.0);

    SummaryStats {
        cases_in_view,
        cases_with_sentence,
        percent_with_sentence,
        average_jail_days: positive_mean(cases, SentenceType::Jail),
        average_probation_days: positive_mean(cases, SentenceType::Probation),
    }
}

/// Mean of `sentence` over the cases where it is strictly positive, or
/// `None` when there are no such cases.
#[must_use]
pub fn positive_mean(cases: &[&CaseRecord], sentence: SentenceType) -> Option<f64> {
    mean(
        cases
            .iter()
            .map(|c| sentence.value(c))
            .filter(|v| *v > 0.0),
    )
}

/// Arithmetic mean, or `None` for an empty input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jail(days: &[f64]) -> Vec<CaseRecord> {
        days.iter()
            .map(|d| CaseRecord::new("Jane Doe").with_sentences(*d, 0.0, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn jail_mean_excludes_zero_rows() {
        let cases = jail(&[0.0, 0.0, 10.0]);
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        let summary = summarize(&refs);
        assert!((summary.average_jail_days.unwrap() - 10.0).abs() < f64::EPSILON);
        assert!(summary.average_probation_days.is_none());
    }

    #[test]
    fn percent_with_sentence() {
        let cases = jail(&[0.0, 5.0, 0.0, 7.0]);
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        let summary = summarize(&refs);
        assert_eq!(summary.cases_in_view, 4);
        assert_eq!(summary.cases_with_sentence, 2);
        assert!((summary.percent_with_sentence.unwrap() - 50.0).abs() < f64::EPSILON);
        assert_eq!(summary.display_lines()[2], "Average Jail Time: 6.0 days");
    }

    #[test]
    fn empty_view_has_no_statistics() {
        let summary = summarize(&[]);
        assert_eq!(summary.cases_in_view, 0);
        assert!(summary.percent_with_sentence.is_none());
        assert!(summary.average_jail_days.is_none());
        assert!(summary.average_probation_days.is_none());
        assert_eq!(summary.display_lines()[1], "No data");
    }

    #[test]
    fn mean_of_nothing_is_none() {
        assert!(mean(std::iter::empty()).is_none());
        assert!((mean([1.0, 2.0, 3.0]).unwrap() - 2.0).abs() < f64::EPSILON);
    }
}
