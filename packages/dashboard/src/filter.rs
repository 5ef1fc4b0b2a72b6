//! Case filtering by judge, charge and sentence presence.

use sentencing_case_models::CaseRecord;
use sentencing_dashboard_models::FilterSelection;

/// Returns the cases that pass all three selectors.
///
/// Filters apply in a fixed order (judge, charge, sentence presence), but
/// each is an independent predicate, so the result does not depend on the
/// order.
#[must_use]
pub fn filter_cases<'a>(
    cases: &'a [CaseRecord],
    selection: &FilterSelection,
) -> Vec<&'a CaseRecord> {
    cases
        .iter()
        .filter(|c| selection.judge.matches(Some(c.judge_full_name.as_str())))
        .filter(|c| selection.charge.matches(c.charge_description.as_deref()))
        .filter(|c| selection.sentence.matches(c.has_sentence))
        .collect()
}

#[cfg(test)]
mod tests {
    use sentencing_dashboard_models::{Selection, SentenceFilter};
    use sentencing_prepare::fixture::fixture_records;

    use super::*;

    fn numbers(cases: &[&CaseRecord]) -> Vec<String> {
        cases
            .iter()
            .filter_map(|c| c.case_number.clone())
            .collect()
    }

    #[test]
    fn all_selectors_keep_everything() {
        let cases = fixture_records();
        assert_eq!(filter_cases(&cases, &FilterSelection::default()).len(), cases.len());
    }

    #[test]
    fn judge_filter_is_exact() {
        let cases = fixture_records();
        let selection = FilterSelection {
            judge: Selection::from_value("John Smith"),
            ..FilterSelection::default()
        };
        assert_eq!(
            numbers(&filter_cases(&cases, &selection)),
            vec!["SAMPLE001", "SAMPLE003"]
        );

        let selection = FilterSelection {
            judge: Selection::from_value("john smith"),
            ..FilterSelection::default()
        };
        assert!(filter_cases(&cases, &selection).is_empty());
    }

    #[test]
    fn filter_order_does_not_matter() {
        let cases = fixture_records();
        let by_judge = FilterSelection {
            judge: Selection::from_value("John Smith"),
            ..FilterSelection::default()
        };
        let by_charge = FilterSelection {
            charge: Selection::from_value("DRIVING UNDER THE INFLUENCE"),
            ..FilterSelection::default()
        };
        let both = FilterSelection {
            judge: by_judge.judge.clone(),
            charge: by_charge.charge.clone(),
            sentence: SentenceFilter::All,
        };

        let judge_then_charge: Vec<CaseRecord> = filter_cases(&cases, &by_judge)
            .into_iter()
            .cloned()
            .collect();
        let judge_then_charge = numbers(&filter_cases(&judge_then_charge, &by_charge));

        let charge_then_judge: Vec<CaseRecord> = filter_cases(&cases, &by_charge)
            .into_iter()
            .cloned()
            .collect();
        let charge_then_judge = numbers(&filter_cases(&charge_then_judge, &by_judge));

        assert_eq!(judge_then_charge, charge_then_judge);
        assert_eq!(judge_then_charge, numbers(&filter_cases(&cases, &both)));
        assert_eq!(judge_then_charge, vec!["SAMPLE003"]);
    }

    #[test]
    fn sentence_filter_splits_cases() {
        let mut cases = fixture_records();
        cases.push(CaseRecord::new("Jane Doe"));
        let with = FilterSelection {
            sentence: SentenceFilter::WithSentence,
            ..FilterSelection::default()
        };
        let without = FilterSelection {
            sentence: SentenceFilter::NoSentence,
            ..FilterSelection::default()
        };
        assert_eq!(filter_cases(&cases, &with).len(), 5);
        let none = filter_cases(&cases, &without);
        assert_eq!(none.len(), 1);
        assert_eq!(none[0].judge_full_name, "Jane Doe");
    }
}
