//! Sentence length histograms.

use sentencing_case_models::{CaseRecord, SentenceType};
use sentencing_dashboard_models::{ChartSpec, HistogramBin, format_count};

/// Presentation settings for one sentence type's histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionStyle {
    /// Title without the sample size suffix.
    pub title: &'static str,
    /// X axis title.
    pub x_axis_title: &'static str,
    /// Bar colour.
    pub color: &'static str,
    /// Number of bins.
    pub bin_count: usize,
}

impl DistributionStyle {
    /// Settings for `sentence`.
    #[must_use]
    pub const fn for_sentence(sentence: SentenceType) -> Self {
        match sentence {
            SentenceType::Jail => Self {
                title: "Jail Time Distribution",
                x_axis_title: "Days in Jail",
                color: "#e74c3c",
                bin_count: 30,
            },
            SentenceType::Probation => Self {
                title: "Probation Time Distribution",
                x_axis_title: "Days on Probation",
                color: "#3498db",
                bin_count: 30,
            },
            SentenceType::CommunityControl => Self {
                title: "Community Control Distribution",
                x_axis_title: "Days on Community Control",
                color: "#27ae60",
                bin_count: 20,
            },
            SentenceType::CommunityService => Self {
                title: "Community Service Distribution",
                x_axis_title: "Community Service Hours",
                color: "#9b59b6",
                bin_count: 20,
            },
        }
    }
}

/// Builds the histogram for `sentence` over the strictly positive values
/// among `cases`, or a placeholder when there are none.
#[must_use]
pub fn distribution(cases: &[&CaseRecord], sentence: SentenceType) -> ChartSpec {
    let style = DistributionStyle::for_sentence(sentence);
    let values: Vec<f64> = cases
        .iter()
        .map(|c| sentence.value(c))
        .filter(|v| *v > 0.0)
        .collect();

    if values.is_empty() {
        return ChartSpec::Placeholder {
            title: style.title.to_string(),
            message: format!(
                "No {} sentences in filtered data",
                sentence.label().to_lowercase()
            ),
        };
    }

    ChartSpec::Histogram {
        title: format!("{} (n={})", style.title, format_count(values.len())),
        x_axis_title: style.x_axis_title.to_string(),
        y_axis_title: "Number of Cases".to_string(),
        color: style.color.to_string(),
        sample_size: values.len(),
        bins: histogram_bins(&values, style.bin_count),
    }
}

/// Splits `values` into `bin_count` equal-width bins spanning their range.
///
/// Every bin is half-open except the last, which includes the maximum.
/// When all values are equal a single bin holds them all.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn histogram_bins(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max <= min {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0_usize; bin_count];
    for v in values {
        let index = (((v - min) / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: (i as f64).mul_add(width, min),
            end: if i + 1 == bin_count {
                max
            } else {
                ((i + 1) as f64).mul_add(width, min)
            },
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_every_value() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let bins = histogram_bins(&values, 30);
        assert_eq!(bins.len(), 30);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert!((bins[0].start - 1.0).abs() < f64::EPSILON);
        assert!((bins[29].end - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let bins = histogram_bins(&[0.0, 10.0], 5);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[4].count, 1);
    }

    #[test]
    fn identical_values_share_one_bin() {
        let bins = histogram_bins(&[365.0, 365.0, 365.0], 20);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }

    #[test]
    fn distribution_ignores_zero_values() {
        let cases = [
            CaseRecord::new("A").with_sentences(0.0, 0.0, 0.0, 0.0),
            CaseRecord::new("A").with_sentences(10.0, 0.0, 0.0, 0.0),
            CaseRecord::new("A").with_sentences(20.0, 0.0, 0.0, 0.0),
        ];
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        match distribution(&refs, SentenceType::Jail) {
            ChartSpec::Histogram {
                title,
                sample_size,
                bins,
                ..
            } => {
                assert_eq!(title, "Jail Time Distribution (n=2)");
                assert_eq!(sample_size, 2);
                assert_eq!(bins.len(), 30);
            }
            other => panic!("expected histogram, got {other:?}"),
        }
    }

    #[test]
    fn no_positive_values_gives_placeholder() {
        let cases = [CaseRecord::new("A").with_sentences(10.0, 0.0, 0.0, 0.0)];
        let refs: Vec<&CaseRecord> = cases.iter().collect();
        let chart = distribution(&refs, SentenceType::CommunityControl);
        assert_eq!(
            chart,
            ChartSpec::Placeholder {
                title: "Community Control Distribution".to_string(),
                message: "No community control sentences in filtered data".to_string(),
            }
        );
    }

    #[test]
    fn bin_counts_per_sentence_type() {
        assert_eq!(DistributionStyle::for_sentence(SentenceType::Jail).bin_count, 30);
        assert_eq!(DistributionStyle::for_sentence(SentenceType::Probation).bin_count, 30);
        assert_eq!(
            DistributionStyle::for_sentence(SentenceType::CommunityControl).bin_count,
            20
        );
        assert_eq!(
            DistributionStyle::for_sentence(SentenceType::CommunityService).bin_count,
            20
        );
    }
}
