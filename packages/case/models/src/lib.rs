#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Case record and sentence type definitions.
//!
//! A [`CaseRecord`] is one charge/disposition row of the court dataset after
//! preparation. Its derived sentence fields are always present, finite and
//! non-negative, and its [`CaseRecord::judge_full_name`] is never blank.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Display name used when no judge name can be derived for a record.
pub const UNKNOWN_JUDGE: &str = "Unknown";

/// The four kinds of sentence tracked per case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SentenceType {
    /// Maximum confinement, in days.
    Jail,
    /// Probation, in days.
    Probation,
    /// Community control (supervised house arrest), in days.
    CommunityControl,
    /// Community service, in hours.
    CommunityService,
}

impl SentenceType {
    /// Human-readable name, e.g. `"Community Control"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jail => "Jail",
            Self::Probation => "Probation",
            Self::CommunityControl => "Community Control",
            Self::CommunityService => "Community Service",
        }
    }

    /// Returns this sentence type's derived value for `record`.
    #[must_use]
    pub const fn value(self, record: &CaseRecord) -> f64 {
        match self {
            Self::Jail => record.jail_days,
            Self::Probation => record.probation_days,
            Self::CommunityControl => record.community_control_days,
            Self::CommunityService => record.community_service_hours,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Jail,
            Self::Probation,
            Self::CommunityControl,
            Self::CommunityService,
        ]
    }
}

/// A date column value.
///
/// Date columns are converted as a whole: if every value in the column
/// parses, each becomes [`CaseDate::Parsed`]; otherwise every value keeps
/// its original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseDate {
    /// Successfully parsed date-time.
    Parsed(NaiveDateTime),
    /// Original text from a column that could not be converted.
    Text(String),
}

/// One prepared row of the court case dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    /// Case identifier.
    pub case_number: Option<String>,
    /// Raw `Judge` column, when present.
    pub judge: Option<String>,
    /// Derived judge display name. Never blank.
    pub judge_full_name: String,
    /// Charge offense description.
    pub charge_description: Option<String>,
    /// Statute code.
    pub statute: Option<String>,
    /// Statute description.
    pub statute_description: Option<String>,
    /// Disposition description.
    pub disposition_description: Option<String>,
    /// Confinement type.
    pub confinement_type: Option<String>,
    /// Race tier.
    pub race_tier: Option<String>,
    /// Gender.
    pub gender: Option<String>,
    /// Date the case was filed.
    pub file_date: Option<CaseDate>,
    /// Date of the offense.
    pub offense_date: Option<CaseDate>,
    /// Date of the disposition.
    pub disposition_date: Option<CaseDate>,
    /// Jail days.
    pub jail_days: f64,
    /// Probation days.
    pub probation_days: f64,
    /// Community control days.
    pub community_control_days: f64,
    /// Community service hours.
    pub community_service_hours: f64,
    /// Whether any sentence field is positive.
    pub has_sentence: bool,
    /// Every other source column, keyed by its original name.
    pub extra: BTreeMap<String, String>,
}

impl CaseRecord {
    /// Creates a record with the given judge display name and every other
    /// field empty or zero.
    #[must_use]
    pub fn new(judge_full_name: impl Into<String>) -> Self {
        Self {
            case_number: None,
            judge: None,
            judge_full_name: normalize_judge_name(&judge_full_name.into()),
            charge_description: None,
            statute: None,
            statute_description: None,
            disposition_description: None,
            confinement_type: None,
            race_tier: None,
            gender: None,
            file_date: None,
            offense_date: None,
            disposition_date: None,
            jail_days: 0.0,
            probation_days: 0.0,
            community_control_days: 0.0,
            community_service_hours: 0.0,
            has_sentence: false,
            extra: BTreeMap::new(),
        }
    }

    /// Sets the four sentence fields and recomputes
    /// [`Self::has_sentence`]. Negative or non-finite inputs become `0`.
    #[must_use]
    pub fn with_sentences(
        mut self,
        jail_days: f64,
        probation_days: f64,
        community_control_days: f64,
        community_service_hours: f64,
    ) -> Self {
        self.jail_days = non_negative(jail_days);
        self.probation_days = non_negative(probation_days);
        self.community_control_days = non_negative(community_control_days);
        self.community_service_hours = non_negative(community_service_hours);
        self.has_sentence = self.any_sentence();
        self
    }

    /// Returns `true` if at least one sentence field is strictly positive.
    #[must_use]
    pub fn any_sentence(&self) -> bool {
        SentenceType::all().iter().any(|t| t.value(self) > 0.0)
    }
}

/// Clamps a coerced numeric value into the valid sentence range.
#[must_use]
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Returns `true` for blank values and the textual spellings of a missing
/// value that spreadsheet exports produce (`nan`, `NaN`).
#[must_use]
pub fn is_nan_like(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}

/// Trims a judge name and maps blank or `nan`-like names to
/// [`UNKNOWN_JUDGE`].
#[must_use]
pub fn normalize_judge_name(name: &str) -> String {
    if is_nan_like(name) {
        UNKNOWN_JUDGE.to_string()
    } else {
        name.trim().to_string()
    }
}
