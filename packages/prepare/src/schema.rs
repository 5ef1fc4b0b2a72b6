//! Source column schema.
//!
//! The source file's column set varies between exports. [`ColumnSchema`]
//! resolves, once per table, which raw column feeds each derived field.
//! Every rule is a pure function of the column names that exist; the
//! values in those columns are never consulted.

use std::collections::BTreeMap;

/// Case identifier column.
pub const CASE_NUMBER: &str = "CaseNumber";
/// Combined judge name column.
pub const JUDGE: &str = "Judge";
/// Judge first name column.
pub const JUDGE_FIRST_NAME: &str = "Judge_First_Name";
/// Judge middle initial column, as spelled in the county export.
pub const JUDGE_MIDDLE_INITIAL: &str = "Judge_Middle_Intial";
/// Correctly spelled judge middle initial column.
pub const JUDGE_MIDDLE_INITIAL_ALT: &str = "Judge_Middle_Initial";
/// Judge last name column.
pub const JUDGE_LAST_NAME: &str = "Judge_Last_Name";
/// Charge description column.
pub const CHARGE_DESCRIPTION: &str = "ChargeOffenseDescription";
/// Statute code column.
pub const STATUTE: &str = "Statute";
/// Statute description column.
pub const STATUTE_DESCRIPTION: &str = "Statute_Description";
/// Disposition description column.
pub const DISPOSITION_DESCRIPTION: &str = "DispositionDescription";
/// Race tier column.
pub const RACE_TIER: &str = "Race_Tier_1";
/// Gender column.
pub const GENDER: &str = "Gender";
/// Confinement type column.
pub const CONFINEMENT_TYPE: &str = "ConfinementType";
/// Filing date column.
pub const FILE_DATE: &str = "FileDate";
/// Offense date column.
pub const OFFENSE_DATE: &str = "OffenseDate";
/// Disposition date column.
pub const DISPOSITION_DATE: &str = "DispositionDate";
/// Maximum confinement column.
pub const MAX_CONFINEMENT_DAYS: &str = "MaxCnfmnt_Days";
/// Community service hours column.
pub const COMMUNITY_SERVICE: &str = "CommunityService";

/// Columns whose values are trimmed of surrounding whitespace.
pub const TEXT_COLUMNS: &[&str] = &[
    JUDGE,
    JUDGE_FIRST_NAME,
    JUDGE_LAST_NAME,
    CHARGE_DESCRIPTION,
    STATUTE,
    STATUTE_DESCRIPTION,
    DISPOSITION_DESCRIPTION,
    RACE_TIER,
    GENDER,
    CONFINEMENT_TYPE,
];

/// Probation columns in priority order with their day multipliers.
pub const PROBATION_UNITS: &[(&str, f64)] = &[
    ("Probation_Days", 1.0),
    ("Probation_Mths", 30.0),
    ("Probation_Yrs", 365.0),
];

/// Community control columns in priority order with their day multipliers.
pub const COMMUNITY_CONTROL_UNITS: &[(&str, f64)] = &[
    ("ComCntrl_Days", 1.0),
    ("ComCntrl_Mths", 30.0),
    ("ComCntrl_Yrs", 365.0),
];

/// A numeric source column and the factor that converts it to the derived
/// unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitColumn {
    /// Position of the column in the raw table.
    pub index: usize,
    /// Multiplier applied to the raw value (e.g. `30.0` for months).
    pub days_per_unit: f64,
}

/// Where the judge display name comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeNameSource {
    /// First, middle initial and last name columns all exist.
    Parts {
        /// First name column position.
        first: usize,
        /// Middle initial column position.
        middle: usize,
        /// Last name column position.
        last: usize,
    },
    /// Only the combined `Judge` column exists.
    Combined(usize),
    /// No judge columns exist.
    Missing,
}

/// Resolved mapping from derived fields to raw column positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    /// Case identifier.
    pub case_number: Option<usize>,
    /// Combined judge column.
    pub judge: Option<usize>,
    /// Judge display name source.
    pub judge_name: JudgeNameSource,
    /// Charge description.
    pub charge_description: Option<usize>,
    /// Statute code.
    pub statute: Option<usize>,
    /// Statute description.
    pub statute_description: Option<usize>,
    /// Disposition description.
    pub disposition_description: Option<usize>,
    /// Confinement type.
    pub confinement_type: Option<usize>,
    /// Race tier.
    pub race_tier: Option<usize>,
    /// Gender.
    pub gender: Option<usize>,
    /// Filing date.
    pub file_date: Option<usize>,
    /// Offense date.
    pub offense_date: Option<usize>,
    /// Disposition date.
    pub disposition_date: Option<usize>,
    /// Jail days source.
    pub jail: Option<UnitColumn>,
    /// Probation source (first present unit wins).
    pub probation: Option<UnitColumn>,
    /// Community control source (first present unit wins).
    pub community_control: Option<UnitColumn>,
    /// Community service hours source.
    pub community_service: Option<UnitColumn>,
    /// Every column not mapped to a named field above.
    pub extra: Vec<(String, usize)>,
}

impl ColumnSchema {
    /// Resolves the schema for the given column names.
    #[must_use]
    pub fn from_columns(columns: &[String]) -> Self {
        let lookup: BTreeMap<&str, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();
        let find = |name: &str| lookup.get(name).copied();

        let judge = find(JUDGE);
        let middle = find(JUDGE_MIDDLE_INITIAL).or_else(|| find(JUDGE_MIDDLE_INITIAL_ALT));
        let judge_name = match (find(JUDGE_FIRST_NAME), middle, find(JUDGE_LAST_NAME)) {
            (Some(first), Some(middle), Some(last)) => JudgeNameSource::Parts {
                first,
                middle,
                last,
            },
            _ => judge.map_or(JudgeNameSource::Missing, JudgeNameSource::Combined),
        };

        let single = |name: &str| {
            find(name).map(|index| UnitColumn {
                index,
                days_per_unit: 1.0,
            })
        };

        let mapped = [
            CASE_NUMBER,
            JUDGE,
            CHARGE_DESCRIPTION,
            STATUTE,
            STATUTE_DESCRIPTION,
            DISPOSITION_DESCRIPTION,
            CONFINEMENT_TYPE,
            RACE_TIER,
            GENDER,
            FILE_DATE,
            OFFENSE_DATE,
            DISPOSITION_DATE,
        ];
        let extra = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !mapped.contains(&c.as_str()))
            .map(|(i, c)| (c.clone(), i))
            .collect();

        Self {
            case_number: find(CASE_NUMBER),
            judge,
            judge_name,
            charge_description: find(CHARGE_DESCRIPTION),
            statute: find(STATUTE),
            statute_description: find(STATUTE_DESCRIPTION),
            disposition_description: find(DISPOSITION_DESCRIPTION),
            confinement_type: find(CONFINEMENT_TYPE),
            race_tier: find(RACE_TIER),
            gender: find(GENDER),
            file_date: find(FILE_DATE),
            offense_date: find(OFFENSE_DATE),
            disposition_date: find(DISPOSITION_DATE),
            jail: single(MAX_CONFINEMENT_DAYS),
            probation: first_present(&lookup, PROBATION_UNITS),
            community_control: first_present(&lookup, COMMUNITY_CONTROL_UNITS),
            community_service: single(COMMUNITY_SERVICE),
            extra,
        }
    }
}

/// Returns the first column in `units` that exists, regardless of whether
/// its values are blank.
fn first_present(lookup: &BTreeMap<&str, usize>, units: &[(&str, f64)]) -> Option<UnitColumn> {
    units.iter().find_map(|(name, days_per_unit)| {
        lookup.get(name).map(|&index| UnitColumn {
            index,
            days_per_unit: *days_per_unit,
        })
    })
}
