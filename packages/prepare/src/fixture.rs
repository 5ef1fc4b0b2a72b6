//! Built-in sample dataset used when the source file cannot be loaded.

use sentencing_case_models::CaseRecord;

/// Number of records in the sample dataset.
pub const FIXTURE_LEN: usize = 5;

/// Sample rows: case number, judge, charge, statute, statute description,
/// race tier, gender, jail days, probation days, community control days,
/// community service hours, disposition.
#[allow(clippy::type_complexity)]
const SAMPLE_ROWS: [(
    &str,
    &str,
    &str,
    &str,
    &str,
    &str,
    &str,
    f64,
    f64,
    f64,
    f64,
    &str,
); FIXTURE_LEN] = [
    (
        "SAMPLE001",
        "John Smith",
        "POSSESSION OF FIREARM BY CONVICTED FELON",
        "790.23",
        "Firearm Violations",
        "B",
        "M",
        365.0,
        0.0,
        0.0,
        0.0,
        "Adjudicated Guilty",
    ),
    (
        "SAMPLE002",
        "Mary Johnson",
        "BATTERY ON LAW ENFORCEMENT OFFICER",
        "784.07",
        "Battery",
        "W",
        "F",
        0.0,
        730.0,
        0.0,
        100.0,
        "Adjudicated Guilty",
    ),
    (
        "SAMPLE003",
        "John Smith",
        "DRIVING UNDER THE INFLUENCE",
        "316.193",
        "DUI",
        "H",
        "M",
        30.0,
        365.0,
        0.0,
        50.0,
        "Adjudicated Guilty",
    ),
    (
        "SAMPLE004",
        "Robert Brown",
        "POSSESSION OF CONTROLLED SUBSTANCE",
        "893.13",
        "Drug Possession",
        "B",
        "F",
        180.0,
        365.0,
        180.0,
        40.0,
        "Adjudicated Guilty",
    ),
    (
        "SAMPLE005",
        "Mary Johnson",
        "THEFT OF MOTOR VEHICLE",
        "812.014",
        "Theft",
        "W",
        "M",
        0.0,
        1095.0,
        0.0,
        200.0,
        "Nolle Prosequi",
    ),
];

/// Returns the five sample case records.
///
/// They span three judges and five charges, and every sentence type is
/// positive in at least one record.
#[must_use]
pub fn fixture_records() -> Vec<CaseRecord> {
    SAMPLE_ROWS
        .iter()
        .map(
            |&(
                case_number,
                judge,
                charge,
                statute,
                statute_description,
                race_tier,
                gender,
                jail,
                probation,
                community_control,
                community_service,
                disposition,
            )| {
                let mut record = CaseRecord::new(judge).with_sentences(
                    jail,
                    probation,
                    community_control,
                    community_service,
                );
                record.case_number = Some(case_number.to_string());
                record.charge_description = Some(charge.to_string());
                record.statute = Some(statute.to_string());
                record.statute_description = Some(statute_description.to_string());
                record.race_tier = Some(race_tier.to_string());
                record.gender = Some(gender.to_string());
                record.disposition_description = Some(disposition.to_string());
                record
            },
        )
        .collect()
}
