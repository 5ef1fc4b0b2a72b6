//! Date column conversion.

use chrono::{NaiveDate, NaiveDateTime};
use sentencing_case_models::CaseDate;

/// Date-time formats tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

/// Date-only formats tried in order, read as midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%Y/%m/%d", "%d-%b-%Y"];

/// Parses a date or date-time string in any of the supported formats.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Converts one column of cells.
///
/// Blank cells become `None`. If every non-blank cell parses, the rest
/// become [`CaseDate::Parsed`]; if any fails, every non-blank cell keeps its
/// original text. Returns the converted cells and whether the conversion
/// succeeded.
#[must_use]
pub fn convert_column(cells: &[&str]) -> (Vec<Option<CaseDate>>, bool) {
    let parsed: Vec<Option<Option<NaiveDateTime>>> = cells
        .iter()
        .map(|cell| {
            let cell = cell.trim();
            if cell.is_empty() {
                None
            } else {
                Some(parse_date(cell))
            }
        })
        .collect();

    let all_parsed = parsed.iter().flatten().all(Option::is_some);

    let converted = if all_parsed {
        parsed
            .into_iter()
            .map(|cell| cell.flatten().map(CaseDate::Parsed))
            .collect()
    } else {
        cells
            .iter()
            .map(|cell| {
                let cell = cell.trim();
                (!cell.is_empty()).then(|| CaseDate::Text(cell.to_string()))
            })
            .collect()
    };

    (converted, all_parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_and_us_dates() {
        assert_eq!(
            parse_date("2023-04-05").unwrap().to_string(),
            "2023-04-05 00:00:00"
        );
        assert_eq!(
            parse_date("04/05/2023").unwrap().to_string(),
            "2023-04-05 00:00:00"
        );
        assert_eq!(
            parse_date("2023-04-05 13:45:00").unwrap().to_string(),
            "2023-04-05 13:45:00"
        );
        assert_eq!(
            parse_date("4/5/2023 1:45:00 PM").unwrap().to_string(),
            "2023-04-05 13:45:00"
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("sometime in May").is_none());
    }

    #[test]
    fn column_converts_when_all_parse() {
        let (cells, ok) = convert_column(&["2023-01-01", "", "2023-02-01"]);
        assert!(ok);
        assert!(matches!(cells[0], Some(CaseDate::Parsed(_))));
        assert!(cells[1].is_none());
        assert!(matches!(cells[2], Some(CaseDate::Parsed(_))));
    }

    #[test]
    fn one_bad_value_keeps_whole_column_textual() {
        let (cells, ok) = convert_column(&["2023-01-01", "unknown"]);
        assert!(!ok);
        assert_eq!(cells[0], Some(CaseDate::Text("2023-01-01".to_string())));
        assert_eq!(cells[1], Some(CaseDate::Text("unknown".to_string())));
    }
}
