use chrono::{Local, NaiveDate, NaiveDateTime};

use super::error::RecordError;

/// Format of the `date_ajout` timestamp stamped on new students.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of search dates and absence dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a stored `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

/// Parses a `YYYY-MM-DD` date typed by the user.
pub fn parse_date(value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| RecordError::InvalidDateFormat(value.to_string()))
}

/// Formats a timestamp the way it is stored on a student.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Returns the current local time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn timestamp_parses() {
        let ts = parse_timestamp("2024-01-02 11:00:00").unwrap();
        assert_eq!(format_timestamp(ts), "2024-01-02 11:00:00");
    }

    #[test]
    fn timestamp_without_time_rejected() {
        assert_eq!(parse_timestamp("2024-01-02"), None);
    }

    #[test]
    fn timestamp_garbage_rejected() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn date_parses() {
        assert_eq!(
            parse_date("2023-01-01"),
            Ok(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        );
    }

    #[test]
    fn date_with_slashes_rejected() {
        assert_eq!(
            parse_date("2023/01/01"),
            Err(RecordError::InvalidDateFormat("2023/01/01".to_string()))
        );
    }

    #[test]
    fn date_with_trailing_text_rejected() {
        assert!(parse_date("2023-01-01 10:00:00").is_err());
    }

    #[test]
    fn impossible_date_rejected() {
        assert!(parse_date("2023-02-30").is_err());
    }

    #[test]
    fn empty_date_rejected() {
        assert_eq!(
            parse_date(""),
            Err(RecordError::InvalidDateFormat(String::new()))
        );
    }

    #[quickcheck]
    fn formatted_timestamps_parse_back(secs: u32) -> bool {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let ts = base + chrono::Duration::seconds(i64::from(secs));
        parse_timestamp(&format_timestamp(ts)) == Some(ts)
    }
}
