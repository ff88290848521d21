//! Review date parsing.
//!
//! Dates in the input are day-first (`23/07/2014`). ISO dates are accepted
//! too, since they are unambiguous.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats tried, in order, when no explicit format is configured.
pub const DAY_FIRST_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

/// Parse a review date.
///
/// With `format` set only that format is tried. Otherwise the
/// [`DAY_FIRST_FORMATS`] are tried in order. A trailing time of day
/// (`2014-07-23 00:00:00`) is ignored.
#[must_use]
pub fn parse_review_date(value: &str, format: Option<&str>) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(fmt) = format {
        return NaiveDate::parse_from_str(value, fmt)
            .ok()
            .or_else(|| NaiveDateTime::parse_from_str(value, fmt).ok().map(|dt| dt.date()));
    }

    let date_part = value.split_whitespace().next().unwrap_or(value);
    DAY_FIRST_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_first() {
        assert_eq!(parse_review_date("23/07/2014", None), Some(ymd(2014, 7, 23)));
        assert_eq!(parse_review_date("05/01/2013", None), Some(ymd(2013, 1, 5)));
        assert_eq!(parse_review_date("05-01-2013", None), Some(ymd(2013, 1, 5)));
        assert_eq!(parse_review_date("05.01.2013", None), Some(ymd(2013, 1, 5)));
    }

    #[test]
    fn test_iso_and_timestamp() {
        assert_eq!(parse_review_date("2014-07-23", None), Some(ymd(2014, 7, 23)));
        assert_eq!(
            parse_review_date(" 2014-07-23 00:00:00 ", None),
            Some(ymd(2014, 7, 23))
        );
    }

    #[test]
    fn test_explicit_format() {
        assert_eq!(
            parse_review_date("07 23, 2014", Some("%m %d, %Y")),
            Some(ymd(2014, 7, 23))
        );
        assert_eq!(
            parse_review_date("2014-07-23 10:11:12", Some("%Y-%m-%d %H:%M:%S")),
            Some(ymd(2014, 7, 23))
        );
        // Explicit format disables the fallbacks
        assert_eq!(parse_review_date("23/07/2014", Some("%Y-%m-%d")), None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_review_date("", None), None);
        assert_eq!(parse_review_date("yesterday", None), None);
        assert_eq!(parse_review_date("31/02/2014", None), None);
    }
}
