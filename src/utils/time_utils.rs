use chrono::{Datelike, NaiveDate};

/// Calendar-day key format used everywhere a date crosses a boundary.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Card display form: "2025-01-13" -> "Jan 13, 2025".
/// Unparseable keys pass through untouched.
pub fn pretty_date(key: &str) -> String {
    match parse_date_key(key) {
        Some(date) => format!("{} {}, {}", month_abbrev(date.month()), date.day(), date.year()),
        None => key.to_string(),
    }
}

/// Axis tick form: "2025-01-13" -> "1/13".
pub fn month_day_label(key: &str) -> String {
    match parse_date_key(key) {
        Some(date) => format!("{}/{}", date.month(), date.day()),
        None => key.to_string(),
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
        assert_eq!(date_key(date), "2025-01-13");
        assert_eq!(parse_date_key("2025-01-13"), Some(date));
    }

    #[test]
    fn test_pretty_date() {
        assert_eq!(pretty_date("2025-01-13"), "Jan 13, 2025");
        assert_eq!(pretty_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_month_day_label() {
        assert_eq!(month_day_label("2025-01-13"), "1/13");
        assert_eq!(month_day_label("2026-11-03"), "11/3");
    }
}
