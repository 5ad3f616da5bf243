//! Carrier date and time wire formats.
//!
//! Outbound values always use the carrier's day-first layout
//! (`31-01-2025`, `31-01-2025 14:05:00`, `14:05:00`). Inbound parsing
//! also accepts the ISO-8601 layouts some REST responses use.

use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, format_description!("[day]-[month]-[year]"))
        .or_else(|_| Date::parse(s, format_description!("[year]-[month]-[day]")))
}

pub fn parse_date_time(s: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    PrimitiveDateTime::parse(
        s,
        format_description!("[day]-[month]-[year] [hour]:[minute]:[second]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            s,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
    })
}

pub fn parse_time(s: &str) -> Result<Time, time::error::Parse> {
    Time::parse(s, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(s, format_description!("[hour]:[minute]")))
}

pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(format_description!("[day]-[month]-[year]"))
}

pub fn format_time(time: Time) -> Result<String, time::error::Format> {
    time.format(format_description!("[hour]:[minute]:[second]"))
}

pub fn format_date_time(dt: PrimitiveDateTime) -> Result<String, time::error::Format> {
    dt.format(format_description!(
        "[day]-[month]-[year] [hour]:[minute]:[second]"
    ))
}

/// The wire layouts carry four-digit years only.
pub fn check_date(date: Date) -> Result<(), String> {
    if (1..=9999).contains(&date.year()) {
        Ok(())
    } else {
        Err(format!("year {} is outside 1..=9999", date.year()))
    }
}

/// The wire layouts carry whole seconds only.
pub fn check_time(time: Time) -> Result<(), String> {
    if time.nanosecond() == 0 {
        Ok(())
    } else {
        Err("sub-second precision cannot be exchanged".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, time};
    use time::Month;

    #[test]
    fn test_parse_carrier_date() {
        assert_eq!(parse_date("31-01-2025").unwrap(), date!(2025 - 01 - 31));
        assert_eq!(parse_date("2025-01-31").unwrap(), date!(2025 - 01 - 31));
        assert!(parse_date("31/01/2025").is_err());
        assert!(parse_date("32-01-2025").is_err());
    }

    #[test]
    fn test_parse_date_time_both_layouts() {
        let expected = datetime!(2025-03-07 09:15:00);
        assert_eq!(parse_date_time("07-03-2025 09:15:00").unwrap(), expected);
        assert_eq!(parse_date_time("2025-03-07T09:15:00").unwrap(), expected);
        assert!(parse_date_time("07-03-2025").is_err());
    }

    #[test]
    fn test_parse_time_with_and_without_seconds() {
        assert_eq!(parse_time("14:05:30").unwrap(), time!(14:05:30));
        assert_eq!(parse_time("14:05").unwrap(), time!(14:05));
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn test_format_is_day_first_and_zero_padded() {
        assert_eq!(format_date(date!(2025 - 02 - 03)).unwrap(), "03-02-2025");
        assert_eq!(format_date(date!(0042 - 12 - 31)).unwrap(), "31-12-0042");
        assert_eq!(format_time(time!(7:04)).unwrap(), "07:04:00");
        assert_eq!(
            format_date_time(datetime!(2025-02-03 07:04:09)).unwrap(),
            "03-02-2025 07:04:09"
        );
    }

    #[test]
    fn test_formatted_values_parse_back() {
        let dt = datetime!(0001-01-01 23:59:59);
        assert_eq!(parse_date_time(&format_date_time(dt).unwrap()).unwrap(), dt);
        let d = date!(9999 - 12 - 31);
        assert_eq!(parse_date(&format_date(d).unwrap()).unwrap(), d);
    }

    #[test]
    fn test_unrepresentable_values() {
        assert!(check_date(date!(2025 - 01 - 31)).is_ok());
        assert!(check_date(date!(0001 - 01 - 01)).is_ok());
        let before_era = Date::from_calendar_date(-5, Month::January, 2).unwrap();
        assert!(check_date(before_era).is_err());
        let year_zero = Date::from_calendar_date(0, Month::June, 1).unwrap();
        assert!(check_date(year_zero).is_err());

        assert!(check_time(time!(9:00:00)).is_ok());
        let half = Time::from_hms_milli(9, 0, 0, 500).unwrap();
        assert_eq!(
            check_time(half).unwrap_err(),
            "sub-second precision cannot be exchanged"
        );
    }
}
