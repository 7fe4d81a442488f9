//! Calendar-date and clock-time checks shared by every store operation.
//!
//! All functions here are total: bad input yields `false` (or `None`), never an error.
use chrono::{NaiveDate, NaiveTime};

/// Latest year a note may be filed under.
pub const MAX_YEAR: i32 = 2030;

/// Gregorian leap-year rule: divisible by 4 and not by 100, unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` if `month` is not in `1..=12`.
pub fn days_in_month(month: i32, year: i32) -> Option<u32> {
    match month {
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        1..=12 => Some(31),
        _ => None,
    }
}

/// Returns `true` iff `year` is in `[0, 2030]`, `month` in `[1, 12]` and `day`
/// fits the month (leap-year February included).
pub fn validate_date(day: i32, month: i32, year: i32) -> bool {
    if !(0..=MAX_YEAR).contains(&year) {
        return false;
    }
    match days_in_month(month, year) {
        Some(max_day) => day >= 1 && day <= max_day as i32,
        None => false,
    }
}

/// Returns `true` iff `hour` is in `[0, 23]` and `minute` in `[0, 59]`.
pub fn validate_time(hour: i32, minute: i32) -> bool {
    (0..24).contains(&hour) && (0..60).contains(&minute)
}

/// Checked conversion to a `NaiveDate`. `None` exactly when [`validate_date`] is `false`.
pub fn to_date(day: i32, month: i32, year: i32) -> Option<NaiveDate> {
    if !validate_date(day, month, year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Checked conversion to a `NaiveTime`. `None` exactly when [`validate_time`] is `false`.
pub fn to_time(hour: i32, minute: i32) -> Option<NaiveTime> {
    if !validate_time(hour, minute) {
        return None;
    }
    NaiveTime::from_hms_opt(hour as u32, minute as u32, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_february() {
        assert!(validate_date(29, 2, 2024));
        assert!(!validate_date(29, 2, 2023));
        assert!(!validate_date(30, 2, 2024));
        // Centuries are only leap when divisible by 400.
        assert!(validate_date(29, 2, 2000));
        assert!(!validate_date(29, 2, 1900));
    }

    #[test]
    fn thirty_day_months() {
        for month in [4, 6, 9, 11] {
            assert!(validate_date(30, month, 2020), "30/{month}");
            assert!(!validate_date(31, month, 2020), "31/{month}");
        }
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert!(validate_date(31, month, 2020), "31/{month}");
        }
    }

    #[test]
    fn date_bounds() {
        assert!(validate_date(1, 1, 0));
        assert!(validate_date(31, 12, 2030));
        assert!(!validate_date(1, 1, 2031));
        assert!(!validate_date(1, 1, -1));
        assert!(!validate_date(0, 1, 2020));
        assert!(!validate_date(1, 0, 2020));
        assert!(!validate_date(1, 13, 2020));
        assert!(!validate_date(32, 1, 2020));
    }

    #[test]
    fn time_bounds() {
        assert!(validate_time(0, 0));
        assert!(validate_time(23, 59));
        assert!(!validate_time(24, 0));
        assert!(!validate_time(12, 60));
        assert!(!validate_time(-1, 30));
        assert!(!validate_time(12, -1));
    }

    #[test]
    fn conversions_agree_with_validators() {
        for year in [0, 1900, 2000, 2023, 2024, 2030, 2031] {
            for month in 0..=13 {
                for day in 0..=32 {
                    assert_eq!(
                        to_date(day, month, year).is_some(),
                        validate_date(day, month, year),
                        "{day}/{month}/{year}"
                    );
                }
            }
        }
        assert_eq!(
            to_time(7, 5),
            Some(NaiveTime::from_hms_opt(7, 5, 0).unwrap())
        );
        assert_eq!(to_time(24, 0), None);
    }
}
