//! Parsing of what the user types at the prompts or passes as arguments.

/// The five numbers typed at the "DD MM YYYY HH MM" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeInput {
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub hour: i32,
    pub minute: i32,
}

/// Parses exactly five whitespace-separated integers.
///
/// Fewer numbers, a non-numeric token, or any trailing token rejects the line.
/// Range checks are left to [`crate::validate`].
pub fn parse_date_time_input(input: &str) -> Option<DateTimeInput> {
    let fields = input
        .split_whitespace()
        .map(|token| token.parse::<i32>().ok())
        .collect::<Option<Vec<_>>>()?;

    match fields.as_slice() {
        [day, month, year, hour, minute] => Some(DateTimeInput {
            day: *day,
            month: *month,
            year: *year,
            hour: *hour,
            minute: *minute,
        }),
        _ => None,
    }
}

/// Parses `DD MM YYYY` given as three separate arguments.
pub fn parse_date_args(day: &str, month: &str, year: &str) -> Option<(i32, i32, i32)> {
    Some((
        day.trim().parse().ok()?,
        month.trim().parse().ok()?,
        year.trim().parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_numbers() {
        assert_eq!(
            parse_date_time_input(" 29 02 2024  13 05 "),
            Some(DateTimeInput {
                day: 29,
                month: 2,
                year: 2024,
                hour: 13,
                minute: 5
            })
        );
    }

    #[test]
    fn out_of_range_numbers_still_parse() {
        let parsed = parse_date_time_input("99 99 9999 99 99").unwrap();
        assert_eq!(parsed.day, 99);
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert_eq!(parse_date_time_input(""), None);
        assert_eq!(parse_date_time_input("29 02 2024 13"), None);
        assert_eq!(parse_date_time_input("29 02 2024 13 05 extra"), None);
        assert_eq!(parse_date_time_input("29 02 2024 13 05 6"), None);
        assert_eq!(parse_date_time_input("29 feb 2024 13 05"), None);
        assert_eq!(parse_date_time_input("29/02/2024 13:05"), None);
    }

    #[test]
    fn date_args() {
        assert_eq!(parse_date_args("01", "12", "2024"), Some((1, 12, 2024)));
        assert_eq!(parse_date_args("1", "x", "2024"), None);
    }
}
