use chrono::NaiveDate;

/// Specify how days are turned into the pieces of text displayed by a strip:
/// the weekday and day number inside each cell, the month and year in its
/// header.
pub trait DayFormat {
    /// Short name of the day of week, eg. "Sat".
    fn weekday_abbrev(&self, day: NaiveDate) -> String;

    /// Two-digits day of the month, eg. "05".
    fn day_number(&self, day: NaiveDate) -> String;

    /// Full name of the month, eg. "March".
    fn month_name(&self, day: NaiveDate) -> String;

    /// Year padded to four digits, eg. "2024".
    fn year(&self, day: NaiveDate) -> String;
}

/// English names for months and weekdays, as rendered by chrono.
///
/// ```
/// use calendar_strip::format::{DayFormat, English};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
/// assert_eq!(English.weekday_abbrev(day), "Sat");
/// assert_eq!(English.day_number(day), "02");
/// assert_eq!(English.month_name(day), "March");
/// assert_eq!(English.year(day), "2024");
/// ```
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct English;

impl DayFormat for English {
    fn weekday_abbrev(&self, day: NaiveDate) -> String {
        day.format("%a").to_string()
    }

    fn day_number(&self, day: NaiveDate) -> String {
        day.format("%d").to_string()
    }

    fn month_name(&self, day: NaiveDate) -> String {
        day.format("%B").to_string()
    }

    fn year(&self, day: NaiveDate) -> String {
        day.format("%Y").to_string()
    }
}
