//! Header text describing the months and years currently in sight.

use chrono::NaiveDate;

use crate::format::DayFormat;

/// Separator between consecutive months.
const MONTH_SEPARATOR: &str = " – ";

/// Describe the month(s) and year(s) covered by a sequence of days. Return
/// `None` if there is no day to describe.
///
/// When all days belong to the same year, months are listed once followed by
/// the year. Otherwise each month is paired with the year it belongs to,
/// rather than zipping distinct months with distinct years by position,
/// which would misalign as soon as two months of the same year are visible
/// next to another year (eg. "November, 2023 – December, 2023 – January,
/// 2024").
///
/// ```
/// use calendar_strip::format::English;
/// use calendar_strip::label::format_range;
/// use chrono::NaiveDate;
///
/// let mar_31 = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// let apr_01 = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// assert_eq!(format_range(&English, &[mar_31]).unwrap(), "March,  2024");
/// assert_eq!(format_range(&English, &[mar_31, apr_01]).unwrap(), "March – April,  2024");
///
/// let dec_31 = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// let jan_01 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(
///     format_range(&English, &[dec_31, jan_01]).unwrap(),
///     "December, 2023 – January, 2024",
/// );
///
/// assert!(format_range(&English, &[]).is_none());
/// ```
pub fn format_range<F: DayFormat + ?Sized>(fmt: &F, days: &[NaiveDate]) -> Option<String> {
    if days.is_empty() {
        return None;
    }

    // Days are sorted: consecutive deduplication keeps order of appearance.
    let mut months: Vec<(String, String)> = Vec::new();

    for &day in days {
        let month = fmt.month_name(day);
        let year = fmt.year(day);

        if months.last() != Some(&(month.clone(), year.clone())) {
            months.push((month, year));
        }
    }

    let single_year = months.windows(2).all(|pair| pair[0].1 == pair[1].1);

    let label = if single_year {
        let year = &months[0].1;

        let names: Vec<_> = (months.iter())
            .map(|(month, _)| month.as_str())
            .collect();

        format!("{},  {year}", names.join(MONTH_SEPARATOR))
    } else {
        let parts: Vec<_> = (months.iter())
            .map(|(month, year)| format!("{month}, {year}"))
            .collect();

        parts.join(MONTH_SEPARATOR)
    };

    Some(label)
}

/// Label used when no visible day is known yet, which describes a single day.
///
/// ```
/// use calendar_strip::format::English;
/// use calendar_strip::label::fallback_label;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// assert_eq!(fallback_label(&English, day), "June, 2024");
/// ```
pub fn fallback_label<F: DayFormat + ?Sized>(fmt: &F, day: NaiveDate) -> String {
    format!("{}, {}", fmt.month_name(day), fmt.year(day))
}
