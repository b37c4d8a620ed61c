#![doc = include_str!("../README.md")]

use std::fmt;
use std::ops::Index;

use chrono::{Days, NaiveDate};

/// A run of consecutive days `[current - before, current + after]`, stored as
/// a contiguous slice so that any sub-range can be borrowed without copying.
///
/// The range is never empty and can't be extended after creation.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct DayRange {
    days: Vec<NaiveDate>,
    current_index: usize,
}

impl DayRange {
    /// Build the range of days surrounding `current`. Return `None` if one of
    /// the bounds can't be represented by chrono or if the total length
    /// overflows.
    ///
    /// ```
    /// use day_range::DayRange;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
    /// let range = DayRange::new(day, 1, 2).unwrap();
    ///
    /// assert_eq!(
    ///     range.as_slice(),
    ///     [
    ///         NaiveDate::from_ymd_opt(2023, 12, 29).unwrap(),
    ///         NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
    ///         NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
    ///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     ],
    /// );
    ///
    /// assert!(DayRange::new(NaiveDate::MAX, 0, 1).is_none());
    /// ```
    pub fn new(current: NaiveDate, before: u32, after: u32) -> Option<Self> {
        let length = usize::try_from(u64::from(before) + u64::from(after) + 1).ok()?;
        let start = current.checked_sub_days(Days::new(before.into()))?;
        current.checked_add_days(Days::new(after.into()))?;

        let days: Vec<_> = start.iter_days().take(length).collect();

        debug_assert_eq!(days.len(), length);
        Some(Self { days, current_index: before as usize })
    }

    /// Number of days in this range, which is always at least one.
    ///
    /// ```
    /// use day_range::DayRange;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
    /// assert_eq!(DayRange::new(day, 0, 0).unwrap().len(), 1);
    /// assert_eq!(DayRange::new(day, 5, 5).unwrap().len(), 11);
    /// ```
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Position of the reference day this range was built around.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Get the day at given position, if it exists.
    ///
    /// ```
    /// use day_range::DayRange;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
    /// let range = DayRange::new(day, 0, 1).unwrap();
    ///
    /// assert_eq!(range.get(1), NaiveDate::from_ymd_opt(2024, 2, 29));
    /// assert_eq!(range.get(2), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.days.get(index).copied()
    }

    /// First day of the range.
    pub fn first(&self) -> NaiveDate {
        self.days[0]
    }

    /// Last day of the range.
    pub fn last(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }

    /// Find the position of a day in this range.
    ///
    /// ```
    /// use day_range::DayRange;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    /// let range = DayRange::new(day, 5, 5).unwrap();
    ///
    /// assert_eq!(range.position(day), Some(5));
    /// assert_eq!(range.position(range.first()), Some(0));
    /// assert_eq!(range.position(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()), None);
    /// ```
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.days.binary_search(&date).ok()
    }

    /// Check if a day belongs to this range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first() <= date && date <= self.last()
    }

    /// Iterate over the days of this range in increasing order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    /// Borrow all days as a sorted slice.
    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.days
    }
}

impl Index<usize> for DayRange {
    type Output = NaiveDate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.days[index]
    }
}

impl fmt::Debug for DayRange {
    /// ```
    /// use day_range::DayRange;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    /// let range = DayRange::new(day, 5, 2).unwrap();
    /// assert_eq!(format!("{range:?}"), "DayRange[2024-06-10..=2024-06-17 @ 5]");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DayRange[{:?}..={:?} @ {}]",
            self.first(),
            self.last(),
            self.current_index,
        )
    }
}

#[cfg(test)]
mod test {
    use chrono::{Duration, NaiveDate};

    use super::DayRange;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("invalid date literal")
    }

    #[test]
    fn steps_by_one_day() {
        for (before, after) in [(0, 0), (0, 7), (3, 0), (5, 5), (40, 400)] {
            let range = DayRange::new(day(2024, 2, 27), before, after).unwrap();
            assert_eq!(range.len(), (before + after + 1) as usize);
            assert_eq!(range[before as usize], day(2024, 2, 27));

            for pair in range.as_slice().windows(2) {
                assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
        }
    }

    #[test]
    fn overflowing_bounds() {
        assert!(DayRange::new(NaiveDate::MIN, 1, 0).is_none());
        assert!(DayRange::new(NaiveDate::MAX, 0, 1).is_none());
        assert!(DayRange::new(NaiveDate::MIN, 0, 1).is_some());
    }

    #[test]
    fn crosses_year_boundary() {
        let range = DayRange::new(day(2024, 1, 1), 1, 0).unwrap();
        assert_eq!(range.first(), day(2023, 12, 31));
        assert_eq!(range.last(), day(2024, 1, 1));
        assert!(range.contains(day(2023, 12, 31)));
        assert!(!range.contains(day(2024, 1, 2)));
    }
}
