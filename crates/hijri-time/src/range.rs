//! `DateRange`: an inclusive interval of Gregorian dates.

use hijri_core::errors::Result;
use hijri_core::{ensure, fail, Days, Ordinal};

use crate::gregorian::{days_in_month, GregorianDate};

/// Inclusive Gregorian date interval with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    start: GregorianDate,
    end: GregorianDate,
}

impl DateRange {
    /// Create a range.
    ///
    /// # Errors
    /// `DataConsistency` if `end < start`; ranges are never reordered or
    /// clamped.
    pub fn new(start: GregorianDate, end: GregorianDate) -> Result<Self> {
        ensure!(
            start <= end,
            DataConsistency,
            "inverted date range {start}..={end}"
        );
        Ok(DateRange { start, end })
    }

    /// The one-day range `[date, date]`.
    pub fn single(date: GregorianDate) -> Self {
        DateRange {
            start: date,
            end: date,
        }
    }

    /// Every day of Gregorian `year`.
    ///
    /// # Errors
    /// `OutOfRange` unless the whole year lies within
    /// [`GregorianDate::MIN`]..=[`GregorianDate::MAX`]; partly supported
    /// years (622, 2077) are not clipped.
    pub fn gregorian_year(year: u16) -> Result<Self> {
        Self::within_supported(year, 1, year, 12, || format!("year {year}"))
    }

    /// Every day of Gregorian `month` (1–12) of `year`.
    ///
    /// # Errors
    /// `OutOfRange` for an invalid month, or unless the whole month lies
    /// within the supported span.
    pub fn gregorian_month(year: u16, month: u8) -> Result<Self> {
        ensure!(
            (1..=12).contains(&month),
            OutOfRange,
            "month {month} outside 1..=12"
        );
        Self::within_supported(year, month, year, month, || {
            format!("{year}-{month:02}")
        })
    }

    fn within_supported(
        first_year: u16,
        first_month: u8,
        last_year: u16,
        last_month: u8,
        label: impl FnOnce() -> String,
    ) -> Result<Self> {
        let first = GregorianDate::from_ymd(first_year, first_month, 1);
        let last = GregorianDate::from_ymd(
            last_year,
            last_month,
            days_in_month(last_year, last_month),
        );
        match (first, last) {
            (Ok(start), Ok(end)) => DateRange::new(start, end),
            _ => fail!(
                OutOfRange,
                "{} is not entirely within {}..={}",
                label(),
                GregorianDate::MIN,
                GregorianDate::MAX
            ),
        }
    }

    /// First day.
    pub fn start(&self) -> GregorianDate {
        self.start
    }

    /// Last day.
    pub fn end(&self) -> GregorianDate {
        self.end
    }

    /// `true` if `date` lies within the range.
    pub fn contains(&self, date: GregorianDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `true` if `other` lies entirely within this range.
    pub fn contains_range(&self, other: &DateRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Number of days, counting both ends.
    pub fn len_days(&self) -> Days {
        self.end - self.start + 1
    }

    /// `true` if the range covers a single day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Iterate over every day in the range.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: self.start.to_ordinal(),
            last: self.end.to_ordinal(),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl IntoIterator for &DateRange {
    type Item = GregorianDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Ordinal,
    last: Ordinal,
}

impl Iterator for DateRangeIter {
    type Item = GregorianDate;

    fn next(&mut self) -> Option<GregorianDate> {
        if self.next > self.last {
            return None;
        }
        let date = GregorianDate::from_ordinal(self.next).ok()?;
        self.next += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.last - self.next + 1).max(0) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use hijri_core::Error;

    fn g(y: u16, m: u8, d: u8) -> GregorianDate {
        GregorianDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn inverted_is_inconsistent() {
        assert!(matches!(
            DateRange::new(g(2024, 8, 2), g(2024, 8, 1)),
            Err(Error::DataConsistency(_))
        ));
    }

    #[test]
    fn contains_and_len() {
        let r = DateRange::new(g(2024, 2, 27), g(2024, 3, 2)).unwrap();
        assert_eq!(r.len_days(), 5);
        assert!(r.contains(g(2024, 2, 29)));
        assert!(!r.contains(g(2024, 3, 3)));
        assert!(r.contains_range(&DateRange::single(g(2024, 3, 1))));
        assert_eq!(r.to_string(), "2024-02-27/2024-03-02");
    }

    #[test]
    fn whole_gregorian_periods() {
        let leap = DateRange::gregorian_year(2024).unwrap();
        assert_eq!(leap.start(), g(2024, 1, 1));
        assert_eq!(leap.end(), g(2024, 12, 31));
        assert_eq!(leap.len_days(), 366);
        let feb = DateRange::gregorian_month(2023, 2).unwrap();
        assert_eq!(feb.end(), g(2023, 2, 28));
        assert_eq!(DateRange::gregorian_month(2077, 10).unwrap().len_days(), 31);
        assert!(matches!(
            DateRange::gregorian_month(2024, 13),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn partly_supported_periods_are_rejected() {
        for year in [622, 2077, 2078] {
            assert!(matches!(
                DateRange::gregorian_year(year),
                Err(Error::OutOfRange(_))
            ));
        }
        assert!(DateRange::gregorian_year(623).is_ok());
        assert!(DateRange::gregorian_year(2076).is_ok());
        assert!(matches!(
            DateRange::gregorian_month(622, 7),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(
            DateRange::gregorian_month(2077, 11),
            Err(Error::OutOfRange(_))
        ));
        assert_eq!(DateRange::gregorian_month(622, 8).unwrap().start(), g(622, 8, 1));
    }

    #[test]
    fn iteration() {
        let r = DateRange::new(g(2024, 2, 27), g(2024, 3, 2)).unwrap();
        let days: Vec<_> = r.iter().collect();
        assert_eq!(days.len(), 5);
        assert_eq!(r.iter().len(), 5);
        assert_eq!(days[2], g(2024, 2, 29));
        assert_eq!((&r).into_iter().last(), Some(g(2024, 3, 2)));
        assert_eq!(DateRange::single(GregorianDate::MAX).iter().count(), 1);
    }
}
