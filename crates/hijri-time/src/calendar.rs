//! `HijriCalendar` trait: per-method month lengths and ordinal mapping.
//!
//! Every calculation method is one implementation of this trait.  The
//! closed-form [`TabularCalendar`](crate::calendars::TabularCalendar) backs
//! the mathematical method; [`MethodTable`](crate::dataset::MethodTable)
//! backs the table-driven ones.

use hijri_core::errors::Result;
use hijri_core::{ensure, CalendarMethod, Ordinal};

use crate::components::{HijriYmd, MAX_YEAR, MIN_YEAR};
use crate::gregorian::{MAX_ORDINAL, MIN_ORDINAL};

/// A Hijri calendar under one calculation method.
pub trait HijriCalendar: std::fmt::Debug + Send + Sync {
    /// The calculation method this calendar implements.
    fn method(&self) -> CalendarMethod;

    /// First and last Hijri year covered (inclusive).
    fn year_span(&self) -> (u16, u16);

    /// First and last ordinal covered (inclusive).
    fn ordinal_span(&self) -> (Ordinal, Ordinal);

    /// Number of days (29 or 30) in `month` of `year`.
    ///
    /// # Errors
    /// * `OutOfRange` for a year outside 1–1500 or a month outside 1–12.
    /// * `UnsupportedMethod` for a year this calendar does not cover.
    fn month_length(&self, year: u16, month: u8) -> Result<u8>;

    /// Ordinal of a full Hijri date.
    ///
    /// # Errors
    /// `OutOfRange` if the day does not exist in that month, and the
    /// coverage errors of [`month_length`](Self::month_length).
    fn to_ordinal(&self, date: HijriYmd) -> Result<Ordinal>;

    /// Hijri date of an ordinal.
    ///
    /// # Errors
    /// `OutOfRange` outside the global ordinal span, `UnsupportedMethod`
    /// inside it but outside this calendar's coverage.
    fn from_ordinal(&self, ordinal: Ordinal) -> Result<HijriYmd>;

    /// Number of days (354 or 355) in `year`.
    fn days_in_year(&self, year: u16) -> Result<u16> {
        let mut total = 0u16;
        for month in 1..=12 {
            total += u16::from(self.month_length(year, month)?);
        }
        Ok(total)
    }

    /// `true` if `year` has 355 days.
    fn is_leap_year(&self, year: u16) -> Result<bool> {
        Ok(self.days_in_year(year)? == 355)
    }

    /// `true` if `year` lies inside this calendar's coverage.
    fn covers_year(&self, year: u16) -> bool {
        let (first, last) = self.year_span();
        (first..=last).contains(&year)
    }

    /// Check `year` against the global bounds, then against this calendar's
    /// coverage.
    fn check_year(&self, year: u16) -> Result<()> {
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&year),
            OutOfRange,
            "Hijri year {year} outside supported range [{MIN_YEAR}, {MAX_YEAR}]"
        );
        let (first, last) = self.year_span();
        ensure!(
            (first..=last).contains(&year),
            UnsupportedMethod,
            "{} has no data for Hijri year {year} (covers {first}-{last})",
            self.method()
        );
        Ok(())
    }

    /// Check `ordinal` against the global span, then against this
    /// calendar's coverage.
    fn check_ordinal(&self, ordinal: Ordinal) -> Result<()> {
        ensure!(
            (MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal),
            OutOfRange,
            "ordinal {ordinal} outside supported range [{MIN_ORDINAL}, {MAX_ORDINAL}]"
        );
        let (first, last) = self.ordinal_span();
        ensure!(
            (first..=last).contains(&ordinal),
            UnsupportedMethod,
            "{} has no data for ordinal {ordinal} (covers {first}-{last})",
            self.method()
        );
        Ok(())
    }
}
