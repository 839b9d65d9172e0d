//! `GregorianDate`: a proleptic Gregorian calendar date.
//!
//! Gregorian dates map onto the shared day-ordinal space by pure
//! arithmetic; no dataset is involved.
//!
//! # Ordinal convention
//! * Ordinal 0 = 622-07-19, the first day of the Hijri calendar.
//! * The supported range is 622-07-19 to 2077-11-16 (the last day of
//!   1500 AH under the tabular rule), i.e. ordinals `0..=531_549`.

use std::str::FromStr;

use hijri_core::errors::{Error, Result};
use hijri_core::utilities::data_parsers::{parse_date_dmy, parse_iso_date};
use hijri_core::{ensure, Days, Ordinal};

use crate::weekday::Weekday;

/// A calendar date in the proleptic Gregorian calendar.
///
/// Always within [`GregorianDate::MIN`]..=[`GregorianDate::MAX`].  Field
/// order makes the derived ordering chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianDate {
    year: u16,
    month: u8,
    day: u8,
}

// ── Constants ─────────────────────────────────────────────────────────────────

/// Days from 1970-01-01 to 622-07-19.
const HIJRA_EPOCH_UNIX_DAYS: i64 = -492_148;

/// Ordinal of the last supported day (2077-11-16, the end of 1500 AH).
pub const MAX_ORDINAL: Ordinal = 531_549;

/// Ordinal of the first supported day (622-07-19).
pub const MIN_ORDINAL: Ordinal = 0;

impl GregorianDate {
    /// First supported date: 622-07-19 (ordinal 0).
    pub const MIN: GregorianDate = GregorianDate::new_unchecked(622, 7, 19);

    /// Last supported date: 2077-11-16.
    ///
    /// This is the last day of 1500-12 AH under HJCoSA, so every Hijri year
    /// up to 1500 converts in full.  Dates after 2077-09-30 are accepted for
    /// that reason.
    pub const MAX: GregorianDate = GregorianDate::new_unchecked(2077, 11, 16);

    pub(crate) const fn new_unchecked(year: u16, month: u8, day: u8) -> Self {
        GregorianDate { year, month, day }
    }

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if the components do not form a calendar date
    /// or the date lies outside the supported span.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (1..=12).contains(&month),
            OutOfRange,
            "month {month} out of range [1, 12]"
        );
        let days_in = days_in_month(year, month);
        ensure!(
            (1..=days_in).contains(&day),
            OutOfRange,
            "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
        );
        let date = GregorianDate::new_unchecked(year, month, day);
        ensure!(
            (Self::MIN..=Self::MAX).contains(&date),
            OutOfRange,
            "{date} outside supported range [{}, {}]",
            Self::MIN,
            Self::MAX
        );
        Ok(date)
    }

    /// Create a date from a day ordinal.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `ordinal` is outside `0..=MAX_ORDINAL`.
    pub fn from_ordinal(ordinal: Ordinal) -> Result<Self> {
        ensure!(
            (MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal),
            OutOfRange,
            "ordinal {ordinal} outside supported range [{MIN_ORDINAL}, {MAX_ORDINAL}]"
        );
        let (y, m, d) = civil_from_days(ordinal + HIJRA_EPOCH_UNIX_DAYS);
        // y is within 622..=2077 here
        Ok(GregorianDate::new_unchecked(y as u16, m, d))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the day ordinal (days since 622-07-19).
    pub fn to_ordinal(&self) -> Ordinal {
        days_from_civil(i64::from(self.year), self.month, self.day) - HIJRA_EPOCH_UNIX_DAYS
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (1..self.month)
            .map(|m| u16::from(days_in_month(self.year, m)))
            .sum::<u16>()
            + u16::from(self.day)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_ordinal(self.to_ordinal())
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: Days) -> Result<Self> {
        let ordinal = self.to_ordinal().checked_add(n).ok_or_else(|| {
            Error::OutOfRange(format!("{self} + {n} days overflows the day count"))
        })?;
        Self::from_ordinal(ordinal)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: GregorianDate) -> Days {
        other.to_ordinal() - self.to_ordinal()
    }

    /// Parse a day-first date (`DD-MM-YYYY` or `DD/MM/YYYY`).
    pub fn parse_dmy(s: &str) -> Result<Self> {
        let (y, m, d) = parse_date_dmy(s)
            .ok_or_else(|| Error::Parse(format!("expected DD-MM-YYYY, got {s:?}")))?;
        Self::from_ymd(y, m, d)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Sub<GregorianDate> for GregorianDate {
    type Output = Days;
    fn sub(self, rhs: GregorianDate) -> Days {
        self.to_ordinal() - rhs.to_ordinal()
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GregorianDate({self})")
    }
}

impl FromStr for GregorianDate {
    type Err = Error;

    /// Accepts `YYYY-MM-DD`, falling back to `DD-MM-YYYY` / `DD/MM/YYYY`.
    fn from_str(s: &str) -> Result<Self> {
        match parse_iso_date(s) {
            Some((y, m, d)) => Self::from_ymd(y, m, d),
            None => Self::parse_dmy(s),
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year (0 for an invalid month).
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 of a proleptic Gregorian date.
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let (m, d) = (i64::from(month), i64::from(day));
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(z: i64) -> (i64, u8, u8) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
