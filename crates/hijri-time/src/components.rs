//! Hijri date components: full dates and the two partial precisions.
//!
//! A partial Hijri date is modelled as a tagged variant rather than a struct
//! of optionals, so every consumer dispatches explicitly on the precision.

use std::str::FromStr;

use hijri_core::errors::{Error, Result};
use hijri_core::utilities::data_parsers::parse_partial_date;
use hijri_core::{ensure, fail};

use crate::hijri_month::HijriMonth;

/// First supported Hijri year.
pub const MIN_YEAR: u16 = 1;

/// Last supported Hijri year.
pub const MAX_YEAR: u16 = 1500;

fn check_year(year: u16) -> Result<()> {
    ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&year),
        OutOfRange,
        "Hijri year {year} outside supported range [{MIN_YEAR}, {MAX_YEAR}]"
    );
    Ok(())
}

fn check_month(month: u8) -> Result<()> {
    ensure!(
        (1..=12).contains(&month),
        OutOfRange,
        "Hijri month {month} out of range [1, 12]"
    );
    Ok(())
}

// ── HijriYmd ──────────────────────────────────────────────────────────────────

/// A fully specified Hijri date.
///
/// Construction only checks the static bounds (year 1–1500, month 1–12,
/// day 1–30).  Whether day 30 exists in a given month depends on the
/// calculation method and is checked on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HijriYmd {
    year: u16,
    month: u8,
    day: u8,
}

impl HijriYmd {
    /// Create a full Hijri date.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] for a year outside 1–1500, a month outside
    /// 1–12 or a day outside 1–30.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self> {
        check_year(year)?;
        check_month(month)?;
        ensure!(
            (1..=30).contains(&day),
            OutOfRange,
            "Hijri day {day} out of range [1, 30]"
        );
        Ok(HijriYmd { year, month, day })
    }

    pub(crate) const fn new_unchecked(year: u16, month: u8, day: u8) -> Self {
        HijriYmd { year, month, day }
    }

    /// Hijri year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Hijri month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month (1–30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The month as an enum.
    pub fn hijri_month(&self) -> HijriMonth {
        // month is validated on construction
        HijriMonth::from_number(self.month).unwrap_or(HijriMonth::Muharram)
    }

    /// Transliterated month name, e.g. `"Ramadan"`.
    pub fn month_name(&self) -> &'static str {
        self.hijri_month().long_name()
    }
}

impl std::fmt::Display for HijriYmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for HijriYmd {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HijriComponents::from_str(s)?.as_full()
    }
}

// ── HijriComponents ───────────────────────────────────────────────────────────

/// A Hijri date at one of three precisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HijriComponents {
    /// Year, month and day.
    Full(HijriYmd),
    /// Year and month; stands for every day of that month.
    MonthOnly {
        /// Hijri year.
        year: u16,
        /// Hijri month (1–12).
        month: u8,
    },
    /// Year only; stands for every day of that year.
    YearOnly {
        /// Hijri year.
        year: u16,
    },
}

impl HijriComponents {
    /// Build components from a year and optional month and day.
    ///
    /// # Errors
    /// * [`Error::IncompleteDate`] if a day is given without a month.
    /// * [`Error::OutOfRange`] if any present component is out of bounds.
    pub fn new(year: u16, month: Option<u8>, day: Option<u8>) -> Result<Self> {
        match (month, day) {
            (Some(m), Some(d)) => Ok(HijriComponents::Full(HijriYmd::new(year, m, d)?)),
            (Some(m), None) => Self::month_only(year, m),
            (None, None) => Self::year_only(year),
            (None, Some(d)) => {
                fail!(IncompleteDate, "day {d} given without a month for year {year}")
            }
        }
    }

    /// A full date.
    pub fn full(year: u16, month: u8, day: u8) -> Result<Self> {
        Ok(HijriComponents::Full(HijriYmd::new(year, month, day)?))
    }

    /// A whole month.
    pub fn month_only(year: u16, month: u8) -> Result<Self> {
        check_year(year)?;
        check_month(month)?;
        Ok(HijriComponents::MonthOnly { year, month })
    }

    /// A whole year.
    pub fn year_only(year: u16) -> Result<Self> {
        check_year(year)?;
        Ok(HijriComponents::YearOnly { year })
    }

    /// Hijri year.
    pub fn year(&self) -> u16 {
        match self {
            HijriComponents::Full(ymd) => ymd.year(),
            HijriComponents::MonthOnly { year, .. } | HijriComponents::YearOnly { year } => *year,
        }
    }

    /// Month, if present.
    pub fn month(&self) -> Option<u8> {
        match self {
            HijriComponents::Full(ymd) => Some(ymd.month()),
            HijriComponents::MonthOnly { month, .. } => Some(*month),
            HijriComponents::YearOnly { .. } => None,
        }
    }

    /// Day, if present.
    pub fn day(&self) -> Option<u8> {
        match self {
            HijriComponents::Full(ymd) => Some(ymd.day()),
            _ => None,
        }
    }

    /// `true` if year, month and day are all present.
    pub fn is_full(&self) -> bool {
        matches!(self, HijriComponents::Full(_))
    }

    /// The full date.
    ///
    /// # Errors
    /// [`Error::IncompleteDate`] for partial components.
    pub fn as_full(&self) -> Result<HijriYmd> {
        match self {
            HijriComponents::Full(ymd) => Ok(*ymd),
            partial => fail!(IncompleteDate, "{partial} is not a full date"),
        }
    }

    /// The earliest completion: day 1 of the month, or 1 Muharram.
    pub fn first_day(&self) -> HijriYmd {
        match *self {
            HijriComponents::Full(ymd) => ymd,
            HijriComponents::MonthOnly { year, month } => HijriYmd::new_unchecked(year, month, 1),
            HijriComponents::YearOnly { year } => HijriYmd::new_unchecked(year, 1, 1),
        }
    }
}

impl From<HijriYmd> for HijriComponents {
    fn from(ymd: HijriYmd) -> Self {
        HijriComponents::Full(ymd)
    }
}

impl std::fmt::Display for HijriComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HijriComponents::Full(ymd) => write!(f, "{ymd}"),
            HijriComponents::MonthOnly { year, month } => write!(f, "{year:04}-{month:02}"),
            HijriComponents::YearOnly { year } => write!(f, "{year:04}"),
        }
    }
}

impl FromStr for HijriComponents {
    type Err = Error;

    /// Parse `YYYY`, `YYYY-MM` or `YYYY-MM-DD`, optionally followed by `AH`.
    fn from_str(s: &str) -> Result<Self> {
        let (year, month, day) = parse_partial_date(s)
            .ok_or_else(|| Error::Parse(format!("invalid Hijri date: {s:?}")))?;
        HijriComponents::new(year, month, day)
    }
}
