//! `HijriDate`: an immutable Hijri date value of any precision, tied to a
//! calculation method.
//!
//! All arithmetic happens in ordinal space: a date is converted to its
//! ordinal, offset, and converted back, so irregular month lengths need no
//! special handling.  Partial dates are never silently completed; where a
//! single ordinal is required they contribute the first day of their span.

use std::cmp::Ordering;
use std::str::FromStr;

use hijri_core::errors::{Error, Result};
use hijri_core::{fail, CalendarMethod, Ordinal, Settings};

use crate::components::{HijriComponents, HijriYmd};
use crate::convert::with_current;
use crate::duration::Duration;
use crate::gregorian::GregorianDate;
use crate::hijri_month::HijriMonth;
use crate::ordinal::OrdinalConverter;
use crate::range::DateRange;
use crate::resolver::{resolve_range, resolve_span};
use crate::weekday::Weekday;

/// A Hijri date (full, month-only or year-only) under a calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HijriDate {
    components: HijriComponents,
    method: CalendarMethod,
}

impl HijriDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Wrap components under an explicit method.
    pub fn new(components: HijriComponents, method: CalendarMethod) -> Self {
        HijriDate { components, method }
    }

    /// A full date under the default method.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        Ok(Self::new(
            HijriComponents::full(year, month, day)?,
            Settings::instance().default_method(),
        ))
    }

    /// A whole month under the default method.
    pub fn from_year_month(year: u16, month: u8) -> Result<Self> {
        Ok(Self::new(
            HijriComponents::month_only(year, month)?,
            Settings::instance().default_method(),
        ))
    }

    /// A whole year under the default method.
    pub fn from_year(year: u16) -> Result<Self> {
        Ok(Self::new(
            HijriComponents::year_only(year)?,
            Settings::instance().default_method(),
        ))
    }

    /// The Hijri date falling on `date` under `method`.
    pub fn from_gregorian(date: GregorianDate, method: CalendarMethod) -> Result<Self> {
        with_current(|c| Ok(Self::new(c.gregorian_to_hijri(date, method)?.into(), method)))
    }

    /// The same components tagged with another method.  No conversion takes
    /// place; see [`to_method`](Self::to_method) for that.
    pub fn with_method(self, method: CalendarMethod) -> Self {
        HijriDate { method, ..self }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Underlying components.
    pub fn components(&self) -> HijriComponents {
        self.components
    }

    /// Calculation method.
    pub fn method(&self) -> CalendarMethod {
        self.method
    }

    /// Hijri year.
    pub fn year(&self) -> u16 {
        self.components.year()
    }

    /// Month, if present.
    pub fn month(&self) -> Option<u8> {
        self.components.month()
    }

    /// Day, if present.
    pub fn day(&self) -> Option<u8> {
        self.components.day()
    }

    /// `true` for a full date.
    pub fn is_full(&self) -> bool {
        self.components.is_full()
    }

    /// Transliterated month name, if a month is present.
    pub fn month_name(&self) -> Option<&'static str> {
        self.components
            .month()
            .and_then(HijriMonth::from_number)
            .map(|m| m.long_name())
    }

    // ── Conversion ────────────────────────────────────────────────────────────

    /// Inclusive ordinal span against a given converter.
    pub fn span_with(&self, converter: &OrdinalConverter) -> Result<(Ordinal, Ordinal)> {
        resolve_span(converter, &self.components, self.method)
    }

    /// Inclusive Gregorian range covered by this date.
    pub fn range(&self) -> Result<DateRange> {
        with_current(|c| resolve_range(c, &self.components, self.method))
    }

    /// Gregorian date of a full date.
    ///
    /// # Errors
    /// `IncompleteDate` for partial dates; use [`range`](Self::range).
    pub fn to_gregorian(&self) -> Result<GregorianDate> {
        let ymd = self.components.as_full()?;
        with_current(|c| c.hijri_to_gregorian(ymd, self.method))
    }

    /// Ordinal of the date, or of the first day of a partial date.
    pub fn ordinal(&self) -> Result<Ordinal> {
        with_current(|c| Ok(self.span_with(c)?.0))
    }

    /// Weekday of a full date.
    pub fn weekday(&self) -> Result<Weekday> {
        Ok(self.to_gregorian()?.weekday())
    }

    /// Re-express a full date under another method: same day, possibly a
    /// different Hijri label.
    ///
    /// # Errors
    /// `IncompleteDate` for partial dates, plus the conversion errors of
    /// either method.
    pub fn to_method(&self, method: CalendarMethod) -> Result<HijriDate> {
        let ymd = self.components.as_full()?;
        with_current(|c| {
            let ordinal = c.ymd_to_ordinal(ymd, self.method)?;
            Ok(HijriDate::new(c.ordinal_to_hijri(ordinal, method)?.into(), method))
        })
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Date `duration` days later, as a full date under the same method.
    ///
    /// # Errors
    /// `OutOfRange` if the result leaves the supported span (including
    /// integer overflow of the offset).
    pub fn add(&self, duration: Duration) -> Result<HijriDate> {
        with_current(|c| self.offset_with(c, duration.num_days()))
    }

    /// Date `duration` days earlier.
    pub fn subtract(&self, duration: Duration) -> Result<HijriDate> {
        let days = duration
            .num_days()
            .checked_neg()
            .ok_or_else(|| Error::OutOfRange(format!("cannot negate {duration}")))?;
        with_current(|c| self.offset_with(c, days))
    }

    pub(crate) fn offset_with(&self, converter: &OrdinalConverter, days: i64) -> Result<HijriDate> {
        let start = self.span_with(converter)?.0;
        let target = match start.checked_add(days) {
            Some(o) => o,
            None => fail!(OutOfRange, "{self} + {days} days overflows"),
        };
        let ymd = converter.ordinal_to_hijri(target, self.method)?;
        Ok(HijriDate::new(ymd.into(), self.method))
    }

    /// `self - other` in days, so that `d.add(n).difference(d) == n`.
    pub fn difference(&self, other: &HijriDate) -> Result<Duration> {
        with_current(|c| {
            let a = self.span_with(c)?.0;
            let b = other.span_with(c)?.0;
            Ok(Duration::days(a - b))
        })
    }

    // ── Comparison ────────────────────────────────────────────────────────────

    /// Order by span start, then span end.
    pub fn compare(&self, other: &HijriDate) -> Result<Ordering> {
        self.with_spans(other, |a, b| Ok(a.cmp(&b)))
    }

    /// Order by span start only; a year and its first day compare equal.
    pub fn compare_start(&self, other: &HijriDate) -> Result<Ordering> {
        self.with_spans(other, |a, b| Ok(a.0.cmp(&b.0)))
    }

    /// Exact equality.
    ///
    /// Full dates are equal when they fall on the same day, whatever their
    /// methods.  Two partial dates are equal when they cover the same days.
    ///
    /// # Errors
    /// `AmbiguousComparison` when comparing a full date with a partial one,
    /// or two partial dates that start together but end apart.
    pub fn try_eq(&self, other: &HijriDate) -> Result<bool> {
        if self.is_full() != other.is_full() {
            fail!(
                AmbiguousComparison,
                "{self} and {other} differ in precision; compare ranges explicitly"
            );
        }
        self.with_spans(other, |a, b| {
            if a.0 == b.0 && a.1 != b.1 {
                fail!(
                    AmbiguousComparison,
                    "{self} and {other} start on the same day but end apart"
                );
            }
            Ok(a == b)
        })
    }

    /// `true` if both dates cover exactly the same days.
    pub fn range_eq(&self, other: &HijriDate) -> Result<bool> {
        self.with_spans(other, |a, b| Ok(a == b))
    }

    fn with_spans<T>(
        &self,
        other: &HijriDate,
        f: impl FnOnce((Ordinal, Ordinal), (Ordinal, Ordinal)) -> Result<T>,
    ) -> Result<T> {
        with_current(|c| f(self.span_with(c)?, other.span_with(c)?))
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} AH", self.components)
    }
}

impl FromStr for HijriDate {
    type Err = Error;

    /// Parse components and tag them with the default method.
    fn from_str(s: &str) -> Result<Self> {
        Ok(HijriDate::new(
            s.parse()?,
            Settings::instance().default_method(),
        ))
    }
}

impl From<HijriYmd> for HijriDate {
    /// A full date under the default method.
    fn from(ymd: HijriYmd) -> Self {
        HijriDate::new(ymd.into(), Settings::instance().default_method())
    }
}
