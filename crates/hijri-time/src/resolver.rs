//! Partial-date resolution.
//!
//! Turns Hijri components of any precision into the inclusive interval of
//! days they stand for: a single day, a whole month or a whole year.

use hijri_core::errors::Result;
use hijri_core::{ensure, CalendarMethod, Ordinal};

use crate::components::{HijriComponents, HijriYmd};
use crate::gregorian::GregorianDate;
use crate::ordinal::OrdinalConverter;
use crate::range::DateRange;

/// Inclusive ordinal span covered by `h` under `method`.
///
/// # Errors
/// * Conversion errors of the first day (`OutOfRange`,
///   `UnsupportedMethod`).
/// * `DataConsistency` if the computed span is empty or inverted.
pub fn resolve_span(
    converter: &OrdinalConverter,
    h: &HijriComponents,
    method: CalendarMethod,
) -> Result<(Ordinal, Ordinal)> {
    let (first, last) = match *h {
        HijriComponents::Full(ymd) => {
            let o = converter.ymd_to_ordinal(ymd, method)?;
            (o, o)
        }
        HijriComponents::MonthOnly { year, month } => {
            let first = converter.ymd_to_ordinal(HijriYmd::new(year, month, 1)?, method)?;
            let len = converter.month_length(year, month, method)?;
            (first, first + i64::from(len) - 1)
        }
        HijriComponents::YearOnly { year } => {
            let first = converter.ymd_to_ordinal(HijriYmd::new(year, 1, 1)?, method)?;
            let len = converter.days_in_year(year, method)?;
            (first, first + i64::from(len) - 1)
        }
    };
    ensure!(
        first <= last,
        DataConsistency,
        "{h} resolved to inverted span {first}..={last} under {method}"
    );
    Ok((first, last))
}

/// Inclusive Gregorian range covered by `h` under `method`.
pub fn resolve_range(
    converter: &OrdinalConverter,
    h: &HijriComponents,
    method: CalendarMethod,
) -> Result<DateRange> {
    let (first, last) = resolve_span(converter, h, method)?;
    DateRange::new(
        GregorianDate::from_ordinal(first)?,
        GregorianDate::from_ordinal(last)?,
    )
}
