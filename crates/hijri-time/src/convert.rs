//! Conversion API over the published dataset.
//!
//! Every call takes one snapshot of the global dataset and runs entirely
//! against it.  A consistency failure observed here marks the registry
//! untrusted, so later calls fail fast until a new dataset is published.

use hijri_core::errors::Result;
use hijri_core::{CalendarMethod, Days, Settings};

use crate::components::{HijriComponents, HijriYmd};
use crate::dataset::DatasetRegistry;
use crate::gregorian::GregorianDate;
use crate::hijri_date::HijriDate;
use crate::ordinal::OrdinalConverter;
use crate::range::DateRange;
use crate::resolver::resolve_range;

/// Run `f` against a converter over the current global snapshot.
pub(crate) fn with_current<T>(f: impl FnOnce(&OrdinalConverter) -> Result<T>) -> Result<T> {
    let registry = DatasetRegistry::global();
    let converter = OrdinalConverter::new(registry.current()?);
    registry.observe(f(&converter))
}

/// Gregorian range covered by Hijri components under `method`: a single
/// day for a full date, the whole month or year otherwise.
pub fn to_gregorian(h: &HijriComponents, method: CalendarMethod) -> Result<DateRange> {
    with_current(|c| resolve_range(c, h, method))
}

/// [`to_gregorian`] under the default method.
pub fn to_gregorian_default(h: &HijriComponents) -> Result<DateRange> {
    to_gregorian(h, Settings::instance().default_method())
}

/// Hijri date falling on `date` under `method`.
pub fn to_hijri(date: GregorianDate, method: CalendarMethod) -> Result<HijriYmd> {
    with_current(|c| c.gregorian_to_hijri(date, method))
}

/// [`to_hijri`] under the default method.
pub fn to_hijri_default(date: GregorianDate) -> Result<HijriYmd> {
    to_hijri(date, Settings::instance().default_method())
}

/// First and last Hijri dates of a Gregorian range under `method`.
pub fn to_hijri_range(range: &DateRange, method: CalendarMethod) -> Result<(HijriYmd, HijriYmd)> {
    with_current(|c| {
        Ok((
            c.gregorian_to_hijri(range.start(), method)?,
            c.gregorian_to_hijri(range.end(), method)?,
        ))
    })
}

/// First and last Hijri dates of a whole Gregorian year, or of one month of
/// it when `month` is given.
///
/// # Errors
/// `OutOfRange` if the Gregorian period is not entirely supported (the
/// period is never clipped), otherwise as [`to_hijri`].
pub fn to_hijri_partial(
    year: u16,
    month: Option<u8>,
    method: CalendarMethod,
) -> Result<(HijriYmd, HijriYmd)> {
    let range = match month {
        Some(month) => DateRange::gregorian_month(year, month)?,
        None => DateRange::gregorian_year(year)?,
    };
    to_hijri_range(&range, method)
}

/// `date` moved by `days` days, under the date's own method.
pub fn add_days(date: &HijriDate, days: Days) -> Result<HijriDate> {
    with_current(|c| date.offset_with(c, days))
}

/// Signed day count `a - b`.
pub fn difference(a: &HijriDate, b: &HijriDate) -> Result<Days> {
    Ok(a.difference(b)?.num_days())
}

/// Days in `month` of `year` under `method`.
pub fn month_length(year: u16, month: u8, method: CalendarMethod) -> Result<u8> {
    with_current(|c| c.month_length(year, month, method))
}

/// `true` if `year` has 355 days under `method`.
pub fn is_leap_year(year: u16, method: CalendarMethod) -> Result<bool> {
    with_current(|c| c.is_leap_year(year, method))
}

/// Days in `year` under `method`.
pub fn days_in_year(year: u16, method: CalendarMethod) -> Result<u16> {
    with_current(|c| c.days_in_year(year, method))
}

/// Convert many Hijri dates against one dataset snapshot.
///
/// The outer error is returned only if no snapshot can be taken; each item
/// carries its own result.
pub fn to_gregorian_batch(
    items: &[HijriComponents],
    method: CalendarMethod,
) -> Result<Vec<Result<DateRange>>> {
    let registry = DatasetRegistry::global();
    let converter = OrdinalConverter::new(registry.current()?);
    let out = items
        .iter()
        .map(|h| registry.observe(resolve_range(&converter, h, method)))
        .collect();
    tracing::debug!(items = items.len(), %method, "batch converted to Gregorian");
    Ok(out)
}

/// Convert many Gregorian dates against one dataset snapshot.
pub fn to_hijri_batch(
    dates: &[GregorianDate],
    method: CalendarMethod,
) -> Result<Vec<Result<HijriYmd>>> {
    let registry = DatasetRegistry::global();
    let converter = OrdinalConverter::new(registry.current()?);
    let out = dates
        .iter()
        .map(|&d| registry.observe(converter.gregorian_to_hijri(d, method)))
        .collect();
    tracing::debug!(items = dates.len(), %method, "batch converted to Hijri");
    Ok(out)
}
