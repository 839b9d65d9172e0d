//! # hijri-time
//!
//! Hijri and Gregorian dates, per-method Hijri calendars, the correspondence
//! dataset, partial-date resolution, and the conversion API.
//!
//! ```
//! use hijri_core::CalendarMethod;
//! use hijri_time::{convert, GregorianDate, HijriComponents};
//!
//! let safar = HijriComponents::month_only(1446, 2).unwrap();
//! let range = convert::to_gregorian(&safar, CalendarMethod::HJCoSA).unwrap();
//! assert_eq!(range.start(), GregorianDate::from_ymd(2024, 8, 7).unwrap());
//! assert_eq!(range.len_days(), 29);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HijriCalendar` trait.
pub mod calendar;

/// Closed-form calendar implementations.
pub mod calendars;

/// `HijriYmd` and `HijriComponents`.
pub mod components;

/// Conversion API over the published dataset.
pub mod convert;

/// Correspondence dataset, sources, snapshots and registry.
pub mod dataset;

/// `Duration`: a signed number of days.
pub mod duration;

/// `GregorianDate` type.
pub mod gregorian;

/// `HijriDate` value type and arithmetic.
pub mod hijri_date;

/// `HijriMonth`: month of the Hijri year.
pub mod hijri_month;

/// Ordinal converter.
pub mod ordinal;

/// `DateRange`: inclusive Gregorian interval.
pub mod range;

/// Partial-date resolution.
pub mod resolver;

/// `Weekday`: day of the week.
pub mod weekday;

/// `chrono::NaiveDate` interop.
#[cfg(feature = "chrono")]
pub mod chrono_interop;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::HijriCalendar;
pub use calendars::{LeapCycle, TabularCalendar};
pub use components::{HijriComponents, HijriYmd};
pub use dataset::{
    CorrespondenceDataset, DatasetRecord, DatasetRegistry, MethodSource, MethodTable,
    MonthAdjustment,
};
pub use duration::Duration;
pub use gregorian::GregorianDate;
pub use hijri_date::HijriDate;
pub use hijri_month::HijriMonth;
pub use ordinal::OrdinalConverter;
pub use range::DateRange;
pub use resolver::{resolve_range, resolve_span};
pub use weekday::Weekday;
