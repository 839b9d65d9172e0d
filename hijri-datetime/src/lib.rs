//! # hijri-datetime
//!
//! Conversion between the Hijri and Gregorian calendars, partial Hijri
//! dates (a whole year or month) and day arithmetic on a shared ordinal
//! line.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than on
//! `hijri-core` and `hijri-time` directly.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! hijri-datetime = "0.1"
//! ```
//!
//! ```rust
//! use hijri_datetime::prelude::*;
//!
//! // 1 Muharram 1356 AH fell on 14 March 1937.
//! let day = HijriComponents::full(1356, 1, 1).unwrap();
//! let range = convert::to_gregorian(&day, CalendarMethod::HJCoSA).unwrap();
//! assert_eq!(range.start().to_string(), "1937-03-14");
//!
//! // Ramadan 1446 as a Gregorian interval.
//! let ramadan = HijriDate::new(
//!     HijriComponents::month_only(1446, 9).unwrap(),
//!     CalendarMethod::HJCoSA,
//! );
//! assert_eq!(ramadan.range().unwrap().len_days(), 30);
//!
//! // Day arithmetic crosses month boundaries in ordinal space.
//! let eid = ramadan.add(Duration::days(30)).unwrap();
//! assert_eq!(eid.to_string(), "1446-10-01 AH");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, settings, and error definitions.
pub use hijri_core as core;

/// Dates, calendars, dataset, and the conversion API.
pub use hijri_time as time;

/// The items most programs need.
pub mod prelude {
    pub use hijri_core::{CalendarMethod, Error, Result, ScopedDefaultMethod, Settings};
    pub use hijri_time::convert;
    pub use hijri_time::{
        DateRange, Duration, GregorianDate, HijriComponents, HijriDate, HijriMonth, HijriYmd,
        Weekday,
    };
}
