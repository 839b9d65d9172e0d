//! Concrete [`HijriCalendar`](crate::calendar::HijriCalendar)
//! implementations that need no dataset.
//!
//! Table-backed calendars live in [`crate::dataset`].

/// Closed-form 30-year-cycle calendar.
pub mod tabular;

pub use tabular::{LeapCycle, TabularCalendar};
