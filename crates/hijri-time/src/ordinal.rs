//! Ordinal converter: both calendars onto one linear day count.
//!
//! Gregorian dates map to ordinals arithmetically; Hijri dates go through
//! the calendar for the requested method, taken from a single dataset
//! snapshot held by the converter.

use std::sync::Arc;

use hijri_core::errors::Result;
use hijri_core::{CalendarMethod, Ordinal};

use crate::calendar::HijriCalendar;
use crate::components::{HijriComponents, HijriYmd};
use crate::dataset::{CorrespondenceDataset, DatasetRegistry};
use crate::gregorian::GregorianDate;

/// Converts between Gregorian dates, Hijri dates and ordinals.
///
/// Cheap to clone; all clones share one dataset snapshot.
#[derive(Debug, Clone)]
pub struct OrdinalConverter {
    dataset: Arc<CorrespondenceDataset>,
}

impl OrdinalConverter {
    /// A converter over a specific dataset snapshot.
    pub fn new(dataset: Arc<CorrespondenceDataset>) -> Self {
        OrdinalConverter { dataset }
    }

    /// A converter over the globally published dataset.
    pub fn current() -> Result<Self> {
        Ok(Self::new(DatasetRegistry::global().current()?))
    }

    /// The dataset snapshot in use.
    pub fn dataset(&self) -> &CorrespondenceDataset {
        &self.dataset
    }

    /// Calendar implementing `method`.
    pub fn calendar(&self, method: CalendarMethod) -> Result<&dyn HijriCalendar> {
        self.dataset.calendar(method)
    }

    /// Ordinal of a Gregorian date.  Total over the supported range.
    pub fn to_ordinal(date: GregorianDate) -> Ordinal {
        date.to_ordinal()
    }

    /// Gregorian date of an ordinal.
    pub fn ordinal_to_gregorian(ordinal: Ordinal) -> Result<GregorianDate> {
        GregorianDate::from_ordinal(ordinal)
    }

    /// Ordinal of a full Hijri date.
    ///
    /// # Errors
    /// `IncompleteDate` for partial components; partial dates go through
    /// [`resolve_span`](crate::resolver::resolve_span) instead.
    pub fn hijri_to_ordinal(&self, h: &HijriComponents, method: CalendarMethod) -> Result<Ordinal> {
        self.ymd_to_ordinal(h.as_full()?, method)
    }

    /// Ordinal of a full Hijri date given as [`HijriYmd`].
    pub fn ymd_to_ordinal(&self, date: HijriYmd, method: CalendarMethod) -> Result<Ordinal> {
        self.calendar(method)?.to_ordinal(date)
    }

    /// Hijri date of an ordinal under `method`.
    pub fn ordinal_to_hijri(&self, ordinal: Ordinal, method: CalendarMethod) -> Result<HijriYmd> {
        self.calendar(method)?.from_ordinal(ordinal)
    }

    /// Hijri date of a Gregorian date under `method`.
    pub fn gregorian_to_hijri(
        &self,
        date: GregorianDate,
        method: CalendarMethod,
    ) -> Result<HijriYmd> {
        self.ordinal_to_hijri(date.to_ordinal(), method)
    }

    /// Gregorian date of a full Hijri date under `method`.
    pub fn hijri_to_gregorian(&self, date: HijriYmd, method: CalendarMethod) -> Result<GregorianDate> {
        GregorianDate::from_ordinal(self.ymd_to_ordinal(date, method)?)
    }

    /// Days in `month` of `year` under `method`.
    pub fn month_length(&self, year: u16, month: u8, method: CalendarMethod) -> Result<u8> {
        self.calendar(method)?.month_length(year, month)
    }

    /// Days in `year` under `method`.
    pub fn days_in_year(&self, year: u16, method: CalendarMethod) -> Result<u16> {
        self.calendar(method)?.days_in_year(year)
    }

    /// `true` if `year` has 355 days under `method`.
    pub fn is_leap_year(&self, year: u16, method: CalendarMethod) -> Result<bool> {
        self.calendar(method)?.is_leap_year(year)
    }
}
