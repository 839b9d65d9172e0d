//! Built-in method sources.
//!
//! Each table-backed method is described by an anchor (a Hijri date and the
//! Gregorian date it fell on), a leap-cycle arrangement, the covered years,
//! and a list of month-boundary adjustments recording where the method's
//! observed month starts deviate from the anchored cycle.  Building a source
//! yields a validated [`MethodTable`].
//!
//! The built-in sources carry no adjustments.  The built-in HJCoSA table is
//! therefore identical to the closed-form `Mathematical` calendar, and the
//! UmmAlQura and Diyanet tables are the tabular cycle shifted to their own
//! anchors.  Results differ from observed month starts until a snapshot of
//! those is published with `DatasetRegistry::refresh_from_records`.

use std::borrow::Cow;

use hijri_core::errors::Result;
use hijri_core::{ensure, CalendarMethod};

use crate::calendars::{LeapCycle, TabularCalendar};
use crate::components::{HijriYmd, MAX_YEAR, MIN_YEAR};
use crate::dataset::{MethodTable, MonthStart};
use crate::gregorian::GregorianDate;

/// Shift of one month's first day relative to the anchored cycle.
///
/// A positive shift moves the start later: the previous month gains days
/// and this month loses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthAdjustment {
    /// Hijri year.
    pub year: u16,
    /// Hijri month (1–12).
    pub month: u8,
    /// Days added to the cycle's start ordinal.
    pub shift: i8,
}

/// Recipe for one method's correspondence table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSource {
    /// Method the table belongs to.
    pub method: CalendarMethod,
    /// Hijri side of the alignment anchor.
    pub anchor_hijri: HijriYmd,
    /// Gregorian side of the alignment anchor.
    pub anchor_gregorian: GregorianDate,
    /// Leap-year arrangement of the base cycle.
    pub cycle: LeapCycle,
    /// First covered Hijri year.
    pub first_year: u16,
    /// Last covered Hijri year.
    pub last_year: u16,
    /// Month-boundary deviations from the base cycle.
    pub adjustments: Cow<'static, [MonthAdjustment]>,
}

/// Verified alignment: 1 Muharram 1356 AH = 14 March 1937.
const HJCOSA: MethodSource = MethodSource {
    method: CalendarMethod::HJCoSA,
    anchor_hijri: HijriYmd::new_unchecked(1356, 1, 1),
    anchor_gregorian: GregorianDate::new_unchecked(1937, 3, 14),
    cycle: LeapCycle::TypeII,
    first_year: 1,
    last_year: 1500,
    adjustments: Cow::Borrowed(&[]),
};

/// Umm al-Qura: 1 Muharram 1446 AH = 7 July 2024.
const UMM_AL_QURA: MethodSource = MethodSource {
    method: CalendarMethod::UmmAlQura,
    anchor_hijri: HijriYmd::new_unchecked(1446, 1, 1),
    anchor_gregorian: GregorianDate::new_unchecked(2024, 7, 7),
    cycle: LeapCycle::TypeII,
    first_year: 1300,
    last_year: 1500,
    adjustments: Cow::Borrowed(&[]),
};

/// Diyanet: 1 Muharram 1446 AH = 7 July 2024.
const DIYANET: MethodSource = MethodSource {
    method: CalendarMethod::Diyanet,
    anchor_hijri: HijriYmd::new_unchecked(1446, 1, 1),
    anchor_gregorian: GregorianDate::new_unchecked(2024, 7, 7),
    cycle: LeapCycle::TypeI,
    first_year: 1318,
    last_year: 1500,
    adjustments: Cow::Borrowed(&[]),
};

/// Sources of the built-in dataset, one per table-backed method.
pub fn builtin_sources() -> [MethodSource; 3] {
    [HJCOSA, UMM_AL_QURA, DIYANET]
}

impl MethodSource {
    /// Replace the adjustment list.
    pub fn with_adjustments(mut self, adjustments: Vec<MonthAdjustment>) -> Self {
        self.adjustments = Cow::Owned(adjustments);
        self
    }

    /// Generate and validate the month-start table.
    ///
    /// # Errors
    /// `DataConsistency` for a year span outside 1–1500, an adjustment
    /// outside the covered months, or any table that fails
    /// [`MethodTable::from_month_starts`].
    pub fn build(&self) -> Result<MethodTable> {
        let method = self.method;
        ensure!(
            MIN_YEAR <= self.first_year
                && self.first_year <= self.last_year
                && self.last_year <= MAX_YEAR,
            DataConsistency,
            "{method} source covers years {}-{}, outside [{MIN_YEAR}, {MAX_YEAR}]",
            self.first_year,
            self.last_year
        );
        let base = TabularCalendar::anchored(
            method,
            self.cycle,
            self.anchor_hijri,
            self.anchor_gregorian.to_ordinal(),
            self.first_year,
            self.last_year,
        );

        let mut starts = Vec::with_capacity(usize::from(self.last_year - self.first_year + 1) * 12);
        for year in self.first_year..=self.last_year {
            for month in 1..=12u8 {
                starts.push(MonthStart {
                    ordinal: base.month_start(year, month),
                    year,
                    month,
                });
            }
        }
        for adj in self.adjustments.iter() {
            ensure!(
                adj.year >= self.first_year && adj.year <= self.last_year,
                DataConsistency,
                "{method} adjustment for {}-{:02} outside covered years",
                adj.year,
                adj.month
            );
            ensure!(
                (1..=12).contains(&adj.month),
                DataConsistency,
                "{method} adjustment for invalid month {}",
                adj.month
            );
            let idx = usize::from(adj.year - self.first_year) * 12 + usize::from(adj.month - 1);
            starts[idx].ordinal += i64::from(adj.shift);
        }
        let end = base.month_start(self.last_year + 1, 1);

        tracing::debug!(
            %method,
            adjustments = self.adjustments.len(),
            epoch = base.epoch(),
            "generating method table"
        );
        MethodTable::from_month_starts(method, starts, end)
    }
}
