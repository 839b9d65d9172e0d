//! Tabular (arithmetical) Hijri calendar.
//!
//! Years follow a 30-year cycle containing 11 leap years.  Odd months have
//! 30 days, even months 29, and Dhu al-Hijjah gains a day in leap years.
//! With the cycle anchored at ordinal 0 this is the mathematical method;
//! anchored elsewhere it is the base layer the built-in tables are
//! generated from.

use hijri_core::errors::Result;
use hijri_core::{ensure, CalendarMethod, Ordinal};

use crate::calendar::HijriCalendar;
use crate::components::HijriYmd;

/// Days in a common year.
const COMMON_YEAR_DAYS: i64 = 354;

/// Days in one 30-year cycle (30 * 354 + 11).
const CYCLE_DAYS: i64 = 10_631;

/// Placement of the 11 leap years within the 30-year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeapCycle {
    /// Leap years 2, 5, 7, 10, 13, 15, 18, 21, 24, 26, 29.
    TypeI,
    /// Leap years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29 (the common
    /// "Kuwaiti" arrangement).
    TypeII,
}

impl LeapCycle {
    fn leap_positions(self) -> &'static [u16; 11] {
        match self {
            LeapCycle::TypeI => &[2, 5, 7, 10, 13, 15, 18, 21, 24, 26, 29],
            LeapCycle::TypeII => &[2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29],
        }
    }

    /// `true` if `year` is a leap year of this cycle.
    pub fn is_leap(self, year: u16) -> bool {
        self.leap_positions().contains(&(year % 30))
    }

    /// Number of leap years in `1..year`.
    pub fn leaps_before(self, year: u16) -> i64 {
        let elapsed = i64::from(year.saturating_sub(1));
        let in_cycle = (elapsed % 30) as u16;
        let partial = self
            .leap_positions()
            .iter()
            .filter(|&&p| p <= in_cycle)
            .count() as i64;
        11 * (elapsed / 30) + partial
    }

    /// Days from 1 Muharram of year 1 to 1 Muharram of `year`.
    pub fn days_before_year(self, year: u16) -> i64 {
        COMMON_YEAR_DAYS * i64::from(year.saturating_sub(1)) + self.leaps_before(year)
    }
}

/// Days from the start of the year to the start of `month` (1–12).
pub(crate) fn days_before_month(month: u8) -> i64 {
    let m = i64::from(month);
    29 * (m - 1) + m / 2
}

/// A closed-form Hijri calendar: a leap cycle placed on the ordinal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabularCalendar {
    method: CalendarMethod,
    cycle: LeapCycle,
    /// Ordinal of 1 Muharram of year 1 under this placement.
    epoch: Ordinal,
    first_year: u16,
    last_year: u16,
}

impl TabularCalendar {
    /// The mathematical method: Type II cycle, 1 Muharram 1 AH at ordinal 0,
    /// covering 1–1500 AH.
    pub const MATHEMATICAL: TabularCalendar = TabularCalendar {
        method: CalendarMethod::Mathematical,
        cycle: LeapCycle::TypeII,
        epoch: 0,
        first_year: 1,
        last_year: 1500,
    };

    /// Place `cycle` so that `anchor` falls on `anchor_ordinal`, covering
    /// `first_year..=last_year`.
    pub fn anchored(
        method: CalendarMethod,
        cycle: LeapCycle,
        anchor: HijriYmd,
        anchor_ordinal: Ordinal,
        first_year: u16,
        last_year: u16,
    ) -> Self {
        let epoch = anchor_ordinal
            - cycle.days_before_year(anchor.year())
            - days_before_month(anchor.month())
            - i64::from(anchor.day() - 1);
        TabularCalendar {
            method,
            cycle,
            epoch,
            first_year,
            last_year,
        }
    }

    /// Leap-year arrangement.
    pub fn cycle(&self) -> LeapCycle {
        self.cycle
    }

    /// Ordinal of 1 Muharram 1 AH under this placement (may be negative).
    pub fn epoch(&self) -> Ordinal {
        self.epoch
    }

    /// Ordinal of the first day of `month` in `year`, without coverage
    /// checks.  `month_start(last_year + 1, 1)` is one past the last
    /// covered day.
    pub fn month_start(&self, year: u16, month: u8) -> Ordinal {
        self.epoch + self.cycle.days_before_year(year) + days_before_month(month)
    }

    fn raw_month_length(&self, year: u16, month: u8) -> u8 {
        if month % 2 == 1 || (month == 12 && self.cycle.is_leap(year)) {
            30
        } else {
            29
        }
    }
}

impl HijriCalendar for TabularCalendar {
    fn method(&self) -> CalendarMethod {
        self.method
    }

    fn year_span(&self) -> (u16, u16) {
        (self.first_year, self.last_year)
    }

    fn ordinal_span(&self) -> (Ordinal, Ordinal) {
        (
            self.month_start(self.first_year, 1),
            self.month_start(self.last_year + 1, 1) - 1,
        )
    }

    fn month_length(&self, year: u16, month: u8) -> Result<u8> {
        self.check_year(year)?;
        ensure!(
            (1..=12).contains(&month),
            OutOfRange,
            "Hijri month {month} out of range [1, 12]"
        );
        Ok(self.raw_month_length(year, month))
    }

    fn days_in_year(&self, year: u16) -> Result<u16> {
        self.check_year(year)?;
        Ok(if self.cycle.is_leap(year) { 355 } else { 354 })
    }

    fn is_leap_year(&self, year: u16) -> Result<bool> {
        self.check_year(year)?;
        Ok(self.cycle.is_leap(year))
    }

    fn to_ordinal(&self, date: HijriYmd) -> Result<Ordinal> {
        let len = self.month_length(date.year(), date.month())?;
        ensure!(
            date.day() <= len,
            OutOfRange,
            "day {} out of range [1, {len}] for {:04}-{:02} ({})",
            date.day(),
            date.year(),
            date.month(),
            self.method
        );
        Ok(self.month_start(date.year(), date.month()) + i64::from(date.day() - 1))
    }

    fn from_ordinal(&self, ordinal: Ordinal) -> Result<HijriYmd> {
        self.check_ordinal(ordinal)?;
        let days = ordinal - self.epoch;
        let mut year = ((30 * days) / CYCLE_DAYS + 1).clamp(1, i64::from(u16::MAX) - 1) as u16;
        while self.cycle.days_before_year(year + 1) <= days {
            year += 1;
        }
        while year > 1 && self.cycle.days_before_year(year) > days {
            year -= 1;
        }
        let day_of_year = days - self.cycle.days_before_year(year);
        let month = (1..=12u8)
            .rev()
            .find(|&m| days_before_month(m) <= day_of_year)
            .unwrap_or(1);
        let day = (day_of_year - days_before_month(month) + 1) as u8;
        Ok(HijriYmd::new_unchecked(year, month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hijri_core::Error;

    fn ymd(y: u16, m: u8, d: u8) -> HijriYmd {
        HijriYmd::new(y, m, d).unwrap()
    }

    #[test]
    fn cycle_has_eleven_leap_years() {
        for cycle in [LeapCycle::TypeI, LeapCycle::TypeII] {
            assert_eq!((1..=30).filter(|&y| cycle.is_leap(y)).count(), 11);
            assert_eq!(cycle.days_before_year(31), CYCLE_DAYS);
        }
        assert!(LeapCycle::TypeI.is_leap(15) && !LeapCycle::TypeI.is_leap(16));
        assert!(LeapCycle::TypeII.is_leap(16) && !LeapCycle::TypeII.is_leap(15));
    }

    #[test]
    fn month_lengths_alternate() {
        let cal = TabularCalendar::MATHEMATICAL;
        assert_eq!(cal.month_length(1446, 1).unwrap(), 30);
        assert_eq!(cal.month_length(1446, 2).unwrap(), 29);
        assert_eq!(cal.month_length(1446, 12).unwrap(), 29);
        assert_eq!(cal.month_length(1445, 12).unwrap(), 30);
        assert_eq!(cal.days_in_year(1445).unwrap(), 355);
        assert_eq!(cal.days_in_year(1446).unwrap(), 354);
        assert!(!cal.is_leap_year(1500).unwrap());
    }

    #[test]
    fn known_ordinals() {
        let cal = TabularCalendar::MATHEMATICAL;
        assert_eq!(cal.to_ordinal(ymd(1, 1, 1)).unwrap(), 0);
        assert_eq!(cal.to_ordinal(ymd(1356, 1, 1)).unwrap(), 480_167);
        assert_eq!(cal.to_ordinal(ymd(1446, 1, 1)).unwrap(), 512_060);
        assert_eq!(cal.to_ordinal(ymd(1446, 2, 1)).unwrap(), 512_090);
        assert_eq!(cal.ordinal_span(), (0, 531_549));
        assert_eq!(cal.from_ordinal(531_549).unwrap(), ymd(1500, 12, 29));
    }

    #[test]
    fn roundtrip_every_day_of_a_cycle() {
        let cal = TabularCalendar::MATHEMATICAL;
        let start = cal.to_ordinal(ymd(1441, 1, 1)).unwrap();
        for o in start..start + CYCLE_DAYS {
            let h = cal.from_ordinal(o).unwrap();
            assert_eq!(cal.to_ordinal(h).unwrap(), o);
        }
    }

    #[test]
    fn errors() {
        let cal = TabularCalendar::MATHEMATICAL;
        assert!(matches!(cal.to_ordinal(ymd(1446, 2, 30)), Err(Error::OutOfRange(_))));
        assert!(matches!(cal.month_length(1501, 1), Err(Error::OutOfRange(_))));
        assert!(matches!(cal.month_length(1446, 13), Err(Error::OutOfRange(_))));
        assert!(matches!(cal.from_ordinal(-1), Err(Error::OutOfRange(_))));
        assert!(matches!(cal.from_ordinal(531_550), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn anchored_placement() {
        let cal = TabularCalendar::anchored(
            CalendarMethod::UmmAlQura,
            LeapCycle::TypeII,
            ymd(1446, 1, 1),
            512_059,
            1300,
            1500,
        );
        assert_eq!(cal.epoch(), -1);
        assert_eq!(cal.ordinal_span(), (460_321, 531_548));
        assert!(matches!(cal.month_length(1299, 1), Err(Error::UnsupportedMethod(_))));
        assert!(matches!(cal.from_ordinal(531_549), Err(Error::UnsupportedMethod(_))));
    }
}
