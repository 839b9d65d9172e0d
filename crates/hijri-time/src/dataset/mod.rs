//! Correspondence dataset: per-method tables pairing ordinals with Hijri
//! dates.
//!
//! A [`MethodTable`] stores one breakpoint per Hijri month (the ordinal of
//! its first day).  Because months are contiguous the breakpoints are
//! sorted both by ordinal and by `(year, month)`, so the same vector serves
//! forward lookup (ordinal → Hijri) and reverse lookup (Hijri → ordinal),
//! each by binary search.

use std::collections::BTreeMap;
use std::sync::Arc;

use hijri_core::errors::{Error, Result};
use hijri_core::{ensure, fail, CalendarMethod, Ordinal};

use crate::calendar::HijriCalendar;
use crate::calendars::TabularCalendar;
use crate::components::{HijriYmd, MAX_YEAR, MIN_YEAR};
use crate::gregorian::{MAX_ORDINAL, MIN_ORDINAL};

/// Process-wide dataset registry.
pub mod registry;

/// Flat per-day records and snapshot ingestion.
pub mod snapshot;

/// Built-in per-method sources.
pub mod source;

pub use registry::DatasetRegistry;
pub use snapshot::DatasetRecord;
pub use source::{MethodSource, MonthAdjustment};

// ── MonthStart ────────────────────────────────────────────────────────────────

/// First day of a Hijri month under some method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthStart {
    /// Ordinal of day 1.
    pub ordinal: Ordinal,
    /// Hijri year.
    pub year: u16,
    /// Hijri month (1–12).
    pub month: u8,
}

impl MonthStart {
    fn key(&self) -> (u16, u8) {
        (self.year, self.month)
    }
}

fn next_month(year: u16, month: u8) -> (u16, u8) {
    if month == 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    }
}

// ── MethodTable ───────────────────────────────────────────────────────────────

/// Month-start table for one table-backed method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTable {
    method: CalendarMethod,
    starts: Vec<MonthStart>,
    /// One past the last covered ordinal.
    end: Ordinal,
}

impl MethodTable {
    /// Build a table from month starts in chronological order.
    ///
    /// `end` is the ordinal one past the last day of the last month.
    ///
    /// # Errors
    /// [`Error::DataConsistency`] unless
    /// * the method is table-backed,
    /// * the months are consecutive and within 1–1500 AH,
    /// * every month has 29 or 30 days,
    /// * the covered ordinals lie inside the supported span.
    pub fn from_month_starts(
        method: CalendarMethod,
        starts: Vec<MonthStart>,
        end: Ordinal,
    ) -> Result<Self> {
        ensure!(
            method.is_table_backed(),
            DataConsistency,
            "{method} is computed, not table-backed"
        );
        let (first, last) = match (starts.first(), starts.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => fail!(DataConsistency, "{method} table is empty"),
        };
        ensure!(
            first.ordinal >= MIN_ORDINAL && end - 1 <= MAX_ORDINAL,
            DataConsistency,
            "{method} table spans ordinals {}..{end}, outside [{MIN_ORDINAL}, {MAX_ORDINAL}]",
            first.ordinal
        );
        ensure!(
            first.year >= MIN_YEAR && last.year <= MAX_YEAR,
            DataConsistency,
            "{method} table spans years {}-{}, outside [{MIN_YEAR}, {MAX_YEAR}]",
            first.year,
            last.year
        );
        ensure!(
            (1..=12).contains(&first.month),
            DataConsistency,
            "{method} table starts at invalid month {}",
            first.month
        );
        for pair in starts.windows(2) {
            let (prev, cur) = (pair[0], pair[1]);
            ensure!(
                cur.key() == next_month(prev.year, prev.month),
                DataConsistency,
                "{method} table jumps from {}-{:02} to {}-{:02}",
                prev.year,
                prev.month,
                cur.year,
                cur.month
            );
            check_length(method, prev, cur.ordinal - prev.ordinal)?;
        }
        check_length(method, last, end - last.ordinal)?;
        tracing::debug!(
            %method,
            months = starts.len(),
            first = first.ordinal,
            last = end - 1,
            "validated method table"
        );
        Ok(MethodTable { method, starts, end })
    }

    /// Method this table belongs to.
    pub fn method(&self) -> CalendarMethod {
        self.method
    }

    /// Month breakpoints in chronological order.
    pub fn month_starts(&self) -> &[MonthStart] {
        &self.starts
    }

    /// Number of covered days.
    pub fn len_days(&self) -> usize {
        (self.end - self.first_ordinal()) as usize
    }

    fn first_ordinal(&self) -> Ordinal {
        // non-empty by construction
        self.starts.first().map_or(self.end, |s| s.ordinal)
    }

    fn month_index(&self, year: u16, month: u8) -> Result<usize> {
        self.check_year(year)?;
        ensure!(
            (1..=12).contains(&month),
            OutOfRange,
            "Hijri month {month} out of range [1, 12]"
        );
        self.starts
            .binary_search_by_key(&(year, month), MonthStart::key)
            .map_err(|_| {
                Error::UnsupportedMethod(format!(
                    "{} has no data for {year}-{month:02}",
                    self.method
                ))
            })
    }

    fn length_at(&self, idx: usize) -> u8 {
        let next = self.starts.get(idx + 1).map_or(self.end, |s| s.ordinal);
        (next - self.starts[idx].ordinal) as u8
    }

    /// Hijri date of `ordinal`, by binary search over the breakpoints.
    pub fn lookup(&self, ordinal: Ordinal) -> Result<HijriYmd> {
        self.check_ordinal(ordinal)?;
        let idx = self.starts.partition_point(|s| s.ordinal <= ordinal) - 1;
        let start = self.starts[idx];
        let day = (ordinal - start.ordinal + 1) as u8;
        Ok(HijriYmd::new_unchecked(start.year, start.month, day))
    }

    /// Ordinal of a full Hijri date, by binary search over `(year, month)`.
    pub fn lookup_reverse(&self, date: HijriYmd) -> Result<Ordinal> {
        let idx = self.month_index(date.year(), date.month())?;
        let len = self.length_at(idx);
        ensure!(
            date.day() <= len,
            OutOfRange,
            "day {} out of range [1, {len}] for {:04}-{:02} ({})",
            date.day(),
            date.year(),
            date.month(),
            self.method
        );
        Ok(self.starts[idx].ordinal + i64::from(date.day() - 1))
    }

    /// Export the table as flat per-day records, sorted by ordinal.
    pub fn records(&self) -> Vec<DatasetRecord> {
        let mut out = Vec::with_capacity(self.len_days());
        for (idx, start) in self.starts.iter().enumerate() {
            for day in 1..=self.length_at(idx) {
                out.push(DatasetRecord {
                    ordinal: start.ordinal + i64::from(day - 1),
                    hijri_year: start.year,
                    hijri_month: start.month,
                    hijri_day: day,
                    method: self.method,
                });
            }
        }
        out
    }
}

fn check_length(method: CalendarMethod, start: MonthStart, len: i64) -> Result<()> {
    ensure!(
        (29..=30).contains(&len),
        DataConsistency,
        "{method} month {}-{:02} has {len} days",
        start.year,
        start.month
    );
    Ok(())
}

impl HijriCalendar for MethodTable {
    fn method(&self) -> CalendarMethod {
        self.method
    }

    fn year_span(&self) -> (u16, u16) {
        let first = self.starts.first().map_or(0, |s| s.year);
        let last = self.starts.last().map_or(0, |s| s.year);
        (first, last)
    }

    fn ordinal_span(&self) -> (Ordinal, Ordinal) {
        (self.first_ordinal(), self.end - 1)
    }

    fn month_length(&self, year: u16, month: u8) -> Result<u8> {
        let idx = self.month_index(year, month)?;
        Ok(self.length_at(idx))
    }

    fn to_ordinal(&self, date: HijriYmd) -> Result<Ordinal> {
        self.lookup_reverse(date)
    }

    fn from_ordinal(&self, ordinal: Ordinal) -> Result<HijriYmd> {
        self.lookup(ordinal)
    }
}

// ── CorrespondenceDataset ─────────────────────────────────────────────────────

/// The full set of method tables, published and shared as one unit.
///
/// The mathematical method is closed form and never stored here.
#[derive(Debug, Clone, Default)]
pub struct CorrespondenceDataset {
    tables: BTreeMap<CalendarMethod, Arc<MethodTable>>,
}

impl CorrespondenceDataset {
    /// Build the dataset from the built-in method sources.
    pub fn builtin() -> Result<Self> {
        let tables = source::builtin_sources()
            .iter()
            .map(MethodSource::build)
            .collect::<Result<Vec<_>>>()?;
        let dataset = Self::from_tables(tables)?;
        tracing::info!(methods = dataset.tables.len(), "built-in dataset built");
        Ok(dataset)
    }

    /// Assemble a dataset from validated tables.
    ///
    /// # Errors
    /// [`Error::DataConsistency`] if two tables share a method.
    pub fn from_tables(tables: impl IntoIterator<Item = MethodTable>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for table in tables {
            let method = table.method();
            ensure!(
                map.insert(method, Arc::new(table)).is_none(),
                DataConsistency,
                "duplicate table for {method}"
            );
        }
        Ok(CorrespondenceDataset { tables: map })
    }

    /// Methods with a stored table.
    pub fn methods(&self) -> impl Iterator<Item = CalendarMethod> + '_ {
        self.tables.keys().copied()
    }

    /// Table for a table-backed method.
    ///
    /// # Errors
    /// [`Error::UnsupportedMethod`] if the dataset has no table for it.
    pub fn table(&self, method: CalendarMethod) -> Result<&MethodTable> {
        self.tables
            .get(&method)
            .map(|t| t.as_ref())
            .ok_or_else(|| Error::UnsupportedMethod(format!("no dataset table for {method}")))
    }

    /// The calendar implementing `method`: the closed form for the
    /// mathematical method, otherwise the stored table.
    pub fn calendar(&self, method: CalendarMethod) -> Result<&dyn HijriCalendar> {
        if method == CalendarMethod::Mathematical {
            const MATHEMATICAL: &TabularCalendar = &TabularCalendar::MATHEMATICAL;
            return Ok(MATHEMATICAL);
        }
        let table: &dyn HijriCalendar = self.table(method)?;
        Ok(table)
    }

    /// Hijri date of `ordinal` under `method`.
    pub fn lookup(&self, ordinal: Ordinal, method: CalendarMethod) -> Result<HijriYmd> {
        self.calendar(method)?.from_ordinal(ordinal)
    }

    /// Ordinal of `date` under `method`.
    pub fn lookup_reverse(&self, date: HijriYmd, method: CalendarMethod) -> Result<Ordinal> {
        self.calendar(method)?.to_ordinal(date)
    }

    /// All stored tables exported as per-day records.
    pub fn records(&self) -> Vec<DatasetRecord> {
        self.tables.values().flat_map(|t| t.records()).collect()
    }
}
