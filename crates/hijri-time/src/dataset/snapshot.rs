//! Flat per-day dataset records.
//!
//! This is the persisted layout exchanged with whatever refreshes the
//! dataset: one record per covered day and method, sorted by ordinal.
//! Ingestion checks the shape of every table before anything is published.

use std::collections::BTreeMap;

use hijri_core::errors::Result;
use hijri_core::{ensure, fail, CalendarMethod, Ordinal};

use crate::dataset::{CorrespondenceDataset, MethodTable, MonthStart};

/// One day of one method's correspondence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatasetRecord {
    /// Day ordinal (0 = 622-07-19).
    pub ordinal: Ordinal,
    /// Hijri year.
    pub hijri_year: u16,
    /// Hijri month (1–12).
    pub hijri_month: u8,
    /// Hijri day (1–30).
    pub hijri_day: u8,
    /// Method the record belongs to.
    pub method: CalendarMethod,
}

impl MethodTable {
    /// Build a table from one method's per-day records, sorted by ordinal.
    ///
    /// # Errors
    /// `DataConsistency` if the records are empty, carry another method
    /// tag, skip or repeat an ordinal, do not start on day 1, or break the
    /// day-by-day progression of Hijri dates.
    pub fn from_records(method: CalendarMethod, records: &[DatasetRecord]) -> Result<Self> {
        let first = match records.first() {
            Some(r) => *r,
            None => fail!(DataConsistency, "no records for {method}"),
        };
        ensure!(
            first.hijri_day == 1,
            DataConsistency,
            "{method} records start mid-month at {}-{:02}-{:02}",
            first.hijri_year,
            first.hijri_month,
            first.hijri_day
        );

        let mut starts = Vec::new();
        let mut prev: Option<DatasetRecord> = None;
        for (i, rec) in records.iter().enumerate() {
            ensure!(
                rec.method == method,
                DataConsistency,
                "record for ordinal {} tagged {} in the {method} table",
                rec.ordinal,
                rec.method
            );
            ensure!(
                rec.ordinal == first.ordinal + i as i64,
                DataConsistency,
                "{method} records not contiguous at ordinal {}",
                rec.ordinal
            );
            if let Some(p) = prev {
                let same_month = rec.hijri_year == p.hijri_year
                    && rec.hijri_month == p.hijri_month
                    && rec.hijri_day == p.hijri_day.saturating_add(1);
                let (ny, nm) = if p.hijri_month == 12 {
                    (p.hijri_year.saturating_add(1), 1)
                } else {
                    (p.hijri_year, p.hijri_month.saturating_add(1))
                };
                let new_month = rec.hijri_day == 1 && rec.hijri_year == ny && rec.hijri_month == nm;
                ensure!(
                    same_month || new_month,
                    DataConsistency,
                    "{method} progression broken at ordinal {}: {}-{:02}-{:02} after {}-{:02}-{:02}",
                    rec.ordinal,
                    rec.hijri_year,
                    rec.hijri_month,
                    rec.hijri_day,
                    p.hijri_year,
                    p.hijri_month,
                    p.hijri_day
                );
            }
            if rec.hijri_day == 1 {
                starts.push(MonthStart {
                    ordinal: rec.ordinal,
                    year: rec.hijri_year,
                    month: rec.hijri_month,
                });
            }
            prev = Some(*rec);
        }
        let end = first.ordinal + records.len() as i64;
        MethodTable::from_month_starts(method, starts, end)
    }
}

impl CorrespondenceDataset {
    /// Build a dataset snapshot from flat records of any number of methods.
    ///
    /// Records are grouped by method and sorted by ordinal; each group must
    /// then form a valid table.
    ///
    /// # Errors
    /// `DataConsistency` if any table fails validation or records are
    /// given for the mathematical method.
    pub fn from_records(records: impl IntoIterator<Item = DatasetRecord>) -> Result<Self> {
        let mut groups: BTreeMap<CalendarMethod, Vec<DatasetRecord>> = BTreeMap::new();
        for rec in records {
            groups.entry(rec.method).or_default().push(rec);
        }
        ensure!(!groups.is_empty(), DataConsistency, "snapshot contains no records");

        let mut tables = Vec::with_capacity(groups.len());
        for (method, mut recs) in groups {
            recs.sort_by_key(|r| r.ordinal);
            tables.push(MethodTable::from_records(method, &recs)?);
        }
        let dataset = CorrespondenceDataset::from_tables(tables)?;
        tracing::info!(
            methods = ?dataset.methods().collect::<Vec<_>>(),
            "dataset snapshot ingested"
        );
        Ok(dataset)
    }
}
