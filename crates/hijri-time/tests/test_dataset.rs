//! Dataset construction, export and re-ingestion.

use std::sync::Arc;

use hijri_core::{CalendarMethod, Error};
use hijri_time::dataset::source::builtin_sources;
use hijri_time::{
    CorrespondenceDataset, DatasetRecord, GregorianDate, HijriCalendar, HijriComponents,
    HijriYmd, LeapCycle, MethodSource, MethodTable, MonthAdjustment, OrdinalConverter,
    TabularCalendar,
};

fn ymd(y: u16, m: u8, d: u8) -> HijriYmd {
    HijriYmd::new(y, m, d).unwrap()
}

#[test]
fn builtin_sources_cover_declared_years() {
    for source in builtin_sources() {
        let table = source.build().unwrap();
        assert_eq!(table.year_span(), (source.first_year, source.last_year));
        assert_eq!(
            table.to_ordinal(source.anchor_hijri).unwrap(),
            source.anchor_gregorian.to_ordinal(),
            "{} anchor",
            source.method
        );
    }
}

#[test]
fn export_and_reingest_round_trip() {
    let builtin = CorrespondenceDataset::builtin().unwrap();
    let records = builtin.records();
    let uaq_days = builtin.table(CalendarMethod::UmmAlQura).unwrap().len_days();
    assert_eq!(
        records
            .iter()
            .filter(|r| r.method == CalendarMethod::UmmAlQura)
            .count(),
        uaq_days
    );

    let reloaded = CorrespondenceDataset::from_records(records).unwrap();
    for method in [
        CalendarMethod::HJCoSA,
        CalendarMethod::UmmAlQura,
        CalendarMethod::Diyanet,
    ] {
        assert_eq!(
            reloaded.table(method).unwrap(),
            builtin.table(method).unwrap()
        );
    }
}

#[test]
fn snapshot_of_a_few_months() {
    // 1446-01..1446-03 with an observed 29-day Muharram.
    let mut records = Vec::new();
    let mut ordinal = 512_059;
    for (month, len) in [(1u8, 29u8), (2, 30), (3, 30)] {
        for day in 1..=len {
            records.push(DatasetRecord {
                ordinal,
                hijri_year: 1446,
                hijri_month: month,
                hijri_day: day,
                method: CalendarMethod::UmmAlQura,
            });
            ordinal += 1;
        }
    }
    let dataset = CorrespondenceDataset::from_records(records).unwrap();
    let converter = OrdinalConverter::new(Arc::new(dataset));

    assert_eq!(
        converter
            .month_length(1446, 1, CalendarMethod::UmmAlQura)
            .unwrap(),
        29
    );
    let safar = HijriComponents::month_only(1446, 2).unwrap();
    let range = hijri_time::resolve_range(&converter, &safar, CalendarMethod::UmmAlQura).unwrap();
    assert_eq!(range.start(), GregorianDate::from_ymd(2024, 8, 5).unwrap());
    assert_eq!(range.len_days(), 30);

    // Outside the snapshot's months.
    assert!(matches!(
        converter.ymd_to_ordinal(ymd(1446, 4, 1), CalendarMethod::UmmAlQura),
        Err(Error::UnsupportedMethod(_))
    ));
    // A whole year cannot be resolved from three months of data.
    let year = HijriComponents::year_only(1446).unwrap();
    assert!(hijri_time::resolve_span(&converter, &year, CalendarMethod::UmmAlQura).is_err());
    // Methods missing from the snapshot.
    assert!(matches!(
        converter.ordinal_to_hijri(512_060, CalendarMethod::HJCoSA),
        Err(Error::UnsupportedMethod(_))
    ));
    // The mathematical method needs no data.
    assert!(converter
        .ordinal_to_hijri(512_060, CalendarMethod::Mathematical)
        .is_ok());
}

#[test]
fn custom_source_with_adjustments() {
    let source = MethodSource {
        method: CalendarMethod::UmmAlQura,
        anchor_hijri: ymd(1446, 1, 1),
        anchor_gregorian: GregorianDate::from_ymd(2024, 7, 7).unwrap(),
        cycle: LeapCycle::TypeII,
        first_year: 1440,
        last_year: 1450,
        adjustments: Vec::new().into(),
    }
    .with_adjustments(vec![MonthAdjustment {
        year: 1446,
        month: 9,
        shift: 1,
    }]);
    let table = source.build().unwrap();
    // Ramadan starts a day late: Sha'ban gains the day Ramadan loses.
    assert_eq!(table.month_length(1446, 8).unwrap(), 30);
    assert_eq!(table.month_length(1446, 9).unwrap(), 29);
    assert_eq!(table.days_in_year(1446).unwrap(), 354);

    let base = TabularCalendar::anchored(
        CalendarMethod::UmmAlQura,
        LeapCycle::TypeII,
        ymd(1446, 1, 1),
        source.anchor_gregorian.to_ordinal(),
        1440,
        1450,
    );
    assert_eq!(
        table.to_ordinal(ymd(1446, 9, 1)).unwrap(),
        base.to_ordinal(ymd(1446, 9, 1)).unwrap() + 1
    );
}

#[test]
fn duplicate_method_tables_rejected() {
    let table = builtin_sources()[1].build().unwrap();
    let copy: MethodTable = table.clone();
    assert!(matches!(
        CorrespondenceDataset::from_tables([table, copy]),
        Err(Error::DataConsistency(_))
    ));
}
