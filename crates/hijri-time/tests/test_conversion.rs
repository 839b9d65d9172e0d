//! Conversion scenarios against the built-in dataset.

use std::cmp::Ordering;

use hijri_core::{CalendarMethod, Error};
use hijri_time::convert;
use hijri_time::{Duration, GregorianDate, HijriComponents, HijriDate, HijriYmd, Weekday};

fn g(y: u16, m: u8, d: u8) -> GregorianDate {
    GregorianDate::from_ymd(y, m, d).unwrap()
}

fn full(y: u16, m: u8, d: u8) -> HijriComponents {
    HijriComponents::full(y, m, d).unwrap()
}

// ─── Anchors and boundaries ───────────────────────────────────────────────────

#[test]
fn anchor_fidelity() {
    let r = convert::to_gregorian(&full(1356, 1, 1), CalendarMethod::HJCoSA).unwrap();
    assert_eq!(r.start(), g(1937, 3, 14));
    assert_eq!(r.end(), g(1937, 3, 14));
}

#[test]
fn first_day_of_the_era() {
    let r = convert::to_gregorian(&full(1, 1, 1), CalendarMethod::HJCoSA).unwrap();
    assert_eq!(r.start(), g(622, 7, 19));
    assert_eq!(r.start().weekday(), Weekday::Friday);
    assert_eq!(
        convert::to_hijri(g(622, 7, 19), CalendarMethod::Mathematical).unwrap(),
        HijriYmd::new(1, 1, 1).unwrap()
    );
}

#[test]
fn beyond_year_1500_is_out_of_range() {
    assert!(matches!(
        HijriComponents::full(1501, 1, 1),
        Err(Error::OutOfRange(_))
    ));
    assert!(matches!(
        "1501-01-01".parse::<HijriComponents>(),
        Err(Error::OutOfRange(_))
    ));
    assert!(matches!(
        GregorianDate::from_ymd(2077, 11, 17),
        Err(Error::OutOfRange(_))
    ));
    assert!(matches!(
        GregorianDate::from_ymd(622, 7, 18),
        Err(Error::OutOfRange(_))
    ));
}

#[test]
fn last_supported_day() {
    assert_eq!(
        convert::to_hijri(GregorianDate::MAX, CalendarMethod::HJCoSA).unwrap(),
        HijriYmd::new(1500, 12, 29).unwrap()
    );
    // The supported span runs to the end of 1500 AH, past 2077-09-30.
    assert_eq!(
        convert::to_hijri(g(2077, 10, 1), CalendarMethod::HJCoSA).unwrap(),
        HijriYmd::new(1500, 11, 13).unwrap()
    );
    let last_year = HijriComponents::year_only(1500).unwrap();
    assert_eq!(
        convert::to_gregorian(&last_year, CalendarMethod::HJCoSA)
            .unwrap()
            .end(),
        GregorianDate::MAX
    );
    // Tables anchored a day earlier end a day earlier.
    assert!(matches!(
        convert::to_hijri(GregorianDate::MAX, CalendarMethod::UmmAlQura),
        Err(Error::UnsupportedMethod(_))
    ));
}

// ─── Partial dates ────────────────────────────────────────────────────────────

#[test]
fn month_only_scenario() {
    let safar = HijriComponents::month_only(1446, 2).unwrap();
    let r = convert::to_gregorian(&safar, CalendarMethod::HJCoSA).unwrap();
    assert!((29..=30).contains(&r.len_days()));
    assert_eq!(
        convert::to_hijri(r.start(), CalendarMethod::HJCoSA).unwrap(),
        HijriYmd::new(1446, 2, 1).unwrap()
    );
    assert_eq!(r.start(), g(2024, 8, 7));
    assert_eq!(r.end(), g(2024, 9, 4));
}

#[test]
fn year_versus_first_day_comparison() {
    let year = HijriDate::new(
        HijriComponents::year_only(1446).unwrap(),
        CalendarMethod::HJCoSA,
    );
    let first = HijriDate::new(full(1446, 1, 1), CalendarMethod::HJCoSA);
    assert_eq!(year.compare_start(&first).unwrap(), Ordering::Equal);
    assert!(matches!(
        year.try_eq(&first),
        Err(Error::AmbiguousComparison(_))
    ));
}

#[test]
fn day_beyond_month_length() {
    // Safar 1446 has 29 days under the tabular rule.
    assert!(matches!(
        convert::to_gregorian(&full(1446, 2, 30), CalendarMethod::HJCoSA),
        Err(Error::OutOfRange(_))
    ));
    assert!(convert::to_gregorian(&full(1446, 1, 30), CalendarMethod::HJCoSA).is_ok());
}

#[test]
fn day_without_month() {
    assert!(matches!(
        HijriComponents::new(1446, None, Some(3)),
        Err(Error::IncompleteDate(_))
    ));
}

// ─── Methods ──────────────────────────────────────────────────────────────────

#[test]
fn methods_disagree_by_a_day() {
    let day = g(2024, 7, 7);
    assert_eq!(
        convert::to_hijri(day, CalendarMethod::HJCoSA).unwrap(),
        HijriYmd::new(1445, 12, 30).unwrap()
    );
    assert_eq!(
        convert::to_hijri(day, CalendarMethod::UmmAlQura).unwrap(),
        HijriYmd::new(1446, 1, 1).unwrap()
    );
    assert_eq!(
        convert::to_hijri(day, CalendarMethod::Diyanet).unwrap(),
        HijriYmd::new(1446, 1, 1).unwrap()
    );
}

#[test]
fn coverage_is_per_method() {
    let early = g(1800, 1, 1);
    assert!(convert::to_hijri(early, CalendarMethod::HJCoSA).is_ok());
    for method in [CalendarMethod::UmmAlQura, CalendarMethod::Diyanet] {
        let err = convert::to_hijri(early, method).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(_)), "{method}: {err}");
    }
    let err = convert::month_length(1310, 1, CalendarMethod::Diyanet).unwrap_err();
    assert!(err.is_input_error());
}

#[test]
fn year_lengths_follow_cycle() {
    for method in CalendarMethod::ALL {
        let total: u32 = (1441..=1470)
            .map(|y| u32::from(convert::days_in_year(y, method).unwrap()))
            .sum();
        assert_eq!(total, 10_631, "{method}");
    }
}

// ─── Arithmetic through the API ───────────────────────────────────────────────

#[test]
fn ramadan_length_and_eid() {
    let ramadan = HijriDate::new(full(1446, 9, 1), CalendarMethod::HJCoSA);
    let len = convert::month_length(1446, 9, CalendarMethod::HJCoSA).unwrap();
    let eid = ramadan.add(Duration::days(i64::from(len))).unwrap();
    assert_eq!(eid.components(), full(1446, 10, 1));
    assert_eq!(eid.month_name(), Some("Shawwal"));
    assert_eq!(convert::difference(&eid, &ramadan).unwrap(), i64::from(len));
}

#[test]
fn parsing_inputs() {
    let g1: GregorianDate = "2024-08-07".parse().unwrap();
    let g2: GregorianDate = "07-08-2024".parse().unwrap();
    let g3: GregorianDate = "07/08/2024".parse().unwrap();
    assert_eq!(g1, g2);
    assert_eq!(g2, g3);
    let h: HijriComponents = "1446-02 AH".parse().unwrap();
    assert_eq!(
        convert::to_gregorian(&h, CalendarMethod::HJCoSA).unwrap().start(),
        g1
    );
    assert!(matches!("2024/13/01".parse::<GregorianDate>(), Err(Error::Parse(_))));
}
