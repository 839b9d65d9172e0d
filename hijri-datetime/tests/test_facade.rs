//! Text round trips through the façade's public types.

use proptest::prelude::*;

use hijri_datetime::prelude::*;

proptest! {
    #[test]
    fn gregorian_display_parses_back(o in 0i64..=531_549) {
        let date = GregorianDate::from_ordinal(o).unwrap();
        prop_assert_eq!(date.to_string().parse::<GregorianDate>().unwrap(), date);
    }

    #[test]
    fn hijri_display_parses_back(y in 1u16..=1500, m in 1u8..=12, d in 1u8..=30, precision in 0u8..3) {
        let components = match precision {
            0 => HijriComponents::year_only(y),
            1 => HijriComponents::month_only(y, m),
            _ => HijriComponents::full(y, m, d),
        }
        .unwrap();
        prop_assert_eq!(components.to_string().parse::<HijriComponents>().unwrap(), components);
        let tagged = format!("{components} AH");
        prop_assert_eq!(tagged.parse::<HijriComponents>().unwrap(), components);
    }
}

#[test]
fn method_codes_parse_back() {
    for method in CalendarMethod::ALL {
        assert_eq!(method.code().parse::<CalendarMethod>().unwrap(), method);
    }
    assert!(matches!("lunar".parse::<CalendarMethod>(), Err(Error::Parse(_))));
}
