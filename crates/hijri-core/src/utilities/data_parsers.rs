//! Data parsing helpers.
//!
//! Turn the textual date forms accepted by the public API into raw numeric
//! components.  Range validation is left to the typed constructors; these
//! functions only check the shape of the input.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 || parts[0].len() < 3 {
        return None;
    }
    let year: u16 = parse_digits(parts[0])?;
    let month: u8 = parse_digits(parts[1])?;
    let day: u8 = parse_digits(parts[2])?;
    Some((year, month, day))
}

/// Parse a day-first date string, `DD-MM-YYYY` or `DD/MM/YYYY`.
///
/// This is the format used by the upstream dataset provider.
/// Returns `(year, month, day)` on success.
pub fn parse_date_dmy(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let sep = if s.contains('/') { '/' } else { '-' };
    let parts: Vec<&str> = s.split(sep).collect();
    if parts.len() != 3 || parts[0].len() > 2 || parts[1].len() > 2 {
        return None;
    }
    let day: u8 = parse_digits(parts[0])?;
    let month: u8 = parse_digits(parts[1])?;
    let year: u16 = parse_digits(parts[2])?;
    Some((year, month, day))
}

/// Parse a possibly partial Hijri date: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`,
/// optionally followed by an `AH` era marker (`"1446-02-05 AH"`,
/// `"1446-02-05-AH"`).
///
/// Returns `(year, month, day)` with the missing parts as `None`.
pub fn parse_partial_date(s: &str) -> Option<(u16, Option<u8>, Option<u8>)> {
    let mut s = s.trim();
    if let Some(stripped) = s
        .strip_suffix("AH")
        .or_else(|| s.strip_suffix("ah"))
        .or_else(|| s.strip_suffix("H"))
    {
        s = stripped.trim_end().trim_end_matches('-').trim_end();
    }
    let parts: Vec<&str> = s.split('-').collect();
    match parts.as_slice() {
        [y] => Some((parse_digits(y)?, None, None)),
        [y, m] => Some((parse_digits(y)?, Some(parse_digits(m)?), None)),
        [y, m, d] => Some((
            parse_digits(y)?,
            Some(parse_digits(m)?),
            Some(parse_digits(d)?),
        )),
        _ => None,
    }
}

fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-07-08"), Some((2024, 7, 8)));
        assert_eq!(parse_iso_date("0622-07-19"), Some((622, 7, 19)));
        assert_eq!(parse_iso_date(" 2024-7-8 "), Some((2024, 7, 8)));
        assert_eq!(parse_iso_date("08-07-2024"), None);
        assert_eq!(parse_iso_date("2024-07"), None);
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date("2024-+7-08"), None);
    }

    #[test]
    fn test_parse_date_dmy() {
        assert_eq!(parse_date_dmy("15-01-2024"), Some((2024, 1, 15)));
        assert_eq!(parse_date_dmy("15/06/2023"), Some((2023, 6, 15)));
        assert_eq!(parse_date_dmy("2023-06-15"), None);
    }

    #[test]
    fn test_parse_partial_date() {
        assert_eq!(parse_partial_date("1446"), Some((1446, None, None)));
        assert_eq!(parse_partial_date("1446-02"), Some((1446, Some(2), None)));
        assert_eq!(
            parse_partial_date("1446-02-05"),
            Some((1446, Some(2), Some(5)))
        );
        assert_eq!(
            parse_partial_date("1446-02-05-AH"),
            Some((1446, Some(2), Some(5)))
        );
        assert_eq!(parse_partial_date("1446 AH"), Some((1446, None, None)));
        assert_eq!(parse_partial_date(""), None);
        assert_eq!(parse_partial_date("1446-02-05-01"), None);
        assert_eq!(parse_partial_date("14x6"), None);
    }

    proptest! {
        #[test]
        fn iso_text_parses_back(y in 100u16..=9999, m in 1u8..=12, d in 1u8..=31) {
            let text = format!("{y:04}-{m:02}-{d:02}");
            prop_assert_eq!(parse_iso_date(&text), Some((y, m, d)));
        }

        #[test]
        fn dmy_text_parses_back(
            y in 1u16..=9999,
            m in 1u8..=12,
            d in 1u8..=31,
            slash in any::<bool>(),
        ) {
            let sep = if slash { '/' } else { '-' };
            let text = format!("{d:02}{sep}{m:02}{sep}{y:04}");
            prop_assert_eq!(parse_date_dmy(&text), Some((y, m, d)));
        }

        #[test]
        fn partial_text_parses_back(
            y in 1u16..=1500,
            m in proptest::option::of(1u8..=12),
            d in 1u8..=30,
            era in prop::sample::select(vec!["", " AH", "-AH", " ah"]),
        ) {
            let (text, expected) = match m {
                Some(m) if d % 2 == 0 => (format!("{y}-{m:02}-{d:02}"), (y, Some(m), Some(d))),
                Some(m) => (format!("{y}-{m:02}"), (y, Some(m), None)),
                None => (format!("{y}"), (y, None, None)),
            };
            let text = format!("{text}{era}");
            prop_assert_eq!(parse_partial_date(&text), Some(expected));
        }
    }
}
