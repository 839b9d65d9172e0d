//! Conversions between [`GregorianDate`] and `chrono::NaiveDate`.

use chrono::{Datelike, NaiveDate};
use hijri_core::errors::{Error, Result};

use crate::gregorian::GregorianDate;

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        let year = u16::try_from(date.year())
            .map_err(|_| Error::OutOfRange(format!("year {} not supported", date.year())))?;
        GregorianDate::from_ymd(year, date.month() as u8, date.day() as u8)
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = Error;

    fn try_from(date: GregorianDate) -> Result<Self> {
        NaiveDate::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        )
        .ok_or_else(|| Error::OutOfRange(format!("{date} not representable as NaiveDate")))
    }
}
