//! Per-kind atom formatting.

use std::fmt::Write;

use chrono::NaiveDateTime;

use qforge_core::temporal::{
    NANOS_PER_SECOND, date_from_days, datetime_from_days, datetime_from_nanos, ym_from_months,
};
use qforge_core::{Atom, BaseType};

use crate::errors::RenderError;

const TIMESTAMP_FORMAT: &str = "%Y.%m.%dD%H:%M:%S%.9f";
const DATETIME_FORMAT: &str = "%Y.%m.%dD%H:%M:%S";
const DATE_FORMAT: &str = "%Y.%m.%d";

/// Formats a single atom.
pub fn format_atom(atom: &Atom) -> Result<String, RenderError> {
    let mut out = String::new();
    write_atom(&mut out, atom)?;
    Ok(out)
}

pub(crate) fn write_atom(out: &mut String, atom: &Atom) -> Result<(), RenderError> {
    match atom {
        Atom::Boolean(v) => {
            write!(out, "{}b", u8::from(*v))?;
        }
        Atom::Byte(v) => {
            write!(out, "0x{v:02x}")?;
        }
        Atom::Short(v) => {
            write!(out, "{v}")?;
        }
        Atom::Int(v) => {
            write!(out, "{v}")?;
        }
        Atom::Long(v) => {
            write!(out, "{v}")?;
        }
        Atom::Real(v) => {
            write!(out, "{v:.2}")?;
        }
        Atom::Float(v) => {
            write!(out, "{v:.2}")?;
        }
        Atom::Char(v) => {
            write!(out, "\"{}\"", char::from(*v))?;
        }
        Atom::Symbol(v) => {
            write!(out, "`{v}")?;
        }
        Atom::Timestamp(v) => {
            let dt = calendar(BaseType::Timestamp, *v, datetime_from_nanos(*v))?;
            write!(out, "{}", dt.format(TIMESTAMP_FORMAT))?;
        }
        Atom::Month(v) => {
            let (year, month) = ym_from_months(*v);
            write!(out, "{year:04}.{month:02}")?;
        }
        Atom::Date(v) => {
            let date = calendar(BaseType::Date, *v, date_from_days(*v))?;
            write!(out, "{}", date.format(DATE_FORMAT))?;
        }
        Atom::Datetime(v) => {
            let dt: NaiveDateTime = calendar(BaseType::Datetime, *v, datetime_from_days(*v))?;
            write!(out, "{}", dt.format(DATETIME_FORMAT))?;
        }
        Atom::Timespan(v) => write_timespan(out, *v)?,
        Atom::Minute(v) => {
            let seconds = i64::from(*v).unsigned_abs();
            write!(
                out,
                "{}{:02}:{:02}",
                sign(*v),
                seconds / 3_600 % 24,
                seconds / 60 % 60
            )?;
        }
        Atom::Second(v) => write_clock(out, sign(*v), i64::from(*v).unsigned_abs())?,
        Atom::Time(v) => {
            let millis = i64::from(*v).unsigned_abs();
            write_clock(out, sign(*v), millis / 1_000)?;
            write!(out, ".{:03}", millis % 1_000)?;
        }
    }
    Ok(())
}

fn calendar<T, V: ToString>(
    kind: BaseType,
    value: V,
    converted: Option<T>,
) -> Result<T, RenderError> {
    converted.ok_or_else(|| RenderError::OutOfRange {
        kind,
        value: value.to_string(),
    })
}

fn sign<T: Default + PartialOrd>(value: T) -> &'static str {
    if value < T::default() { "-" } else { "" }
}

/// `hh:mm:ss` of the seconds since midnight; hours wrap at 24.
fn write_clock(out: &mut String, sign: &str, seconds: u64) -> std::fmt::Result {
    write!(
        out,
        "{sign}{:02}:{:02}:{:02}",
        seconds / 3_600 % 24,
        seconds / 60 % 60,
        seconds % 60
    )
}

/// `dddDhh:mm:ss.nnnnnnnnn`, where `ddd` is the 1-based day of year.
fn write_timespan(out: &mut String, nanos: i64) -> std::fmt::Result {
    let total = nanos.unsigned_abs();
    let per_second = NANOS_PER_SECOND as u64;
    let seconds = total / per_second;
    write!(
        out,
        "{}{:03}D{:02}:{:02}:{:02}.{:09}",
        sign(nanos),
        seconds / 86_400 + 1,
        seconds / 3_600 % 24,
        seconds / 60 % 60,
        seconds % 60,
        total % per_second
    )
}

#[cfg(test)]
mod tests {
    use qforge_core::temporal::{NANOS_PER_DAY, days_from_ymd, months_from_ym};

    use super::*;

    fn fmt(atom: Atom) -> String {
        format_atom(&atom).expect("formattable atom")
    }

    #[test]
    fn formats_primitive_kinds() {
        assert_eq!(fmt(Atom::Boolean(true)), "1b");
        assert_eq!(fmt(Atom::Boolean(false)), "0b");
        assert_eq!(fmt(Atom::Byte(0x0a)), "0x0a");
        assert_eq!(fmt(Atom::Byte(255)), "0xff");
        assert_eq!(fmt(Atom::Short(-12)), "-12");
        assert_eq!(fmt(Atom::Int(42)), "42");
        assert_eq!(fmt(Atom::Long(9_007_199_254_740_993)), "9007199254740993");
        assert_eq!(fmt(Atom::Real(1.5)), "1.50");
        assert_eq!(fmt(Atom::Float(12.345)), "12.35");
        assert_eq!(fmt(Atom::Char(b'q')), "\"q\"");
        assert_eq!(fmt(Atom::symbol("abc")), "`abc");
        assert_eq!(fmt(Atom::symbol("")), "`");
    }

    #[test]
    fn formats_calendar_kinds() {
        let days = days_from_ymd(2015, 3, 7).unwrap();
        assert_eq!(fmt(Atom::Date(days)), "2015.03.07");
        assert_eq!(fmt(Atom::Date(-1)), "1999.12.31");
        assert_eq!(fmt(Atom::Month(months_from_ym(2015, 3))), "2015.03");
        assert_eq!(fmt(Atom::Month(-1)), "1999.12");

        let nanos = i64::from(days) * NANOS_PER_DAY
            + ((13 * 60 + 4) * 60 + 5) * NANOS_PER_SECOND
            + 6;
        assert_eq!(fmt(Atom::Timestamp(nanos)), "2015.03.07D13:04:05.000000006");

        let datetime = f64::from(days) + (13.0 * 3_600.0 + 4.0 * 60.0 + 5.0) / 86_400.0;
        assert_eq!(fmt(Atom::Datetime(datetime)), "2015.03.07D13:04:05");
    }

    #[test]
    fn formats_duration_kinds() {
        let nanos = (((3 * 24 + 4) * 60 + 5) * 60 + 6) * NANOS_PER_SECOND + 7;
        assert_eq!(fmt(Atom::Timespan(nanos)), "004D04:05:06.000000007");
        assert_eq!(fmt(Atom::Timespan(NANOS_PER_SECOND)), "001D00:00:01.000000000");
        assert_eq!(fmt(Atom::Timespan(-NANOS_PER_SECOND)), "-001D00:00:01.000000000");
        assert_eq!(fmt(Atom::Minute(4_500)), "01:15");
        assert_eq!(fmt(Atom::Minute(3_599)), "00:59");
        assert_eq!(fmt(Atom::Minute(90_000)), "01:00");
        assert_eq!(fmt(Atom::Second(3_661)), "01:01:01");
        assert_eq!(fmt(Atom::Second(90_061)), "01:01:01");
        assert_eq!(fmt(Atom::Second(-5)), "-00:00:05");
        assert_eq!(fmt(Atom::Time(45_296_789)), "12:34:56.789");
    }

    #[test]
    fn reports_unrepresentable_dates() {
        let err = format_atom(&Atom::Datetime(f64::INFINITY)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::OutOfRange {
                kind: BaseType::Datetime,
                ..
            }
        ));
        assert!(format_atom(&Atom::Date(i32::MAX)).is_err());
    }
}
