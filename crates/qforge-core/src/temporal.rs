//! Epoch and unit conversions for the temporal kinds.
//!
//! Every calendar kind counts from 2000-01-01. Durations (timespan, minute,
//! second, time) carry no epoch.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000;
pub const NANOS_PER_DAY: i64 = SECONDS_PER_DAY * NANOS_PER_SECOND;

/// Days between 0001-01-01 (CE day 1) and 2000-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 730_120;
const EPOCH_YEAR: i32 = 2000;

/// 2000-01-01, checked when the crate compiles.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(EPOCH_YEAR, 1, 1) {
    Some(date) => date,
    None => panic!("2000-01-01 is a valid date"),
};

pub fn epoch() -> NaiveDate {
    EPOCH
}

/// Days since 2000-01-01 for a calendar date, `None` when the date is invalid.
pub fn days_from_ymd(year: i32, month: u32, day: u32) -> Option<i32> {
    NaiveDate::from_ymd_opt(year, month, day).map(days_from_date)
}

pub fn days_from_date(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - EPOCH_DAYS_FROM_CE
}

/// Months since 2000-01 for a year and 1-based month.
pub fn months_from_ym(year: i32, month: u32) -> i32 {
    (year - EPOCH_YEAR) * 12 + month as i32 - 1
}

/// Splits months-since-2000 into a year and 1-based month.
pub fn ym_from_months(months: i32) -> (i32, u32) {
    (
        EPOCH_YEAR + months.div_euclid(12),
        months.rem_euclid(12) as u32 + 1,
    )
}

pub fn date_from_days(days: i32) -> Option<NaiveDate> {
    EPOCH_DAYS_FROM_CE
        .checked_add(days)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

pub fn datetime_from_nanos(nanos: i64) -> Option<NaiveDateTime> {
    epoch()
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::nanoseconds(nanos))
}

/// Converts fractional days since 2000-01-01, rounded to the millisecond.
pub fn datetime_from_days(days: f64) -> Option<NaiveDateTime> {
    let millis = (days * MILLIS_PER_DAY as f64).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    epoch()
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::try_milliseconds(millis as i64)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_millennium() {
        assert_eq!(epoch(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(EPOCH.num_days_from_ce(), EPOCH_DAYS_FROM_CE);
        assert_eq!(days_from_ymd(2000, 1, 1), Some(0));
        assert_eq!(days_from_ymd(1999, 12, 31), Some(-1));
        assert_eq!(days_from_ymd(2010, 1, 1), Some(3653));
        assert_eq!(days_from_ymd(2015, 2, 30), None);
    }

    #[test]
    fn months_round_trip_around_epoch() {
        assert_eq!(months_from_ym(2000, 1), 0);
        assert_eq!(months_from_ym(2015, 3), 182);
        assert_eq!(ym_from_months(182), (2015, 3));
        assert_eq!(ym_from_months(-1), (1999, 12));
    }

    #[test]
    fn converts_nanos_and_fractional_days() {
        let dt = datetime_from_nanos(NANOS_PER_DAY + 1).unwrap();
        assert_eq!(dt.to_string(), "2000-01-02 00:00:00.000000001");

        let dt = datetime_from_days(1.5).unwrap();
        assert_eq!(dt.to_string(), "2000-01-02 12:00:00");
        assert!(datetime_from_days(f64::NAN).is_none());
        assert!(datetime_from_days(1e300).is_none());
    }
}
