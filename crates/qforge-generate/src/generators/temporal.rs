//! Calendar and duration generators.
//!
//! Values are assembled from random calendar and clock components and then
//! converted to the kind's native unit: years 2010..=2019, days 1..=28 so
//! every month is valid.

use rand::{Rng, RngCore};

use qforge_core::temporal::{NANOS_PER_SECOND, days_from_ymd, months_from_ym};
use qforge_core::{Atom, BaseType};

use crate::generators::{AtomGenerator, GeneratorRegistry};

const MIN_YEAR: i32 = 2010;
const MAX_YEAR: i32 = 2019;
const MAX_TIMESPAN_DAYS: i64 = 9;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(TimestampGenerator));
    registry.register_generator(Box::new(MonthGenerator));
    registry.register_generator(Box::new(DateGenerator));
    registry.register_generator(Box::new(DatetimeGenerator));
    registry.register_generator(Box::new(TimespanGenerator));
    registry.register_generator(Box::new(MinuteGenerator));
    registry.register_generator(Box::new(SecondGenerator));
    registry.register_generator(Box::new(TimeGenerator));
}

#[derive(Debug, Clone, Copy)]
struct Clock {
    hour: i64,
    minute: i64,
    second: i64,
}

impl Clock {
    fn random(rng: &mut dyn RngCore) -> Self {
        Self {
            hour: rng.random_range(0..24),
            minute: rng.random_range(0..60),
            second: rng.random_range(0..60),
        }
    }

    fn seconds(self) -> i64 {
        (self.hour * 60 + self.minute) * 60 + self.second
    }
}

fn random_month(rng: &mut dyn RngCore) -> (i32, u32) {
    (
        rng.random_range(MIN_YEAR..=MAX_YEAR),
        rng.random_range(1..=12),
    )
}

fn random_days(rng: &mut dyn RngCore) -> i64 {
    let (year, month) = random_month(rng);
    let day = rng.random_range(1..=28);
    let days = days_from_ymd(year, month, day).expect("day 28 exists in every month");
    i64::from(days)
}

fn random_nanos(rng: &mut dyn RngCore) -> i64 {
    rng.random_range(0..NANOS_PER_SECOND)
}

struct TimestampGenerator;

impl AtomGenerator for TimestampGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Timestamp
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        let days = random_days(rng);
        let clock = Clock::random(rng);
        let seconds = days * 86_400 + clock.seconds();
        Atom::Timestamp(seconds * NANOS_PER_SECOND + random_nanos(rng))
    }
}

struct MonthGenerator;

impl AtomGenerator for MonthGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Month
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        let (year, month) = random_month(rng);
        Atom::Month(months_from_ym(year, month))
    }
}

struct DateGenerator;

impl AtomGenerator for DateGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Date
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        Atom::Date(random_days(rng) as i32)
    }
}

struct DatetimeGenerator;

impl AtomGenerator for DatetimeGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Datetime
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        let days = random_days(rng) as f64;
        let clock = Clock::random(rng);
        let millis: i64 = rng.random_range(0..1_000);
        let seconds = clock.seconds() as f64 + millis as f64 / 1_000.0;
        Atom::Datetime(days + seconds / 86_400.0)
    }
}

struct TimespanGenerator;

impl AtomGenerator for TimespanGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Timespan
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        let days = rng.random_range(0..=MAX_TIMESPAN_DAYS);
        let clock = Clock::random(rng);
        let seconds = days * 86_400 + clock.seconds();
        Atom::Timespan(seconds * NANOS_PER_SECOND + random_nanos(rng))
    }
}

/// Stores `minute * 60 + second`, a value below one hour.
struct MinuteGenerator;

impl AtomGenerator for MinuteGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Minute
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        let minute: i32 = rng.random_range(0..60);
        let second: i32 = rng.random_range(0..60);
        Atom::Minute(minute * 60 + second)
    }
}

struct SecondGenerator;

impl AtomGenerator for SecondGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Second
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        Atom::Second(Clock::random(rng).seconds() as i32)
    }
}

struct TimeGenerator;

impl AtomGenerator for TimeGenerator {
    fn kind(&self) -> BaseType {
        BaseType::Time
    }

    fn sample(&self, rng: &mut dyn RngCore) -> Atom {
        let seconds = Clock::random(rng).seconds() as i32;
        let millis: i32 = rng.random_range(0..1_000);
        Atom::Time(seconds * 1_000 + millis)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use qforge_core::temporal::{NANOS_PER_DAY, date_from_days, datetime_from_nanos};

    use super::*;

    fn sample(kind: BaseType, rng: &mut ChaCha8Rng) -> Atom {
        GeneratorRegistry::new()
            .generator(kind)
            .expect("generator registered")
            .sample(rng)
    }

    #[test]
    fn calendar_kinds_land_in_the_2010s() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            match sample(BaseType::Date, &mut rng) {
                Atom::Date(days) => {
                    let date = date_from_days(days).unwrap();
                    assert!((2010..=2019).contains(&chrono::Datelike::year(&date)));
                    assert!(chrono::Datelike::day(&date) <= 28);
                }
                other => panic!("unexpected atom {other:?}"),
            }
            match sample(BaseType::Timestamp, &mut rng) {
                Atom::Timestamp(nanos) => {
                    let dt = datetime_from_nanos(nanos).unwrap();
                    assert!((2010..=2019).contains(&chrono::Datelike::year(&dt)));
                }
                other => panic!("unexpected atom {other:?}"),
            }
            match sample(BaseType::Month, &mut rng) {
                Atom::Month(months) => assert!((120..240).contains(&months)),
                other => panic!("unexpected atom {other:?}"),
            }
        }
    }

    #[test]
    fn random_days_reach_every_month_without_falling_back_to_epoch() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut months = std::collections::BTreeSet::new();
        for _ in 0..2_000 {
            let days = i32::try_from(random_days(&mut rng)).unwrap();
            assert!(days >= 3_653, "{days}");
            months.insert(chrono::Datelike::month(&date_from_days(days).unwrap()));
        }
        assert_eq!(months.len(), 12);
    }

    #[test]
    fn durations_stay_within_their_units() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..200 {
            match sample(BaseType::Timespan, &mut rng) {
                Atom::Timespan(nanos) => {
                    assert!((0..10 * NANOS_PER_DAY).contains(&nanos));
                }
                other => panic!("unexpected atom {other:?}"),
            }
            match sample(BaseType::Minute, &mut rng) {
                Atom::Minute(v) => assert!((0..3_600).contains(&v)),
                other => panic!("unexpected atom {other:?}"),
            }
            match sample(BaseType::Second, &mut rng) {
                Atom::Second(v) => assert!((0..86_400).contains(&v)),
                other => panic!("unexpected atom {other:?}"),
            }
            match sample(BaseType::Time, &mut rng) {
                Atom::Time(v) => assert!((0..86_400_000).contains(&v)),
                other => panic!("unexpected atom {other:?}"),
            }
            match sample(BaseType::Datetime, &mut rng) {
                Atom::Datetime(days) => assert!(days >= 3653.0 && days < 7305.0),
                other => panic!("unexpected atom {other:?}"),
            }
        }
    }
}
