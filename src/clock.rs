use std::sync::Mutex;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// Source of "now" in host-local wall time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
pub struct FixedClock(Mutex<NaiveDateTime>);

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.0.lock().unwrap_or_else(|e| e.into_inner());
        *now += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    #[test]
    fn fixed_clock_only_moves_when_advanced() {
        let start = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );
        let clock = FixedClock::new(start);

        assert_eq!(clock.now(), start);

        clock.advance(TimeDelta::minutes(1));
        assert_eq!(clock.now(), start + TimeDelta::minutes(1));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }
}
