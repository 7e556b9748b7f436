use std::{fmt, str::FromStr};

use chrono::{NaiveTime, Timelike, Weekday};

use crate::error::ReminderError;

pub type ReminderId = i64;

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

/// Canonical English name of a weekday, the only day representation used internally.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize].1
}

/// Inverse of [`weekday_name`]. Only exact canonical names are accepted.
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find(|(_, canonical)| *canonical == name)
        .map(|(weekday, _)| *weekday)
}

/// Wall-clock time of a reminder at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReminderTime(NaiveTime);

impl ReminderTime {
    pub fn new(inner: NaiveTime) -> Self {
        let normalized_time = inner
            .with_nanosecond(0)
            .and_then(|time| time.with_second(0))
            .expect("Will never fail.");
        Self(normalized_time)
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn time(&self) -> &NaiveTime {
        &self.0
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for ReminderTime {
    type Err = ReminderError;

    /// Accepts zero-padded `HH:MM` only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ReminderError::InvalidTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }

        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        let minute = minute.parse::<u32>().map_err(|_| invalid())?;

        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: ReminderId,
    pub day: Weekday,
    pub time: ReminderTime,
    pub activity: String,
}

/// Output of the parser. An empty field means it could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub day: String,
    pub time: String,
    pub activity: String,
}

impl ParseResult {
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("day", &self.day),
            ("time", &self.time),
            ("activity", &self.activity),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// A complete reminder that has not been given an id by storage yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReminder {
    pub day: Weekday,
    pub time: ReminderTime,
    pub activity: String,
}

impl NewReminder {
    pub fn new(day: Weekday, time: ReminderTime, activity: &str) -> Result<Self, ReminderError> {
        let activity = activity.trim();
        if activity.is_empty() {
            return Err(ReminderError::Incomplete(vec!["activity"]));
        }

        Ok(Self {
            day,
            time,
            activity: activity.to_string(),
        })
    }

    pub fn into_reminder(self, id: ReminderId) -> Reminder {
        Reminder {
            id,
            day: self.day,
            time: self.time,
            activity: self.activity,
        }
    }
}

impl TryFrom<ParseResult> for NewReminder {
    type Error = ReminderError;

    fn try_from(value: ParseResult) -> Result<Self, Self::Error> {
        let missing = value.missing_fields();
        if !missing.is_empty() {
            return Err(ReminderError::Incomplete(missing));
        }

        let day = parse_weekday(&value.day).ok_or(ReminderError::InvalidDay(value.day))?;
        let time = value.time.parse::<ReminderTime>()?;

        Self::new(day, time, &value.activity)
    }
}
