//! Turns free-form Indonesian or English text into reminder fields.
//!
//! Day, time and activity are resolved independently from fixed, ordered
//! vocabularies. Anything that cannot be resolved is left as an empty
//! string; whether a partial result is acceptable is up to the caller.

mod activity;
mod day;
mod time;

use chrono::Datelike;

use crate::{
    clock::{Clock, SystemClock},
    reminder::ParseResult,
};

/// Parses `text` with relative days ("besok", "hari ini") taken from the system clock.
pub fn parse(text: &str) -> ParseResult {
    parse_with_clock(text, &SystemClock)
}

pub fn parse_with_clock(text: &str, clock: &dyn Clock) -> ParseResult {
    let lowered = text.to_lowercase();
    let today = clock.now().weekday();

    let result = ParseResult {
        day: day::resolve_day(&lowered, today),
        time: time::resolve_time(&lowered),
        activity: activity::resolve_activity(text, &lowered),
    };

    log::debug!(
        "Parsed reminder text. [day = {:?}, time = {:?}, activity = {:?}]",
        result.day,
        result.time,
        result.activity
    );

    result
}

#[cfg(test)]
mod tests;
