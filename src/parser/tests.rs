use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use proptest::prelude::*;
use proptest_arbitrary_interop::arb;

use super::{day::DAY_KEYWORDS, day::DayKeyword, parse_with_clock};
use crate::{
    clock::FixedClock,
    reminder::{ParseResult, weekday_name},
};

fn clock_at(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock::new(NaiveDateTime::new(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        NaiveTime::from_hms_opt(8, 15, 0).unwrap(),
    ))
}

fn monday_clock() -> FixedClock {
    clock_at(2025, 6, 2)
}

fn triple(day: &str, time: &str, activity: &str) -> ParseResult {
    ParseResult {
        day: day.to_string(),
        time: time.to_string(),
        activity: activity.to_string(),
    }
}

fn fixed_day_keywords() -> Vec<(&'static str, &'static str)> {
    DAY_KEYWORDS
        .iter()
        .filter_map(|(keyword, day)| match day {
            DayKeyword::Fixed(weekday) => Some((*keyword, weekday_name(*weekday))),
            _ => None,
        })
        .collect()
}

#[test]
pub fn jam_hour_with_activity_keyword() {
    let result = parse_with_clock("jam 9 meeting", &monday_clock());

    assert_eq!(result.time, "09:00");
    assert_eq!(result.activity, "meeting");
}

#[test]
pub fn colon_time_with_activity_keyword() {
    let result = parse_with_clock("9:30 belajar", &monday_clock());

    assert_eq!(result.time, "09:30");
    assert_eq!(result.activity, "belajar");
}

#[test]
pub fn full_chat_message_is_resolved() {
    let result = parse_with_clock(
        "Ingetin aku besok jam 9 meeting dengan tim",
        &monday_clock(),
    );

    assert_eq!(result, triple("Tuesday", "09:00", "meeting"));
    assert!(result.is_complete());
}

#[test]
pub fn listed_activity_uses_keyword_path() {
    let result = parse_with_clock("ingetin aku besok jam 9 rapat tim", &monday_clock());

    assert_eq!(result.activity, "rapat");
}

#[test]
pub fn unlisted_activity_falls_back_to_residual_words() {
    let result = parse_with_clock("besok jam 9 nonton film", &monday_clock());

    assert_eq!(result, triple("Tuesday", "09:00", "nonton film"));
}

#[test]
pub fn canonical_output_is_a_fixed_point() {
    let clock = monday_clock();
    for text in ["Monday 09:00 meeting", "Saturday 18:45 Jemput Adik"] {
        let first = parse_with_clock(text, &clock);
        let canonical = format!("{} {} {}", first.day, first.time, first.activity);
        let second = parse_with_clock(&canonical, &clock);

        assert_eq!(canonical, text);
        assert_eq!(first, second);
    }
}

#[test]
pub fn hari_ini_resolves_to_today() {
    let result = parse_with_clock("hari ini jam 21 tidur", &clock_at(2025, 6, 5));

    assert_eq!(result, triple("Thursday", "21:00", "tidur"));
}

#[test]
pub fn besok_wraps_from_sunday_to_monday() {
    let result = parse_with_clock("besok jam 6 olahraga", &clock_at(2025, 6, 8));

    assert_eq!(result.day, "Monday");
}

#[test]
pub fn unrecognised_text_leaves_fields_empty() {
    let result = parse_with_clock("halo apa kabar", &monday_clock());

    assert_eq!(result, triple("", "", "halo apa kabar"));
    assert_eq!(result.missing_fields(), vec!["day", "time"]);
}

#[test]
pub fn empty_text_is_not_an_error() {
    let result = parse_with_clock("", &monday_clock());

    assert_eq!(result, ParseResult::default());
}

proptest! {
    #[test]
    fn exact_weekday_keyword_always_resolves(
        (keyword, expected) in prop::sample::select(fixed_day_keywords()),
        prefix in "[xqz ]{0,8}",
        suffix in "[xqz ]{0,8}",
        shout in any::<bool>(),
    ) {
        let text = format!("{prefix}{keyword}{suffix}");
        let text = if shout { text.to_uppercase() } else { text };

        let result = parse_with_clock(&text, &monday_clock());

        prop_assert_eq!(result.day, expected);
    }

    #[test]
    fn besok_is_the_day_after_now(now in arb::<NaiveDateTime>()) {
        let clock = FixedClock::new(now);

        let result = parse_with_clock("besok jam 9 meeting", &clock);

        prop_assert_eq!(result.day.as_str(), weekday_name(now.weekday().succ()));
        if let Some(tomorrow) = now.checked_add_signed(TimeDelta::days(1)) {
            prop_assert_eq!(result.day.as_str(), weekday_name(tomorrow.weekday()));
        }
    }

    #[test]
    fn parsing_never_fails(text in "\\PC{0,40}") {
        let result = parse_with_clock(&text, &monday_clock());

        prop_assert_eq!(result.activity.trim(), result.activity.as_str());
    }
}
