use chrono::Weekday;

use crate::reminder::weekday_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DayKeyword {
    Fixed(Weekday),
    Tomorrow,
    Today,
}

/// Scanned top to bottom, first keyword found in the text wins.
pub(super) const DAY_KEYWORDS: &[(&str, DayKeyword)] = &[
    ("senin", DayKeyword::Fixed(Weekday::Mon)),
    ("selasa", DayKeyword::Fixed(Weekday::Tue)),
    ("rabu", DayKeyword::Fixed(Weekday::Wed)),
    ("kamis", DayKeyword::Fixed(Weekday::Thu)),
    ("jumat", DayKeyword::Fixed(Weekday::Fri)),
    ("sabtu", DayKeyword::Fixed(Weekday::Sat)),
    ("minggu", DayKeyword::Fixed(Weekday::Sun)),
    ("monday", DayKeyword::Fixed(Weekday::Mon)),
    ("tuesday", DayKeyword::Fixed(Weekday::Tue)),
    ("wednesday", DayKeyword::Fixed(Weekday::Wed)),
    ("thursday", DayKeyword::Fixed(Weekday::Thu)),
    ("friday", DayKeyword::Fixed(Weekday::Fri)),
    ("saturday", DayKeyword::Fixed(Weekday::Sat)),
    ("sunday", DayKeyword::Fixed(Weekday::Sun)),
    ("besok", DayKeyword::Tomorrow),
    ("hari ini", DayKeyword::Today),
];

pub(super) fn resolve_day(lowered: &str, today: Weekday) -> String {
    DAY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, day)| match day {
            DayKeyword::Fixed(weekday) => *weekday,
            DayKeyword::Tomorrow => today.succ(),
            DayKeyword::Today => today,
        })
        .map(|weekday| weekday_name(weekday).to_string())
        .unwrap_or_default()
}

pub(super) fn is_day_keyword(token: &str) -> bool {
    let token = token.to_lowercase();
    DAY_KEYWORDS.iter().any(|(keyword, _)| *keyword == token)
}
