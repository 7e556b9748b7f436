use std::sync::OnceLock;

use regex::Regex;

/// A named way of spotting a time of day in lower-cased text.
///
/// Every pattern exposes a `hour` group and may expose a `minute` group.
/// `am`/`pm` suffixes are consumed so they do not split the numeral, but the
/// hour is never shifted by them.
pub(super) struct TimeRule {
    pub name: &'static str,
    pattern: Regex,
}

/// Evaluated in order, the first rule matching anywhere in the text decides.
const TIME_RULE_PATTERNS: &[(&str, &str)] = &[
    (
        "numeral-with-colon",
        r"\b(?P<hour>\d{1,2}):(?P<minute>\d{2})(?:\s*(?:am|pm))?\b",
    ),
    (
        "numeral-with-dot",
        r"\b(?P<hour>\d{1,2})\.(?P<minute>\d{2})(?:\s*(?:am|pm))?\b",
    ),
    ("am-pm-suffixed", r"\b(?P<hour>\d{1,2})\s*(?:am|pm)\b"),
    ("jam-hour", r"\bjam\s*(?P<hour>\d{1,2})\b"),
    ("bare-numeral", r"\b(?P<hour>\d{1,2})\b"),
];

pub(super) fn time_rules() -> &'static [TimeRule] {
    static TIME_RULES: OnceLock<Vec<TimeRule>> = OnceLock::new();
    TIME_RULES.get_or_init(|| {
        TIME_RULE_PATTERNS
            .iter()
            .map(|&(name, pattern)| TimeRule {
                name,
                pattern: Regex::new(pattern).expect("Time rule patterns are valid."),
            })
            .collect()
    })
}

impl TimeRule {
    fn extract(&self, lowered: &str) -> Option<String> {
        let captures = self.pattern.captures(lowered)?;
        let hour = captures.name("hour")?.as_str();
        let minute = captures.name("minute").map_or("00", |m| m.as_str());

        Some(format!("{:0>2}:{:0>2}", hour, minute))
    }
}

pub(super) fn resolve_time(lowered: &str) -> String {
    time_rules()
        .iter()
        .find_map(|rule| {
            let time = rule.extract(lowered)?;
            log::trace!("Time rule matched. [rule = {}, time = {}]", rule.name, time);
            Some(time)
        })
        .unwrap_or_default()
}
