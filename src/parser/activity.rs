use super::day::is_day_keyword;

/// Scanned top to bottom, first keyword found in the text wins.
pub(super) const ACTIVITY_KEYWORDS: &[&str] = &[
    "meeting", "rapat", "belajar", "kerja", "olahraga", "makan", "tidur",
];

/// Tokens never kept when the activity is taken from the leftover words.
pub(super) const STOP_WORDS: &[&str] = &[
    "ingetin", "ingatin", "ingatkan", "ingat", "tolong", "remind", "me", "aku", "saya", "gue",
    "kamu", "dong", "ya", "nanti", "jam", "pukul", "pada", "di", "ke", "untuk", "buat", "hari",
    "ini", "setiap", "tiap", "tanggal", "tgl", "pagi", "siang", "sore", "malam", "am", "pm",
    "at", "on", "every", "to",
];

pub(super) fn resolve_activity(text: &str, lowered: &str) -> String {
    ACTIVITY_KEYWORDS
        .iter()
        .find(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .unwrap_or_else(|| residual_words(text))
}

/// Keeps the original order and casing of the surviving tokens.
fn residual_words(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !is_filler(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_filler(token: &str) -> bool {
    let lowered = token.to_lowercase();
    STOP_WORDS.contains(&lowered.as_str())
        || is_day_keyword(&lowered)
        || token.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> String {
        resolve_activity(text, &text.to_lowercase())
    }

    #[test]
    fn keyword_is_returned_as_declared() {
        assert_eq!(resolve("Besok jam 9 MEETING dengan tim"), "meeting");
    }

    #[test]
    fn earlier_declared_keyword_wins() {
        // "makan" is declared before "tidur"
        assert_eq!(resolve("tidur habis makan"), "makan");
    }

    #[test]
    fn residual_words_keep_case_and_order() {
        assert_eq!(resolve("Ingetin aku Senin jam 7 Jemput Adik"), "Jemput Adik");
    }

    #[test]
    fn tokens_with_digits_are_dropped() {
        assert_eq!(resolve("nonton 9:30 film 2x"), "nonton film");
    }

    #[test]
    fn nothing_left_means_empty_activity() {
        assert_eq!(resolve("ingetin aku besok jam 9"), "");
        assert_eq!(resolve(""), "");
    }
}
