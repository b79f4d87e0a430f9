use once_cell::sync::Lazy;
use regex::Regex;

static SCORE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s*-\s*(\d+)\s*$").expect("Invalid score regex")
});

/// Normalize an exact "int - int" pair to `"<home> - <away>"`. Anything that
/// is not exactly two integers around a dash yields None.
pub fn normalize_score(text: &str) -> Option<String> {
    SCORE_REGEX
        .captures(text)
        .map(|caps| format!("{} - {}", &caps[1], &caps[2]))
}
