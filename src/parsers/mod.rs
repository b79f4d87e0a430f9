pub mod score;
pub mod time_status;

pub use score::*;
pub use time_status::*;

use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

static RANK_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\s+").expect("Invalid rank prefix regex")
});

/// Clean and normalize text by removing extra whitespace and decoding HTML entities
pub fn clean_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    decoded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Normalized text content of an element, with node boundaries collapsed to
/// single spaces (the listing nests spans inside cells).
pub fn element_text(element: &ElementRef) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// Strip a leading run of digits plus whitespace from a team name. The source
/// occasionally prefixes a ranking number to the name.
pub fn strip_rank_prefix(name: &str) -> String {
    RANK_PREFIX_REGEX.replace(name, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Premier   League \n"), "Premier League");
        assert_eq!(clean_text("AC&nbsp;Milan"), "AC Milan");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_strip_rank_prefix() {
        assert_eq!(strip_rank_prefix("7 Napoli"), "Napoli");
        assert_eq!(strip_rank_prefix("  12  Real Madrid"), "Real Madrid");
        assert_eq!(strip_rank_prefix("Roma"), "Roma");
        // A bare number is not a rank prefix, there is no name after it
        assert_eq!(strip_rank_prefix("90"), "90");
        assert_eq!(strip_rank_prefix("1860 Munich"), "Munich");
    }
}
