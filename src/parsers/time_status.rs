/// Fixed tokens the listing shows in place of a match clock.
const STATUS_TOKENS: &[&str] = &["HT", "FT", "NS", "ET", "PEN", "POSTP"];

/// Classify the time/status cell: a known status token is returned uppercased,
/// anything else (elapsed minutes like "84", injury time like "90+2") passes
/// through verbatim. Empty input yields empty output.
pub fn parse_time_status(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let upper = trimmed.to_uppercase();
    if STATUS_TOKENS.contains(&upper.as_str()) {
        upper
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_tokens_uppercased() {
        assert_eq!(parse_time_status("ft"), "FT");
        assert_eq!(parse_time_status("HT"), "HT");
        assert_eq!(parse_time_status("Postp"), "POSTP");
        assert_eq!(parse_time_status(" pen "), "PEN");
    }

    #[test]
    fn test_clock_text_passes_through() {
        assert_eq!(parse_time_status("84"), "84");
        assert_eq!(parse_time_status("90+2"), "90+2");
        assert_eq!(parse_time_status("41'"), "41'");
        // Not in the fixed set, so no uppercasing either
        assert_eq!(parse_time_status("live"), "live");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_time_status(""), "");
        assert_eq!(parse_time_status("   "), "");
    }
}
