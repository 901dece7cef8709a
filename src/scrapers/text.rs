//! String normalization shared by all site extractors.

use regex::Regex;
use std::sync::OnceLock;

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Trim and collapse every whitespace run to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    whitespace().replace_all(text.trim(), " ").into_owned()
}

/// First capture group of `pattern` in `text`, or `text` itself when there is none.
pub fn capture_or_raw(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| text.to_string())
}

/// First capture group of `pattern` in `text`, or an empty string.
pub fn capture_or_empty(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Remove every match of `pattern`, then trim.
pub fn strip_pattern(pattern: &Regex, text: &str) -> String {
    pattern.replace_all(text, "").trim().to_string()
}

/// Remove the first occurrence of `needle`, then trim.
pub fn remove_first(text: &str, needle: &str) -> String {
    if needle.is_empty() {
        return text.trim().to_string();
    }
    text.replacen(needle, "", 1).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("\n   £450 pw|\n\t  £1,950 pcm  "),
            "£450 pw| £1,950 pcm"
        );
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_capture_or_raw_falls_back_to_input() {
        let re = Regex::new(r"(£[0-9,]+) pcm$").unwrap();
        assert_eq!(capture_or_raw(&re, "£450 pw| £1,950 pcm"), "£1,950");
        assert_eq!(capture_or_raw(&re, "POA"), "POA");
        assert_eq!(capture_or_raw(&re, ""), "");
    }

    #[test]
    fn test_capture_or_empty() {
        let re = Regex::new(r"Added on (\d{2}/\d{2}/\d{4})").unwrap();
        assert_eq!(capture_or_empty(&re, "Added on 03/10/2014 by Foxtons"), "03/10/2014");
        assert_eq!(capture_or_empty(&re, "Marketed by Foxtons"), "");
    }

    #[test]
    fn test_remove_first_only_touches_first_occurrence() {
        assert_eq!(remove_first("Flat in Soho, Soho", "Soho"), "Flat in , Soho");
        assert_eq!(remove_first("  2 bed flat ", ""), "2 bed flat");
    }

    #[test]
    fn test_strip_pattern_anchored_suffix() {
        let re = Regex::new(r"More details$").unwrap();
        assert_eq!(strip_pattern(&re, "Garden flat. More details"), "Garden flat.");
        assert_eq!(
            strip_pattern(&re, "More details about the garden"),
            "More details about the garden"
        );
    }
}
