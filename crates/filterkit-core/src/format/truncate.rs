pub const DEFAULT_TRUNCATE_LENGTH: usize = 10;
pub const DEFAULT_TRUNCATE_END: &str = "...";

/// Cuts `text` down to `length` characters, `end` marker included.
///
/// Text is left alone when it fits, or when dropping the marker's worth of
/// characters would already make it fit.
pub fn truncate(text: &str, length: Option<usize>, end: Option<&str>) -> String {
    let length = length.unwrap_or(DEFAULT_TRUNCATE_LENGTH);
    let end = end.unwrap_or(DEFAULT_TRUNCATE_END);

    let text_len = text.chars().count();
    let end_len = end.chars().count();
    if text_len <= length || text_len.saturating_sub(end_len) <= length {
        return text.to_string();
    }

    let keep = length.saturating_sub(end_len);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(end);
    out
}

#[cfg(test)]
mod tests {
    use super::truncate;

    const SENTENCE: &str = "This is a really long sentance just for demonstration purposes, and has no real meaning or value.";

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("short", None, None), "short");
        assert_eq!(truncate("exactly10!", None, None), "exactly10!");
    }

    #[test]
    fn text_within_marker_slack_is_unchanged() {
        assert_eq!(truncate("thirteen char", None, None), "thirteen char");
    }

    #[test]
    fn long_text_uses_defaults() {
        assert_eq!(truncate("abcdefghijklmnop", None, None), "abcdefg...");
    }

    #[test]
    fn marker_counts_toward_length() {
        assert_eq!(truncate(SENTENCE, Some(19), None), "This is a really...");
        assert_eq!(
            truncate(SENTENCE, Some(16), Some("... [read more]")),
            "T... [read more]"
        );
    }

    #[test]
    fn marker_longer_than_length_keeps_only_marker() {
        assert_eq!(truncate(SENTENCE, Some(2), Some("[more]")), "[more]");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(truncate("ééééééééééééé", Some(5), Some("…")), "éééé…");
    }
}
