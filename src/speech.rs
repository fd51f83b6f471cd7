//! Text-to-speech preparation
//!
//! Reports come back as markdown; platform speech services read the raw
//! punctuation aloud, so it is stripped before playback.

/// Strip markdown punctuation for cleaner reading.
pub fn strip_markdown(markdown: &str) -> String {
    markdown
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '`' | '_' | '~'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_heading_and_emphasis_markers() {
        assert_eq!(
            strip_markdown("## Bug Summary\n**Off-by-one** in `loop`"),
            " Bug Summary\nOff-by-one in loop"
        );
    }

    #[test]
    fn test_keeps_plain_text_and_newlines() {
        let text = "Line one.\nLine two, with punctuation!";
        assert_eq!(strip_markdown(text), text);
    }

    #[test]
    fn test_strips_strikethrough_and_underscores() {
        assert_eq!(strip_markdown("~~wrong~~ _emphasis_"), "wrong emphasis");
    }
}
