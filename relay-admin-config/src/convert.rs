//! Conversions between stored lists and editor values.
//!
//! Textarea fields hold one string and tag-set fields hold strings; the payload
//! stores lists and numbers. Conversion happens here, at the call site, and
//! drops what does not parse instead of failing.

use std::str::FromStr;

use tracing::warn;

/// Join a list for display in a textarea, one entry per line.
pub fn lines_to_text(lines: &[String]) -> String {
    lines.join("\n")
}

/// Split textarea contents into a list: one entry per line, trimmed, blanks dropped.
pub fn text_to_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Numbers as tag strings.
pub fn numbers_to_tags<N: ToString>(numbers: &[N]) -> Vec<String> {
    numbers.iter().map(ToString::to_string).collect()
}

/// Tag strings back to numbers. Tags that fail to parse are dropped.
pub fn tags_to_numbers<N: FromStr>(tags: &[String]) -> Vec<N> {
    tags.iter()
        .filter_map(|tag| match tag.trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!(%tag, "dropping non-numeric tag");
                None
            }
        })
        .collect()
}
