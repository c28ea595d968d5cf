//! Markdown link text hash escaping.

use regex::Regex;
use std::sync::OnceLock;

/// Matches an inline link `[linktext](url)` where linktext contains no
/// `]` and url contains no `)`.
fn inline_link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]*)\)").unwrap())
}

/// Escape `#` characters inside the text of every inline markdown link.
///
/// URLs are left untouched, as is any `#` outside link brackets. A `#`
/// already preceded by a backslash is not escaped again, which keeps the
/// transform idempotent. Multiple hashes per link and multiple links per
/// line are handled independently.
pub fn escape_link_hashes(text: &str) -> String {
    inline_link_regex()
        .replace_all(text, |captures: &regex::Captures<'_>| {
            format!("[{}]({})", escape_hashes(&captures[1]), &captures[2])
        })
        .to_string()
}

// The regex crate has no look-behind, so the "not already escaped" check
// is a character scan tracking the previous backslash.
fn escape_hashes(linktext: &str) -> String {
    let mut escaped = String::with_capacity(linktext.len());
    let mut after_backslash = false;

    for ch in linktext.chars() {
        if ch == '#' && !after_backslash {
            escaped.push('\\');
        }
        escaped.push(ch);
        after_backslash = ch == '\\';
    }

    escaped
}
