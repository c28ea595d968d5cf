//! Bracketed tag list conversion.

use regex::Regex;
use std::sync::OnceLock;

/// Matches a full `tags: [ ... ]` line, whitespace-tolerant around the
/// brackets but never across line boundaries.
fn bracket_tags_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^tags:[ \t]*\[([^\]]*)\][ \t]*$").unwrap())
}

/// Convert a bracketed `tags: [a, b]` line into a 2-space indented block
/// list.
///
/// Elements are split on commas and trimmed; empty elements are dropped.
/// An empty result keeps the explicit inline form `tags: []` rather than
/// becoming a block list. Idempotent: block form no longer contains the
/// bracket pattern.
pub fn convert_bracket_tags(yaml: &str) -> String {
    bracket_tags_regex()
        .replace_all(yaml, |captures: &regex::Captures<'_>| {
            let tags: Vec<&str> = captures[1]
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .collect();

            if tags.is_empty() {
                return "tags: []".to_string();
            }

            let mut replacement = String::from("tags:");
            for tag in tags {
                replacement.push_str("\n  - ");
                replacement.push_str(tag);
            }
            replacement
        })
        .to_string()
}
