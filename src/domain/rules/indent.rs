//! List item indentation normalization.

/// Normalize every list item line to a 2-space indent.
///
/// A list item line is any line whose leading run of spaces and tabs is
/// followed by `- `. Leading whitespace of any width (including none, and
/// tabs) is replaced with exactly two spaces; everything from the dash
/// onward is preserved. Line-local and stateless: nested lists flatten to
/// the same prefix. Idempotent by construction.
pub fn normalize_list_indent(yaml: &str) -> String {
    yaml.split('\n')
        .map(normalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_line(line: &str) -> String {
    let stripped = line.trim_start_matches([' ', '\t']);
    match stripped.strip_prefix("- ") {
        Some(item) => format!("  - {}", item),
        None => line.to_string(),
    }
}
