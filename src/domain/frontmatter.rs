//! Front matter detection and splicing.

use regex::Regex;
use std::sync::OnceLock;

/// Anchored, non-greedy match for a leading front matter block: a `---`
/// line at offset zero, the region, then the nearest following `---`.
fn front_matter_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)\A---\n(.*?)\n---(.*)\z").unwrap())
}

/// The front matter region of a document and everything after it.
///
/// The region is kept as opaque text; it is matched structurally, never
/// parsed into a YAML data model, so unrelated content round-trips
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Raw text between the delimiters, without the delimiter lines.
    pub yaml: &'a str,
    /// Everything after the closing delimiter, starting at the character
    /// that follows the closing `---`.
    pub rest: &'a str,
}

/// Split a document into its front matter region and the remainder.
///
/// Returns `None` when the document does not begin with a front matter
/// block; front-matter-scoped rules treat that as a no-op, not an error.
/// The non-greedy region match means a `---` appearing later in the body
/// never extends the block.
pub fn locate(content: &str) -> Option<FrontMatter<'_>> {
    let captures = front_matter_regex().captures(content)?;
    let yaml = captures.get(1)?.as_str();
    let rest = captures.get(2)?.as_str();
    Some(FrontMatter { yaml, rest })
}

/// Reassemble a document from a rewritten front matter region.
pub fn splice(yaml: &str, rest: &str) -> String {
    format!("---\n{}\n---{}", yaml, rest)
}
