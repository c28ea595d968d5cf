//! Normalization rules applied to documents.

pub mod indent;
pub mod links;
pub mod tags;

pub use indent::normalize_list_indent;
pub use links::escape_link_hashes;
pub use tags::convert_bracket_tags;

use crate::domain::frontmatter;

/// Result of applying one or more rules to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub content: String,
    pub changed: bool,
}

/// The closed set of normalization rules.
///
/// The rule set is fixed and small, so a sum type matched explicitly is
/// preferred over open-ended dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformRule {
    /// Convert bracketed front matter tag lists to block lists.
    BracketTags,
    /// Normalize front matter list item indentation to two spaces.
    ListIndent,
    /// Escape `#` inside markdown link text.
    HashEscape,
}

impl TransformRule {
    /// Every rule, in the order the `all` command applies them.
    pub const ALL: [TransformRule; 3] = [
        TransformRule::BracketTags,
        TransformRule::ListIndent,
        TransformRule::HashEscape,
    ];

    /// Short name used in help and log output.
    pub fn name(&self) -> &'static str {
        match self {
            TransformRule::BracketTags => "tags",
            TransformRule::ListIndent => "indent",
            TransformRule::HashEscape => "links",
        }
    }

    /// Apply this rule to a full document.
    ///
    /// Front-matter-scoped rules leave documents without front matter
    /// untouched. The hash escape runs over the whole text, independent
    /// of front matter detection.
    pub fn apply(&self, content: &str) -> TransformResult {
        let next = match self {
            TransformRule::BracketTags => apply_to_front_matter(content, convert_bracket_tags),
            TransformRule::ListIndent => apply_to_front_matter(content, normalize_list_indent),
            TransformRule::HashEscape => escape_link_hashes(content),
        };

        let changed = next != content;
        TransformResult {
            content: next,
            changed,
        }
    }
}

/// Apply a rule sequence in order, reporting whether any rule changed
/// the text.
pub fn apply_rules(rules: &[TransformRule], content: &str) -> TransformResult {
    let mut current = content.to_string();
    let mut changed = false;

    for rule in rules {
        let result = rule.apply(&current);
        changed |= result.changed;
        current = result.content;
    }

    TransformResult {
        content: current,
        changed,
    }
}

fn apply_to_front_matter(content: &str, transform: impl Fn(&str) -> String) -> String {
    let Some(block) = frontmatter::locate(content) else {
        return content.to_string();
    };

    let rewritten = transform(block.yaml);
    if rewritten == block.yaml {
        return content.to_string();
    }

    frontmatter::splice(&rewritten, block.rest)
}
