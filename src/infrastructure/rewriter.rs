//! File rewriting with change detection.

use crate::domain::rules::{self, TransformRule};
use std::fmt;
use std::fs;
use std::path::Path;

/// Why a file was skipped without being rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Content is not valid UTF-8 text.
    NonUtf8,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NonUtf8 => write!(f, "not valid UTF-8"),
        }
    }
}

/// Per-file result of a rewrite attempt.
#[derive(Debug)]
pub enum Outcome {
    /// The rules produced identical text; nothing was written.
    Unchanged,
    /// File content was (or, in dry run, would be) rewritten.
    Changed,
    /// File was not eligible for rewriting.
    Skipped(SkipReason),
    /// Read or write failed; the batch continues.
    Failed(std::io::Error),
}

/// Apply a rule set to one file, writing back only when the text changed.
///
/// Unchanged content is never written, so repeated runs over the same
/// tree leave modification timestamps alone.
pub fn rewrite(path: &Path, rule_set: &[TransformRule], dry_run: bool) -> Outcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => return Outcome::Failed(error),
    };

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => return Outcome::Skipped(SkipReason::NonUtf8),
    };

    let result = rules::apply_rules(rule_set, &content);
    if !result.changed {
        return Outcome::Unchanged;
    }

    if dry_run {
        return Outcome::Changed;
    }

    match write_atomic(path, &result.content) {
        Ok(()) => Outcome::Changed,
        Err(error) => Outcome::Failed(error),
    }
}

/// Replace file content using a best-effort atomic replace:
/// write to a temp file in the same directory, then rename into place.
///
/// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let tmp_name = format!(
        "{}.mdtidy-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("doc.md"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)?;

    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&tmp_path, path)
}
