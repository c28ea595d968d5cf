//! Candidate file discovery.

use crate::error::{MdtidyError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffixes eligible for processing when the target is a directory,
/// matched case-insensitively.
pub const TEXT_EXTENSIONS: [&str; 5] = [".md", ".markdown", ".txt", ".rst", ".text"];

/// Case-insensitive suffix match against the text extension set.
pub fn is_text_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    TEXT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Collect the files to process under a target path.
///
/// A file target is returned as-is, without an extension check. A
/// directory is visited recursively; every file passing the extension
/// filter is included, with no directory-name exclusions (dot
/// directories included). Unreadable entries are skipped so one bad
/// directory never aborts the walk. Results are sorted for deterministic
/// output.
pub fn collect_files(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        return Ok(vec![target.to_path_buf()]);
    }

    if !target.is_dir() {
        return Err(MdtidyError::InvalidTarget(target.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(target) {
        let Ok(entry) = entry else {
            continue;
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if is_text_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
