//! Normalize use case

use crate::domain::rules::TransformRule;
use crate::error::Result;
use crate::infrastructure::rewriter::{self, Outcome, SkipReason};
use crate::infrastructure::walker;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub rules: Vec<TransformRule>,
    pub dry_run: bool,
}

/// Accumulated outcomes of one run over a target.
///
/// Threaded through the walk as an explicit value; the counters are the
/// only cross-file state.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    pub scanned_files: usize,
    pub changed: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    pub failed: Vec<(PathBuf, String)>,
    pub dry_run: bool,
}

impl NormalizeReport {
    pub fn changed_files(&self) -> usize {
        self.changed.len()
    }

    fn record(&mut self, path: &Path, outcome: Outcome) {
        self.scanned_files += 1;
        match outcome {
            Outcome::Unchanged => {}
            Outcome::Changed => self.changed.push(path.to_path_buf()),
            Outcome::Skipped(reason) => self.skipped.push((path.to_path_buf(), reason)),
            Outcome::Failed(error) => self.failed.push((path.to_path_buf(), error.to_string())),
        }
    }
}

/// Apply a rule set to a file, or to every text file under a directory.
///
/// Per-file failures are recorded in the report and never abort the
/// batch; the only fatal condition is an invalid target path.
pub fn normalize_target(target: &Path, options: &NormalizeOptions) -> Result<NormalizeReport> {
    let files = walker::collect_files(target)?;

    let mut report = NormalizeReport {
        dry_run: options.dry_run,
        ..Default::default()
    };

    for file in &files {
        let outcome = rewriter::rewrite(file, &options.rules, options.dry_run);
        report.record(file, outcome);
    }

    Ok(report)
}
