//! Output formatting utilities

use crate::application::normalize::NormalizeReport;

/// Format per-file change and skip lines for display.
pub fn format_file_lines(report: &NormalizeReport) -> String {
    let mut output = String::new();

    for path in &report.changed {
        if report.dry_run {
            output.push_str(&format!("would update: {}\n", path.display()));
        } else {
            output.push_str(&format!("updated: {}\n", path.display()));
        }
    }

    for (path, reason) in &report.skipped {
        output.push_str(&format!("skipped ({}): {}\n", reason, path.display()));
    }

    output
}

/// Format per-file failure lines, intended for stderr.
pub fn format_failures(report: &NormalizeReport) -> String {
    let mut output = String::new();
    for (path, cause) in &report.failed {
        output.push_str(&format!("error: {}: {}\n", path.display(), cause));
    }
    output
}

/// Format the closing summary line.
pub fn format_summary(report: &NormalizeReport) -> String {
    if report.dry_run {
        format!(
            "Dry run: {} file(s) would be updated.",
            report.changed_files()
        )
    } else {
        format!("Updated {} file(s).", report.changed_files())
    }
}
