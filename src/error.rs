//! Error types for mdtidy

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the mdtidy application
#[derive(Debug, Error)]
pub enum MdtidyError {
    #[error("Target not found: {0}")]
    InvalidTarget(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MdtidyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MdtidyError::InvalidTarget(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MdtidyError::InvalidTarget(path) => {
                format!(
                    "Target not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path for typos\n\
                    • Pass a markdown file or a directory containing text files\n\
                    • Use '.' to process the current directory",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MdtidyError
pub type Result<T> = std::result::Result<T, MdtidyError>;
