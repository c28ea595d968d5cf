//! Infrastructure layer - File system access

pub mod rewriter;
pub mod walker;

pub use rewriter::{Outcome, SkipReason};
pub use walker::TEXT_EXTENSIONS;
