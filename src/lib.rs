//! mdtidy - Batch markdown/front matter normalizer
//!
//! A command-line tool that normalizes YAML front matter list syntax and
//! escapes stray `#` characters in markdown link text, idempotently,
//! across a single file or a whole directory tree.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MdtidyError;
