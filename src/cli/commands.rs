//! CLI command definitions

use crate::domain::rules::TransformRule;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mdtidy")]
#[command(about = "Batch normalizer for markdown files with YAML front matter", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert bracketed front matter tag lists to block lists
    Tags {
        /// File or directory to process
        target: PathBuf,

        /// Report changes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Normalize front matter list indentation to two spaces
    Indent {
        /// File or directory to process
        target: PathBuf,

        /// Report changes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Escape '#' inside markdown link text
    Links {
        /// File or directory to process
        target: PathBuf,

        /// Report changes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Run every normalization rule
    All {
        /// File or directory to process
        target: PathBuf,

        /// Report changes without writing files
        #[arg(long)]
        dry_run: bool,
    },
}

impl Commands {
    /// Rule set selected by this command, in application order.
    pub fn rules(&self) -> Vec<TransformRule> {
        match self {
            Commands::Tags { .. } => vec![TransformRule::BracketTags],
            Commands::Indent { .. } => vec![TransformRule::ListIndent],
            Commands::Links { .. } => vec![TransformRule::HashEscape],
            Commands::All { .. } => TransformRule::ALL.to_vec(),
        }
    }

    pub fn target(&self) -> &Path {
        match self {
            Commands::Tags { target, .. }
            | Commands::Indent { target, .. }
            | Commands::Links { target, .. }
            | Commands::All { target, .. } => target,
        }
    }

    pub fn dry_run(&self) -> bool {
        match self {
            Commands::Tags { dry_run, .. }
            | Commands::Indent { dry_run, .. }
            | Commands::Links { dry_run, .. }
            | Commands::All { dry_run, .. } => *dry_run,
        }
    }
}
