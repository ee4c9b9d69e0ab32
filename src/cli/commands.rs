//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daylink")]
#[command(about = "Keeps date links between daily journal and standup notes current", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./.daylink.toml, then ~/.daylink.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Point previous/next/cross-reference links in a note at existing notes
    FixLinks {
        /// Note file named YYYY-MM-DD.md under a journal or standup directory
        file: PathBuf,

        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Write a default configuration file
    GenerateConfig {
        /// Destination path
        #[arg(short, long, default_value = ".daylink.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Write plain defaults without explanatory comments
        #[arg(long)]
        minimal: bool,
    },
}
