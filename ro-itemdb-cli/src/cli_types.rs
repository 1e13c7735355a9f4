//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ro-itemdb")]
#[command(about = "Extract the client's item tables into a JSON database", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build processed/db.json and relocate item bitmaps
    Process {
        /// Data root containing the raw/ directory
        data_dir: PathBuf,

        /// Show what would be done without moving assets or writing output
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Layout config file (default: <DATA_DIR>/itemdb.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON database
        #[arg(long)]
        pretty: bool,
    },

    /// Build a search index from a generated database
    Index {
        /// Database produced by `process`
        db_file: PathBuf,

        /// Where to write the index JSON
        out_file: PathBuf,
    },
}
