//! ro-itemdb CLI
//!
//! Command-line interface for converting the client's item tables.

mod cli_types;
mod commands;
mod error;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands};

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(if verbose {
            Some(env_logger::TimestampPrecision::Millis)
        } else {
            None
        })
        .format_target(verbose)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Process {
            data_dir,
            dry_run,
            config,
            pretty,
        } => commands::process::run_process(data_dir, config, dry_run, pretty, cli.quiet),
        Commands::Index { db_file, out_file } => {
            commands::index::run_index(&db_file, &out_file, cli.quiet)
        }
    };

    if let Err(e) = result {
        eprintln!(
            "{} {e}",
            "error:".if_supports_color(Stderr, |t| t.red())
        );
        std::process::exit(1);
    }
}
