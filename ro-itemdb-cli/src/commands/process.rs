use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ro_itemdb_lib::{DataLayout, ProcessOptions, ProcessReport, process_data};

use crate::error::CliError;

pub(crate) fn run_process(
    data_dir: PathBuf,
    config: Option<PathBuf>,
    dry_run: bool,
    pretty: bool,
    quiet: bool,
) -> Result<(), CliError> {
    if !data_dir.is_dir() {
        return Err(CliError::NotADirectory(data_dir));
    }

    let layout = DataLayout::load(data_dir, config.as_deref())?;

    log::info!(
        "Processing item tables in: {}",
        layout.root().display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no assets will be moved and no output written"
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let options = ProcessOptions { dry_run, pretty };
    let report = process_data(&layout, &options)?;

    if !quiet {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &ProcessReport) {
    println!();
    println!(
        "{} {} items ({} with descriptions)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.items,
        report.with_description,
    );

    match &report.relocations {
        Some(summary) => println!(
            "  Assets: {} moved, {} missing",
            summary.moved.if_supports_color(Stdout, |t| t.green()),
            summary.missing.if_supports_color(Stdout, |t| t.yellow()),
        ),
        None => println!(
            "  Assets: {} planned (dry run)",
            report.planned_relocations.if_supports_color(Stdout, |t| t.cyan()),
        ),
    }

    for (prop, count) in &report.metaprop_counts {
        println!(
            "  {}: {} distinct values",
            prop.if_supports_color(Stdout, |t| t.bold()),
            count
        );
    }

    if report.written {
        println!(
            "  Wrote {}",
            report.database_path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}
