use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ro_itemdb_lib::build_search_index;

use crate::error::CliError;

pub(crate) fn run_index(db_file: &Path, out_file: &Path, quiet: bool) -> Result<(), CliError> {
    let index = build_search_index(db_file, out_file)?;

    if !quiet {
        println!(
            "{} Indexed {} items, {} terms -> {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            index.documents.len(),
            index.terms.len(),
            out_file.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    Ok(())
}
