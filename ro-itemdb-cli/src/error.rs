use std::path::PathBuf;

use thiserror::Error;

use ro_itemdb_lib::ItemDbError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The data root does not exist or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Pipeline failure
    #[error(transparent)]
    ItemDb(#[from] ItemDbError),
}
