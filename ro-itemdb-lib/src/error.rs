use std::path::PathBuf;

use ro_itemdb_tables::TableError;

/// Errors that abort a processing run.
///
/// Data quirks (malformed lines, unknown labels, unparsable numbers, missing
/// assets) are never errors; only infrastructure problems end up here.
#[derive(Debug, thiserror::Error)]
pub enum ItemDbError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to move {} -> {}: {error}", from.display(), to.display())]
    Relocation {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl ItemDbError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
