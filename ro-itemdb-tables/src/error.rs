use std::path::PathBuf;

/// Errors that can occur while loading a table file.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Failed to read table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TableError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
