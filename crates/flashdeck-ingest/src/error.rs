use std::path::PathBuf;

/// Hard ingestion failures. Any of these aborts the whole import.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("no data found in CSV")]
    EmptyInput,

    #[error("CSV must have at least 2 columns (found {found})")]
    InsufficientColumns { found: usize },

    #[error("no valid word pairs found")]
    NoValidEntries,

    #[error("too many words: {count} (max {max})")]
    TooManyEntries { count: usize, max: usize },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
