//! Ingest and mapping error types.

use std::path::PathBuf;

/// Errors raised while loading an e-form export.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("CSV file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("failed to read CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("export has a header but no data rows")]
    Empty,
    #[error("export has an empty column name at position {0}")]
    EmptyColumnName(usize),
    #[error("export repeats column name '{0}'")]
    DuplicateColumnName(String),
}

pub type IngestResult<T> = std::result::Result<T, IngestError>;

/// Errors raised while mapping records into a bundle.
///
/// Any error means the whole batch failed; no partial bundle is returned.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("record set has no rows")]
    NoRows,
}

pub type MapResult<T> = std::result::Result<T, MapError>;
