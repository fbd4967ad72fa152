use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("cannot fit a model on an empty dataset")]
    EmptyDataset,

    #[error("column '{field}' is not part of the dataset schema")]
    UnknownFeatureSchema { field: String },

    #[error("no persisted model found at {}", path.display())]
    ModelNotFound { path: PathBuf },

    #[error("persisted model at {} is corrupt: {reason}", path.display())]
    ModelCorrupt { path: PathBuf, reason: String },

    #[error("i/o failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid JSON record: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: record is not a JSON object")]
    NotAnObject { line: usize },

    #[error("line {line}: field '{field}' holds a non-categorical value")]
    UnsupportedValue { line: usize, field: String },

    #[error("line {line}: {source}")]
    Schema {
        line: usize,
        #[source]
        source: ClassifierError,
    },

    #[error("holdout fraction must lie in [0, 1), got {0}")]
    InvalidHoldout(f64),
}
