// ============================================================
// Error Types
// ============================================================
// Typed failures raised by the data, ML and infra layers.
// The CLI layer wraps these in anyhow and decides whether the
// process keeps going (inspect) or exits non-zero (clean/train).

use std::{io, path::PathBuf};
use thiserror::Error;

/// Every recoverable failure in the workflow.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The input file does not exist
    #[error("the file '{}' was not found", path.display())]
    MissingFile { path: PathBuf },

    /// A required column is absent from the header row
    #[error("column '{column}' is missing from '{}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    /// The file exists but could not be parsed as CSV
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file exists but could not be opened for reading
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// The cleaned CSV or the model artifact could not be written
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// The model artifact could not be (de)serialised
    #[error("invalid model artifact '{}': {source}", path.display())]
    Artifact {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Fitting was asked to do something impossible (no rows, ragged input)
    #[error("training failed: {0}")]
    Training(String),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WorkflowError {
    /// True when the failure is an absent input file.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, WorkflowError::MissingFile { .. })
    }
}

pub type WorkflowResult<T> = std::result::Result<T, WorkflowError>;
