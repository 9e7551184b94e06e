// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads a delimited file with a header row into a Dataset using
// the csv crate.
//
// Cell handling mirrors what a dataframe library would infer:
//   - an empty cell is missing
//   - the usual NA spellings ("NaN", "NULL", "N/A", ...) are missing
//   - anything else, including whitespace-only text, is a value
//
// A missing file is not a panic: it comes back as
// WorkflowError::MissingFile and the caller decides what to do.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord};

use crate::data::dataset::{Dataset, Row};
use crate::domain::traits::DatasetSource;
use crate::error::{WorkflowError, WorkflowResult};

/// Cell spellings that are read as "missing".
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Loads a CSV file from disk.
/// Implements the DatasetSource trait from Layer 3.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for CsvLoader {
    fn load(&self) -> WorkflowResult<Dataset> {
        if !self.path.is_file() {
            tracing::error!("The file '{}' was not found", self.path.display());
            return Err(WorkflowError::MissingFile { path: self.path.clone() });
        }

        let read_err = |source: csv::Error| WorkflowError::Read {
            path: self.path.clone(),
            source,
        };

        // flexible(true): ragged rows are padded by Dataset::new
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(read_err)?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(read_err)?
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches('\u{feff}') } else { h })
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(parse_row(&record.map_err(read_err)?));
        }

        tracing::info!(
            "Successfully loaded data from '{}' ({} rows x {} columns)",
            self.path.display(),
            rows.len(),
            headers.len()
        );

        Ok(Dataset::new(self.path.clone(), headers, rows))
    }
}

/// Is this raw cell one of the recognised NA spellings?
pub fn is_na(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

fn parse_row(record: &StringRecord) -> Row {
    record
        .iter()
        .map(|cell| if is_na(cell) { None } else { Some(cell.to_string()) })
        .collect()
}
