// ============================================================
// Layer 4 — Dataset Cleaner
// ============================================================
// Turns the raw table into the two-column training file:
//
//   raw CSV
//     │  CsvLoader::load            (fails fast if absent)
//     ▼
//   drop rows with any missing cell
//     │
//     ▼
//   TextNormalizer on every Text cell
//     │
//     ▼
//   drop rows whose Text is now empty
//     │
//     ▼
//   Text,Language CSV (overwrites the destination)
//
// Row counts are recorded after each stage in CleanSummary.

use std::{fs, path::Path};

use crate::data::{
    dataset::{Dataset, LANGUAGE_COLUMN, TEXT_COLUMN},
    loader::CsvLoader,
    normalizer::TextNormalizer,
};
use crate::domain::{record::Record, traits::DatasetSource};
use crate::error::{WorkflowError, WorkflowResult};

/// Row counts observed at each cleaning stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    pub loaded_rows:          usize,
    pub rows_after_drop_null: usize,
    pub rows_written:         usize,
}

impl CleanSummary {
    pub fn dropped_null(&self) -> usize {
        self.loaded_rows - self.rows_after_drop_null
    }

    pub fn dropped_empty(&self) -> usize {
        self.rows_after_drop_null - self.rows_written
    }
}

pub struct DatasetCleaner {
    normalizer: TextNormalizer,
}

impl DatasetCleaner {
    pub fn new() -> Self {
        Self { normalizer: TextNormalizer::new() }
    }

    /// Load `raw_path`, clean it, and write the result to `cleaned_path`.
    pub fn clean(&self, raw_path: &Path, cleaned_path: &Path) -> WorkflowResult<CleanSummary> {
        let raw = CsvLoader::new(raw_path).load()?;
        if raw.is_empty() {
            tracing::warn!("'{}' has a header but no data rows", raw_path.display());
        } else {
            tracing::info!("Loaded '{}': {} rows", raw_path.display(), raw.len());
        }

        let (records, summary) = self.clean_dataset(raw)?;

        write_records(cleaned_path, &records)?;
        tracing::info!(
            "Data cleaning complete. Cleaned data saved to '{}'",
            cleaned_path.display()
        );
        Ok(summary)
    }

    /// In-memory part of `clean`: no file is touched.
    pub fn clean_dataset(&self, raw: Dataset) -> WorkflowResult<(Vec<Record>, CleanSummary)> {
        // fail on a bad header before dropping anything
        raw.require_column(TEXT_COLUMN)?;
        raw.require_column(LANGUAGE_COLUMN)?;

        let loaded_rows = raw.len();

        let non_null = raw.drop_missing();
        let rows_after_drop_null = non_null.len();
        if rows_after_drop_null < loaded_rows {
            tracing::warn!("Dropped {} rows with missing values", loaded_rows - rows_after_drop_null);
        }
        tracing::info!("Rows after dropping missing values: {}", rows_after_drop_null);

        tracing::info!("Cleaning text data...");
        let records: Vec<Record> = non_null
            .into_records()?
            .into_iter()
            .map(|r| Record::new(self.normalizer.normalize(&r.text), r.language))
            .filter(|r| !r.text.is_empty())
            .collect();

        let summary = CleanSummary {
            loaded_rows,
            rows_after_drop_null,
            rows_written: records.len(),
        };
        if summary.dropped_empty() > 0 {
            tracing::warn!("Dropped {} rows whose text was empty after cleaning", summary.dropped_empty());
        }
        tracing::info!("Rows after removing empty text: {}", summary.rows_written);

        Ok((records, summary))
    }
}

impl Default for DatasetCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Write records as a `Text,Language` CSV with a header row,
/// replacing any existing file.
pub fn write_records(path: &Path, records: &[Record]) -> WorkflowResult<()> {
    let write_err = |source: std::io::Error| WorkflowError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| write_err(e.into()))?;

    // an empty table still gets its header
    if records.is_empty() {
        writer
            .write_record([TEXT_COLUMN, LANGUAGE_COLUMN])
            .map_err(|e| write_err(e.into()))?;
    }
    for record in records {
        writer.serialize(record).map_err(|e| write_err(e.into()))?;
    }
    writer.flush().map_err(write_err)?;

    tracing::debug!("Wrote {} records to '{}'", records.len(), path.display());
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_null_row_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let raw = write(
            &dir,
            "raw.csv",
            "Text,Language\nHello there,English\n,French\nBonjour!,French\nHola [3],Spanish\nCiao,Italian\n",
        );
        let out = dir.path().join("clean.csv");

        let summary = DatasetCleaner::new().clean(&raw, &out).unwrap();
        assert_eq!(summary.loaded_rows, 5);
        assert_eq!(summary.rows_after_drop_null, 4);
        assert!(summary.rows_written <= 4);

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            "Text,Language\nhello there,English\nbonjour,French\nhola,Spanish\nciao,Italian\n"
        );
    }

    #[test]
    fn test_rows_that_normalize_to_empty_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let raw = write(
            &dir,
            "raw.csv",
            "Text,Language\n,English\n123,English\n!!!,French\n[ref],German\n   ,Dutch\n",
        );
        let out = dir.path().join("clean.csv");

        let summary = DatasetCleaner::new().clean(&raw, &out).unwrap();
        assert_eq!(summary.rows_written, 0);
        assert_eq!(summary.dropped_null(), 1);
        assert_eq!(summary.dropped_empty(), 4);
        assert_eq!(fs::read_to_string(&out).unwrap(), "Text,Language\n");
    }

    #[test]
    fn test_extra_columns_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let raw = write(&dir, "raw.csv", "Id,Text,Language\n1,Good Day,English\n");
        let out = dir.path().join("clean.csv");

        DatasetCleaner::new().clean(&raw, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "Text,Language\ngood day,English\n");
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let raw = write(&dir, "raw.csv", "Text,Language\nHi there,English\n");
        let out = write(&dir, "clean.csv", "stale contents\nthat go away\n");

        DatasetCleaner::new().clean(&raw, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "Text,Language\nhi there,English\n");
    }

    #[test]
    fn test_missing_raw_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clean.csv");
        let err = DatasetCleaner::new()
            .clean(&dir.path().join("absent.csv"), &out)
            .unwrap_err();
        assert!(err.is_missing_file());
        assert!(!out.exists());
    }

    #[test]
    fn test_write_into_a_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_records(dir.path(), &[Record::new("a", "b")]).unwrap_err();
        assert!(matches!(err, WorkflowError::Write { .. }));
    }
}
