// ============================================================
// Layer 2 — CleanUseCase
// ============================================================
// Raw CSV → cleaned Text,Language CSV, using the paths from
// the workflow configuration.

use crate::application::config::WorkflowConfig;
use crate::data::cleaner::{CleanSummary, DatasetCleaner};
use crate::error::WorkflowResult;

pub struct CleanUseCase<'a> {
    config:  &'a WorkflowConfig,
    cleaner: DatasetCleaner,
}

impl<'a> CleanUseCase<'a> {
    pub fn new(config: &'a WorkflowConfig) -> Self {
        Self { config, cleaner: DatasetCleaner::new() }
    }

    pub fn execute(&self) -> WorkflowResult<CleanSummary> {
        tracing::info!("Starting data cleaning process...");
        self.cleaner
            .clean(&self.config.raw_data_path, &self.config.cleaned_data_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_clean_uses_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = WorkflowConfig {
            raw_data_path:     dir.path().join("raw.csv"),
            cleaned_data_path: dir.path().join("out").join("clean.csv"),
            ..Default::default()
        };
        fs::write(&cfg.raw_data_path, "Text,Language\n\"Hello, World!\",English\n").unwrap();

        let summary = CleanUseCase::new(&cfg).execute().unwrap();
        assert_eq!(summary.rows_written, 1);
        assert_eq!(
            fs::read_to_string(&cfg.cleaned_data_path).unwrap(),
            "Text,Language\nhello world,English\n"
        );
    }
}
