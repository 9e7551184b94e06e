// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads the raw dataset and computes diagnostics without
// changing anything on disk:
//
//   Step 1: Load the raw CSV            (Layer 4 - loader)
//   Step 2: Take the preview rows       (Layer 4 - dataset)
//   Step 3: Build the quality report    (Layer 4 - quality)

use crate::application::config::WorkflowConfig;
use crate::data::{
    dataset::Row,
    loader::CsvLoader,
    quality::build_report,
};
use crate::domain::{quality_report::QualityReport, traits::DatasetSource};
use crate::error::WorkflowResult;

/// What `inspect` shows the user.
#[derive(Debug, Clone)]
pub struct InspectionResult {
    pub headers: Vec<String>,
    pub preview: Vec<Row>,
    pub report:  QualityReport,
}

pub struct InspectUseCase<'a> {
    config: &'a WorkflowConfig,
}

impl<'a> InspectUseCase<'a> {
    pub fn new(config: &'a WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> WorkflowResult<InspectionResult> {
        let dataset = CsvLoader::new(&self.config.raw_data_path).load()?;
        let report  = build_report(&dataset)?;

        tracing::info!(
            "Inspected {} rows: {} missing cells, {} blank texts, {} languages",
            report.row_count,
            report.total_missing(),
            report.empty_text_count,
            report.unique_languages()
        );

        Ok(InspectionResult {
            headers: dataset.headers().to_vec(),
            preview: dataset.head(self.config.preview_rows).to_vec(),
            report,
        })
    }
}
