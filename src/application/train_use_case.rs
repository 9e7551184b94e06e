// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training run in order:
//
//   Step 1: Load the cleaned CSV          (Layer 4 - data)
//   Step 2: Drop residual missing cells   (Layer 4 - data)
//   Step 3: Split, fit, evaluate          (Layer 5 - ml)
//   Step 4: Save the fitted pipeline      (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::path::PathBuf;

use crate::application::config::WorkflowConfig;
use crate::data::loader::CsvLoader;
use crate::domain::traits::{DatasetSource, LanguageClassifier};
use crate::error::WorkflowResult;
use crate::infra::{metrics::EvaluationMetrics, model_store::ModelStore};
use crate::ml::trainer::run_training;

/// Summary of one completed training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub accuracy:        f64,
    pub metrics:         EvaluationMetrics,
    pub train_rows:      usize,
    pub test_rows:       usize,
    pub vocabulary_size: usize,
    pub languages:       Vec<String>,
    pub model_path:      PathBuf,
}

pub struct TrainUseCase<'a> {
    config: &'a WorkflowConfig,
}

impl<'a> TrainUseCase<'a> {
    pub fn new(config: &'a WorkflowConfig) -> Self {
        Self { config }
    }

    /// Execute the training run end to end and return its report.
    pub fn execute(&self) -> WorkflowResult<TrainingReport> {
        let cfg = self.config;

        // ── Step 1 + 2: Load cleaned data, drop any residual nulls ───────────
        let dataset = CsvLoader::new(&cfg.cleaned_data_path).load()?;
        let loaded  = dataset.len();
        let records = dataset.drop_missing().into_records()?;
        if records.len() < loaded {
            tracing::warn!("Dropped {} rows with missing values", loaded - records.len());
        }

        // ── Step 3: Split / fit / evaluate ────────────────────────────────────
        let outcome = run_training(cfg, records)?;

        // ── Step 4: Persist the fitted pipeline ───────────────────────────────
        tracing::info!("Saving the model to '{}'...", cfg.model_path.display());
        ModelStore::new(&cfg.model_path).save(&outcome.pipeline)?;

        Ok(TrainingReport {
            accuracy:        outcome.metrics.accuracy(),
            vocabulary_size: outcome.pipeline.vocabulary_size(),
            languages:       outcome.pipeline.classes().to_vec(),
            metrics:         outcome.metrics,
            train_rows:      outcome.train_rows,
            test_rows:       outcome.test_rows,
            model_path:      cfg.model_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config(dir: &tempfile::TempDir) -> WorkflowConfig {
        WorkflowConfig {
            cleaned_data_path: dir.path().join("clean.csv"),
            model_path:        dir.path().join("model.json"),
            ..Default::default()
        }
    }

    #[test]
    fn test_train_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir);

        let mut body = String::from("Text,Language\n");
        for i in 0..20 {
            body.push_str(&format!("the quick brown fox number {i},English\n"));
            body.push_str(&format!("der schnelle braune fuchs nummer {i},German\n"));
        }
        // residual null row is skipped
        body.push_str(",German\n");
        fs::write(&cfg.cleaned_data_path, body).unwrap();

        let report = TrainUseCase::new(&cfg).execute().unwrap();
        assert_eq!(report.train_rows + report.test_rows, 40);
        assert_eq!(report.languages, vec!["English".to_string(), "German".to_string()]);
        assert!(report.accuracy >= 0.9);
        assert!(cfg.model_path.is_file());
    }

    #[test]
    fn test_missing_cleaned_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir);
        let err = TrainUseCase::new(&cfg).execute().unwrap_err();
        assert!(err.is_missing_file());
        assert!(!cfg.model_path.exists());
    }
}
