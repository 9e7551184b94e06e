// ============================================================
// Layer 2 — Workflow Configuration
// ============================================================
// Every file path and hyperparameter used by the use cases.
//
// Resolution order (later wins):
//   1. WorkflowConfig::default()
//   2. JSON file passed with --config (missing keys keep defaults)
//   3. Per-command CLI flags
//
// The resolved config is validated once, then passed by
// reference into each use case.

use std::{fs, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::error::{WorkflowError, WorkflowResult};
use crate::ml::{pipeline::PipelineParams, vectorizer::VectorizerParams};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub raw_data_path:     PathBuf,
    pub cleaned_data_path: PathBuf,
    pub model_path:        PathBuf,
    pub test_fraction:     f64,
    pub seed:              u64,
    pub preview_rows:      usize,
    pub top_languages:     usize,
    pub ngram_min:         usize,
    pub ngram_max:         usize,
    pub min_token_len:     usize,
    pub alpha:             f64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            raw_data_path:     PathBuf::from("Language Detection.csv"),
            cleaned_data_path: PathBuf::from("Language_Detection_Cleaned.csv"),
            model_path:        PathBuf::from("language_detection_model.json"),
            test_fraction:     0.2,
            seed:              42,
            preview_rows:      10,
            top_languages:     10,
            ngram_min:         1,
            ngram_max:         2,
            min_token_len:     2,
            alpha:             1.0,
        }
    }
}

impl WorkflowConfig {
    /// Read a JSON config file. Keys that are absent keep their defaults.
    pub fn from_file(path: &Path) -> WorkflowResult<Self> {
        if !path.is_file() {
            return Err(WorkflowError::MissingFile { path: path.to_path_buf() });
        }
        let json = fs::read_to_string(path).map_err(|source| WorkflowError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = serde_json::from_str(&json)
            .map_err(|e| WorkflowError::InvalidConfig(format!("'{}': {e}", path.display())))?;

        tracing::debug!("Loaded configuration from '{}'", path.display());
        Ok(cfg)
    }

    /// Defaults, or the file at `path` when one is given.
    pub fn load(path: Option<&Path>) -> WorkflowResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None    => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> WorkflowResult<()> {
        if !(0.0..1.0).contains(&self.test_fraction) {
            return Err(WorkflowError::InvalidConfig(format!(
                "test_fraction must be in [0, 1), got {}",
                self.test_fraction
            )));
        }
        if self.ngram_min == 0 || self.ngram_min > self.ngram_max {
            return Err(WorkflowError::InvalidConfig(format!(
                "n-gram range ({}, {}) must satisfy 1 <= min <= max",
                self.ngram_min, self.ngram_max
            )));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(WorkflowError::InvalidConfig(format!(
                "alpha must be positive, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    pub fn pipeline_params(&self) -> PipelineParams {
        PipelineParams {
            vectorizer: VectorizerParams {
                ngram_min:     self.ngram_min,
                ngram_max:     self.ngram_max,
                min_token_len: self.min_token_len,
            },
            alpha: self.alpha,
        }
    }
}
