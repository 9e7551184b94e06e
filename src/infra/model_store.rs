// ============================================================
// Layer 6 — Model Store
// ============================================================
// Saves and restores the fitted TrainingPipeline as one JSON
// artifact (vectorizer vocabulary + idf, classifier priors and
// likelihoods).
//
// File layout:
//   language_detection_model.json   ← whole pipeline, overwritten
//                                     by every training run
//
// The artifact is self-contained: loading it needs no access to
// the training data and reproduces identical predictions.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use crate::error::{WorkflowError, WorkflowResult};
use crate::ml::pipeline::TrainingPipeline;

/// Reads and writes the model artifact at a fixed path.
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Serialise `pipeline`, replacing any existing artifact.
    pub fn save(&self, pipeline: &TrainingPipeline) -> WorkflowResult<()> {
        let write_err = |source: std::io::Error| WorkflowError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let file       = File::create(&self.path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, pipeline).map_err(|e| write_err(e.into()))?;
        writer.flush().map_err(write_err)?;

        tracing::info!("Saved model artifact to '{}'", self.path.display());
        Ok(())
    }

    /// Load a previously saved pipeline.
    pub fn load(&self) -> WorkflowResult<TrainingPipeline> {
        if !self.exists() {
            return Err(WorkflowError::MissingFile { path: self.path.clone() });
        }

        let file = File::open(&self.path).map_err(|source| WorkflowError::Open {
            path: self.path.clone(),
            source,
        })?;
        let pipeline = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            WorkflowError::Artifact { path: self.path.clone(), source }
        })?;

        tracing::info!("Model loaded from '{}'", self.path.display());
        Ok(pipeline)
    }
}
