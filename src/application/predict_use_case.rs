// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Loads the saved artifact on its own (no training data needed)
// and labels either the built-in sample sentences or texts
// supplied by the user.

use crate::application::config::WorkflowConfig;
use crate::error::WorkflowResult;
use crate::infra::model_store::ModelStore;
use crate::ml::{inferencer::Inferencer, pipeline::Prediction};

pub struct PredictUseCase {
    inferencer: Inferencer,
}

impl PredictUseCase {
    pub fn new(config: &WorkflowConfig) -> WorkflowResult<Self> {
        let store      = ModelStore::new(&config.model_path);
        let inferencer = Inferencer::from_store(&store)?;
        Ok(Self { inferencer })
    }

    /// Predict `texts`, or the sample sentences when `texts` is empty.
    pub fn execute(&self, texts: &[String]) -> Vec<(String, Prediction)> {
        if texts.is_empty() {
            return self.inferencer.predict_samples();
        }
        let predictions = self.inferencer.predict(texts);
        texts.iter().cloned().zip(predictions).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{
        inferencer::SAMPLE_INPUTS,
        pipeline::{PipelineParams, TrainingPipeline},
    };

    fn saved_config(dir: &tempfile::TempDir) -> WorkflowConfig {
        let cfg = WorkflowConfig {
            model_path: dir.path().join("model.json"),
            ..Default::default()
        };
        let pipeline = TrainingPipeline::fit(
            &PipelineParams::default(),
            &["good evening to you".to_string(), "buona sera a te".to_string()],
            &["English".to_string(), "Italian".to_string()],
        )
        .unwrap();
        ModelStore::new(&cfg.model_path).save(&pipeline).unwrap();
        cfg
    }

    #[test]
    fn test_defaults_to_samples() {
        let dir = tempfile::tempdir().unwrap();
        let uc  = PredictUseCase::new(&saved_config(&dir)).unwrap();
        assert_eq!(uc.execute(&[]).len(), SAMPLE_INPUTS.len());
    }

    #[test]
    fn test_same_input_twice_same_output() {
        let dir   = tempfile::tempdir().unwrap();
        let uc    = PredictUseCase::new(&saved_config(&dir)).unwrap();
        let texts = vec!["good evening".to_string(), "buona sera".to_string()];
        let first = uc.execute(&texts);
        assert_eq!(first, uc.execute(&texts));
        assert_eq!(first[0].1.language, "English");
        assert_eq!(first[1].1.language, "Italian");
    }

    #[test]
    fn test_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = WorkflowConfig {
            model_path: dir.path().join("absent.json"),
            ..Default::default()
        };
        assert!(PredictUseCase::new(&cfg).is_err());
    }
}
