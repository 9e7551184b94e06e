// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Labels new text with a pipeline loaded from disk. Input is
// run through the same TextNormalizer the cleaner applies, so
// raw sentences produce the same terms the model was fitted on.

use crate::data::normalizer::TextNormalizer;
use crate::error::WorkflowResult;
use crate::infra::model_store::ModelStore;
use crate::ml::pipeline::{Prediction, TrainingPipeline};

/// Fixed multilingual sentences used to smoke-test a saved model.
pub const SAMPLE_INPUTS: &[&str] = &[
    "This is a test of the language detection system.",
    "Ceci est un test du système de détection de langue.",
    "Este es un sistema de prueba de detección de idioma.",
    "Это тест системы определения языка.",
    "هذا اختبار لنظام كشف اللغة",
    "Questo è un test del sistema di rilevamento della lingua.",
    "Dit is een test van het taaldetectiesysteem.",
];

pub struct Inferencer {
    pipeline:   TrainingPipeline,
    normalizer: TextNormalizer,
}

impl Inferencer {
    /// Load the artifact independently of any training run.
    pub fn from_store(store: &ModelStore) -> WorkflowResult<Self> {
        let pipeline = store.load()?;
        tracing::debug!("Inferencer ready ({} features)", pipeline.vocabulary_size());
        Ok(Self::new(pipeline))
    }

    pub fn new(pipeline: TrainingPipeline) -> Self {
        Self { pipeline, normalizer: TextNormalizer::new() }
    }

    /// Normalise each text, then predict. Output order matches input.
    pub fn predict(&self, texts: &[String]) -> Vec<Prediction> {
        let cleaned: Vec<String> = texts.iter().map(|t| self.normalizer.normalize(t)).collect();
        self.pipeline.predict_with_confidence(&cleaned)
    }

    /// Predict the built-in sample sentences.
    pub fn predict_samples(&self) -> Vec<(String, Prediction)> {
        let texts: Vec<String> = SAMPLE_INPUTS.iter().map(|s| s.to_string()).collect();
        let predictions = self.predict(&texts);
        texts.into_iter().zip(predictions).collect()
    }
}
