// ============================================================
// Layer 5 — Training Pipeline
// ============================================================
// Vectorizer and classifier fitted in sequence:
//
//   texts ──▶ TfidfVectorizer ──▶ sparse rows ──▶ MultinomialNb ──▶ labels
//
// A pipeline only exists in fitted form: `fit` is the sole
// constructor, so `predict` cannot be called on an untrained
// model. The whole struct is serde-serialisable and is what the
// model artifact on disk contains.

use serde::{Deserialize, Serialize};

use crate::domain::traits::LanguageClassifier;
use crate::error::{WorkflowError, WorkflowResult};
use crate::ml::{
    naive_bayes::MultinomialNb,
    vectorizer::{TfidfVectorizer, VectorizerParams},
};

/// Hyperparameters for both stages.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineParams {
    pub vectorizer: VectorizerParams,
    pub alpha:      f64,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self { vectorizer: VectorizerParams::default(), alpha: 1.0 }
    }
}

/// A label with the classifier's posterior probability for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub language:   String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPipeline {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
}

impl TrainingPipeline {
    /// Fit the vectorizer on `texts`, then the classifier on the
    /// vectorised texts and `labels`.
    pub fn fit(params: &PipelineParams, texts: &[String], labels: &[String]) -> WorkflowResult<Self> {
        if texts.len() != labels.len() {
            return Err(WorkflowError::Training(format!(
                "{} texts but {} labels",
                texts.len(),
                labels.len()
            )));
        }
        if texts.is_empty() {
            return Err(WorkflowError::Training("no training rows".to_string()));
        }

        let (vectorizer, rows) = TfidfVectorizer::fit_transform(params.vectorizer.clone(), texts)?;
        let classifier =
            MultinomialNb::fit(params.alpha, vectorizer.vocabulary_size(), &rows, labels)?;

        tracing::info!(
            "Pipeline fitted on {} texts: {} features, {} languages",
            texts.len(),
            vectorizer.vocabulary_size(),
            classifier.classes().len()
        );
        Ok(Self { vectorizer, classifier })
    }

    pub fn predict_one(&self, text: &str) -> &str {
        self.classifier.predict(&self.vectorizer.transform_one(text))
    }

    /// Predict labels together with their posterior probability.
    pub fn predict_with_confidence(&self, texts: &[String]) -> Vec<Prediction> {
        texts
            .iter()
            .map(|text| {
                let row   = self.vectorizer.transform_one(text);
                let proba = self.classifier.predict_proba(&row);
                let best  = self.classifier.predict_index(&row);
                Prediction {
                    language:   self.classifier.classes()[best].clone(),
                    confidence: proba[best],
                }
            })
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}

impl LanguageClassifier for TrainingPipeline {
    fn predict(&self, texts: &[String]) -> Vec<String> {
        texts.iter().map(|t| self.predict_one(t).to_string()).collect()
    }

    fn classes(&self) -> &[String] {
        self.classifier.classes()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fitted() -> TrainingPipeline {
        let texts = strings(&[
            "the cat is on the table",
            "where is the train station",
            "le chat est sur la table",
            "où est la gare du train",
        ]);
        let labels = strings(&["English", "English", "French", "French"]);
        TrainingPipeline::fit(&PipelineParams::default(), &texts, &labels).unwrap()
    }

    #[test]
    fn test_fit_then_predict() {
        let p = fitted();
        assert_eq!(p.predict(&strings(&["the table is here"])), vec!["English"]);
        assert_eq!(p.predict(&strings(&["la table est ici"])), vec!["French"]);
    }

    #[test]
    fn test_unknown_tokens_do_not_error() {
        let p = fitted();
        let out = p.predict(&strings(&["zzzz qqqq", ""]));
        assert_eq!(out.len(), 2);
        assert!(p.classes().contains(&out[0]));
    }

    #[test]
    fn test_confidence_is_a_probability() {
        let p = fitted();
        for pred in p.predict_with_confidence(&strings(&["le chat", "the cat"])) {
            assert!(pred.confidence > 0.0 && pred.confidence <= 1.0);
        }
    }

    #[test]
    fn test_mismatched_inputs_are_rejected() {
        let err = TrainingPipeline::fit(&PipelineParams::default(), &strings(&["hello"]), &[]).unwrap_err();
        assert!(matches!(err, WorkflowError::Training(_)));
    }

    #[test]
    fn test_serde_round_trip_predicts_identically() {
        let p    = fitted();
        let json = serde_json::to_string(&p).unwrap();
        let back: TrainingPipeline = serde_json::from_str(&json).unwrap();
        let probe = strings(&["the station", "la gare", "something else"]);
        assert_eq!(p.predict(&probe), back.predict(&probe));
    }
}
