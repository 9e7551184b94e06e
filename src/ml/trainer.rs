// ============================================================
// Layer 5 — Trainer / Evaluator
// ============================================================
// One training run over cleaned records:
//
//   records ──▶ seeded split (train / test)
//           ──▶ TrainingPipeline::fit on train
//           ──▶ predict test, score with EvaluationMetrics
//
// Persisting the fitted pipeline is the caller's job
// (TrainUseCase hands it to the ModelStore).

use crate::application::config::WorkflowConfig;
use crate::data::splitter::split_train_test;
use crate::domain::{
    record::{unzip_records, Record},
    traits::LanguageClassifier,
};
use crate::error::WorkflowResult;
use crate::infra::metrics::EvaluationMetrics;
use crate::ml::pipeline::TrainingPipeline;

/// Everything a training run produces.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub pipeline:   TrainingPipeline,
    pub metrics:    EvaluationMetrics,
    pub train_rows: usize,
    pub test_rows:  usize,
}

pub fn run_training(cfg: &WorkflowConfig, records: Vec<Record>) -> WorkflowResult<TrainingOutcome> {
    let (train, test) = split_train_test(records, cfg.test_fraction, cfg.seed);
    let train_rows = train.len();
    let test_rows  = test.len();
    tracing::info!("Split: {} train, {} test", train_rows, test_rows);

    let (train_texts, train_labels) = unzip_records(train);
    let (test_texts, test_labels)   = unzip_records(test);

    tracing::info!("Training the model...");
    let pipeline = TrainingPipeline::fit(&cfg.pipeline_params(), &train_texts, &train_labels)?;

    tracing::info!("Evaluating the model...");
    let predicted = pipeline.predict(&test_texts);
    let metrics   = EvaluationMetrics::evaluate(&test_labels, &predicted);
    tracing::info!(
        "Test accuracy: {:.4} ({}/{})",
        metrics.accuracy(),
        metrics.correct,
        metrics.total
    );

    Ok(TrainingOutcome { pipeline, metrics, train_rows, test_rows })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &[&str] = &[
        "the", "house", "is", "very", "big", "and", "green", "with", "window", "garden",
        "children", "play", "outside", "every", "morning",
    ];
    const FRENCH: &[&str] = &[
        "le", "maison", "est", "très", "grande", "et", "verte", "avec", "fenêtre", "jardin",
        "enfants", "jouent", "dehors", "chaque", "matin",
    ];

    /// `n` sentences of six words drawn deterministically from `words`.
    fn sentences(words: &[&str], n: usize, label: &str) -> Vec<Record> {
        (0..n)
            .map(|i| {
                let text = (0..6)
                    .map(|j| words[(i * 7 + j * 3 + i / 5) % words.len()])
                    .collect::<Vec<_>>()
                    .join(" ");
                Record::new(text, label)
            })
            .collect()
    }

    fn synthetic() -> Vec<Record> {
        let mut records = sentences(ENGLISH, 50, "English");
        records.extend(sentences(FRENCH, 50, "French"));
        records
    }

    #[test]
    fn test_two_language_accuracy() {
        let outcome = run_training(&WorkflowConfig::default(), synthetic()).unwrap();
        assert_eq!(outcome.train_rows, 80);
        assert_eq!(outcome.test_rows, 20);
        assert!(outcome.metrics.accuracy() >= 0.9, "accuracy {}", outcome.metrics.accuracy());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let cfg = WorkflowConfig::default();
        let a   = run_training(&cfg, synthetic()).unwrap();
        let b   = run_training(&cfg, synthetic()).unwrap();
        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.pipeline, b.pipeline);
    }

    #[test]
    fn test_empty_dataset_fails() {
        assert!(run_training(&WorkflowConfig::default(), Vec::new()).is_err());
    }
}
