// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits rather
// than the concrete CSV loader or naive-Bayes pipeline:
//   - CsvLoader         implements DatasetSource
//   - TrainingPipeline  implements LanguageClassifier
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::data::dataset::Dataset;
use crate::error::WorkflowResult;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce a raw tabular dataset.
pub trait DatasetSource {
    /// Load the whole table into memory.
    /// An absent source is reported as `WorkflowError::MissingFile`.
    fn load(&self) -> WorkflowResult<Dataset>;
}

// ─── LanguageClassifier ───────────────────────────────────────────────────────
/// Any fitted component that maps texts to language labels.
pub trait LanguageClassifier {
    /// Predict one label per input text, in input order.
    fn predict(&self, texts: &[String]) -> Vec<String>;

    /// The labels this classifier can emit, sorted.
    fn classes(&self) -> &[String];
}
