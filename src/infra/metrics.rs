// ============================================================
// Layer 6 — Evaluation Metrics
// ============================================================
// Scores predictions against the held-out labels.
//
// Metrics recorded per training run:
//   - accuracy:  correct / total over the test partition
//   - per language: support (test rows with that label) and
//                   how many of them were predicted correctly
//
// Example console rendering:
//   Accuracy: 0.9541 (1874/1964)
//   English    support=277  recall=0.9856
//   French     support=203  recall=0.9704

use std::collections::BTreeMap;

/// Per-label breakdown of test results.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageScore {
    pub language: String,
    pub support:  usize,
    pub correct:  usize,
}

impl LanguageScore {
    /// Fraction of this language's test rows predicted correctly.
    pub fn recall(&self) -> f64 {
        if self.support == 0 { 0.0 } else { self.correct as f64 / self.support as f64 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationMetrics {
    pub correct:      usize,
    pub total:        usize,
    /// Sorted by language name
    pub per_language: Vec<LanguageScore>,
}

impl EvaluationMetrics {
    /// Compare `predicted` against `expected` position by position.
    /// Extra entries in the longer slice are ignored.
    pub fn evaluate(expected: &[String], predicted: &[String]) -> Self {
        let mut by_language: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        let mut correct = 0;
        let mut total   = 0;

        for (truth, guess) in expected.iter().zip(predicted) {
            let entry = by_language.entry(truth.as_str()).or_insert((0, 0));
            entry.0 += 1;
            total   += 1;
            if truth == guess {
                entry.1 += 1;
                correct += 1;
            }
        }

        let per_language = by_language
            .into_iter()
            .map(|(language, (support, correct))| LanguageScore {
                language: language.to_string(),
                support,
                correct,
            })
            .collect();

        Self { correct, total, per_language }
    }

    /// correct / total, or 0.0 when nothing was scored.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.correct as f64 / self.total as f64 }
    }
}
