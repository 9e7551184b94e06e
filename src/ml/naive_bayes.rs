// ============================================================
// Layer 5 — Multinomial Naive Bayes
// ============================================================
// Probabilistic classifier over non-negative feature vectors.
//
// Learned per class c:
//   log P(c)      = ln(n_c / n)
//   log P(f | c)  = ln((fc_cf + α) / (Σ_f fc_cf + α · n_features))
// where fc_cf is the summed weight of feature f over rows of
// class c and α is the additive (Laplace/Lidstone) smoothing.
//
// Decision rule: argmax_c  log P(c) + Σ_f x_f · log P(f | c)
// Ties go to the lexicographically first class.
//
// Storage is sparse: each class keeps log P(f | c) only for the
// features it actually saw, plus the shared value every unseen
// feature gets (ln(α / denominator)).
//
// Reference: Manning, Raghavan & Schütze (2008), ch. 13

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{WorkflowError, WorkflowResult};
use crate::ml::vectorizer::SparseVector;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ClassModel {
    log_prior:       f64,
    unseen_log_prob: f64,
    seen_log_prob:   BTreeMap<usize, f64>,
}

impl ClassModel {
    fn log_prob(&self, feature: usize) -> f64 {
        self.seen_log_prob.get(&feature).copied().unwrap_or(self.unseen_log_prob)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    alpha:      f64,
    n_features: usize,
    classes:    Vec<String>,
    models:     Vec<ClassModel>,
}

impl MultinomialNb {
    /// Fit on vectorised rows `x` with labels `y`.
    pub fn fit(alpha: f64, n_features: usize, x: &[SparseVector], y: &[String]) -> WorkflowResult<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(WorkflowError::InvalidConfig(format!("alpha must be positive, got {alpha}")));
        }
        if x.len() != y.len() {
            return Err(WorkflowError::Training(format!(
                "{} feature rows but {} labels",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(WorkflowError::Training("no training rows".to_string()));
        }

        let classes: Vec<String> = y.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();

        let mut class_rows     = vec![0usize; classes.len()];
        let mut feature_counts = vec![BTreeMap::<usize, f64>::new(); classes.len()];

        for (row, label) in x.iter().zip(y) {
            // classes came from y, so the search always succeeds
            let c = classes.binary_search(label).unwrap_or_default();
            class_rows[c] += 1;
            for &(feature, weight) in row {
                *feature_counts[c].entry(feature).or_insert(0.0) += weight;
            }
        }

        let n_rows = x.len() as f64;
        let models = class_rows
            .iter()
            .zip(feature_counts)
            .map(|(&rows, counts)| {
                let total: f64  = counts.values().sum();
                let denominator = total + alpha * n_features as f64;
                ClassModel {
                    log_prior:       (rows as f64 / n_rows).ln(),
                    unseen_log_prob: (alpha / denominator).ln(),
                    seen_log_prob:   counts
                        .into_iter()
                        .map(|(f, fc)| (f, ((fc + alpha) / denominator).ln()))
                        .collect(),
                }
            })
            .collect();

        tracing::debug!("Naive Bayes fitted: {} classes, {} features", classes.len(), n_features);
        Ok(Self { alpha, n_features, classes, models })
    }

    /// Unnormalised log posterior for every class.
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> Vec<f64> {
        self.models
            .iter()
            .map(|m| {
                m.log_prior
                    + x.iter()
                        .filter(|&&(f, _)| f < self.n_features)
                        .map(|&(f, w)| w * m.log_prob(f))
                        .sum::<f64>()
            })
            .collect()
    }

    /// Index into `classes()` of the most probable class.
    pub fn predict_index(&self, x: &SparseVector) -> usize {
        argmax(&self.joint_log_likelihood(x))
    }

    pub fn predict(&self, x: &SparseVector) -> &str {
        &self.classes[self.predict_index(x)]
    }

    /// Posterior probabilities, in `classes()` order, summing to 1.
    pub fn predict_proba(&self, x: &SparseVector) -> Vec<f64> {
        let jll = self.joint_log_likelihood(x);
        let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let log_norm = max + jll.iter().map(|v| (v - max).exp()).sum::<f64>().ln();
        jll.iter().map(|v| (v - log_norm).exp()).collect()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// First index of the maximum value; 0 for an empty slice.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classes_are_sorted() {
        let x  = vec![vec![(0, 1.0)], vec![(1, 1.0)]];
        let nb = MultinomialNb::fit(1.0, 2, &x, &labels(&["b", "a"])).unwrap();
        assert_eq!(nb.classes(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_predicts_class_of_dominant_feature() {
        let x = vec![
            vec![(0, 1.0)],
            vec![(0, 0.8), (2, 0.2)],
            vec![(1, 1.0)],
            vec![(1, 0.9), (2, 0.1)],
        ];
        let nb = MultinomialNb::fit(1.0, 3, &x, &labels(&["en", "en", "fr", "fr"])).unwrap();
        assert_eq!(nb.predict(&vec![(0, 1.0)]), "en");
        assert_eq!(nb.predict(&vec![(1, 1.0)]), "fr");
    }

    #[test]
    fn test_empty_row_falls_back_to_prior() {
        let x  = vec![vec![(0, 1.0)], vec![(0, 1.0)], vec![(1, 1.0)]];
        let nb = MultinomialNb::fit(1.0, 2, &x, &labels(&["fr", "fr", "en"])).unwrap();
        assert_eq!(nb.predict(&Vec::new()), "fr");
    }

    #[test]
    fn test_log_probs_match_closed_form() {
        let x  = vec![vec![(0, 2.0)], vec![(1, 1.0)]];
        let nb = MultinomialNb::fit(1.0, 3, &x, &labels(&["a", "b"])).unwrap();
        let a  = &nb.models[0];
        // fc = [2, 0, 0], denominator = 2 + 1 * 3 = 5
        assert!((a.log_prob(0) - (3.0f64 / 5.0).ln()).abs() < 1e-12);
        assert!((a.log_prob(2) - (1.0f64 / 5.0).ln()).abs() < 1e-12);
        assert!((a.log_prior - 0.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let x  = vec![vec![(0, 1.0)], vec![(1, 1.0)], vec![(2, 1.0)]];
        let nb = MultinomialNb::fit(0.5, 3, &x, &labels(&["a", "b", "c"])).unwrap();
        let p  = nb.predict_proba(&vec![(1, 1.0)]);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert_eq!(argmax(&p), 1);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(MultinomialNb::fit(1.0, 1, &[], &[]).is_err());
        assert!(MultinomialNb::fit(0.0, 1, &[vec![]], &labels(&["a"])).is_err());
        assert!(MultinomialNb::fit(1.0, 1, &[vec![]], &labels(&["a", "b"])).is_err());
    }

    #[test]
    fn test_equal_priors_empty_row_picks_first_class() {
        let x = vec![vec![(0, 1.0)], vec![(1, 1.0)], vec![(2, 1.0)]];
        for order in [["zh", "ar", "en"], ["en", "zh", "ar"]] {
            let nb = MultinomialNb::fit(1.0, 3, &x, &labels(&order)).unwrap();
            assert_eq!(nb.predict(&Vec::new()), "ar");
        }
    }

    #[test]
    fn test_argmax_prefers_first_on_tie() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0]), 1);
    }
}
