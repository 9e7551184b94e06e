// ============================================================
// Layer 5 — TF-IDF Vectorizer
// ============================================================
// Turns a corpus of strings into sparse weighted term vectors.
//
// Analysis of one document:
//   lowercase → runs of word characters (min length 2)
//             → n-grams for every n in [ngram_min, ngram_max],
//               tokens joined by a single space
//
// Weighting (smoothed idf, L2-normalised rows):
//   idf(t)   = ln((1 + n_docs) / (1 + df(t))) + 1
//   w(t, d)  = count(t, d) * idf(t)
//   row      = w / ||w||₂
//
// The vocabulary is sorted lexicographically so feature indices
// do not depend on corpus order. After `fit` both vocabulary and
// idf are frozen; unseen n-grams at transform time are ignored.

use std::collections::{BTreeMap, HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{WorkflowError, WorkflowResult};

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Sparse row: (feature index, weight), sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// Tokenisation settings fixed at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerParams {
    pub ngram_min:     usize,
    pub ngram_max:     usize,
    pub min_token_len: usize,
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self { ngram_min: 1, ngram_max: 2, min_token_len: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    params:     VectorizerParams,
    vocabulary: BTreeMap<String, usize>,
    idf:        Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and idf weights from `documents`.
    pub fn fit(params: VectorizerParams, documents: &[String]) -> WorkflowResult<Self> {
        if params.ngram_min == 0 || params.ngram_min > params.ngram_max {
            return Err(WorkflowError::InvalidConfig(format!(
                "invalid n-gram range ({}, {})",
                params.ngram_min, params.ngram_max
            )));
        }

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<String> = analyze(&params, doc).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(WorkflowError::Training(
                "empty vocabulary: no document contains a usable token".to_string(),
            ));
        }

        // BTreeMap iteration is sorted, so indices follow term order
        let sorted: BTreeMap<String, usize> = document_frequency.into_iter().collect();
        let n_docs = documents.len() as f64;

        let mut vocabulary = BTreeMap::new();
        let mut idf        = Vec::with_capacity(sorted.len());
        for (idx, (term, df)) in sorted.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        tracing::debug!("Vectorizer fitted: {} documents, {} features", documents.len(), idf.len());
        Ok(Self { params, vocabulary, idf })
    }

    /// Fit on `documents` and return their vectors in one pass.
    pub fn fit_transform(
        params:    VectorizerParams,
        documents: &[String],
    ) -> WorkflowResult<(Self, Vec<SparseVector>)> {
        let vectorizer = Self::fit(params, documents)?;
        let rows       = vectorizer.transform(documents);
        Ok((vectorizer, rows))
    }

    pub fn transform(&self, documents: &[String]) -> Vec<SparseVector> {
        documents.iter().map(|d| self.transform_one(d)).collect()
    }

    /// Vectorise one document against the frozen vocabulary.
    pub fn transform_one(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in analyze(&self.params, document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseVector = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        row.sort_unstable_by_key(|&(idx, _)| idx);

        let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut row {
                *w /= norm;
            }
        }
        row
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

/// Split a document into the n-gram terms the vectorizer counts.
pub fn analyze(params: &VectorizerParams, document: &str) -> Vec<String> {
    let lowered = document.to_lowercase();
    let tokens: Vec<&str> = WORD
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| t.chars().count() >= params.min_token_len)
        .collect();

    let mut terms = Vec::new();
    for n in params.ngram_min..=params.ngram_max {
        terms.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    terms
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn index(v: &TfidfVectorizer, term: &str) -> Option<usize> {
        v.vocabulary.get(term).copied()
    }

    fn docs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_analyze_unigrams_and_bigrams() {
        let terms = analyze(&VectorizerParams::default(), "The cat sat");
        assert_eq!(terms, vec!["the", "cat", "sat", "the cat", "cat sat"]);
    }

    #[test]
    fn test_analyze_drops_short_tokens_and_punctuation() {
        let terms = analyze(&VectorizerParams::default(), "I saw a dog.");
        assert_eq!(terms, vec!["saw", "dog", "saw dog"]);
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let v = TfidfVectorizer::fit(VectorizerParams::default(), &docs(&["zeta alpha"])).unwrap();
        assert_eq!(index(&v, "alpha"), Some(0));
        assert_eq!(index(&v, "zeta"), Some(1));
        assert_eq!(index(&v, "zeta alpha"), Some(2));
        assert_eq!(v.vocabulary_size(), 3);
    }

    #[test]
    fn test_smoothed_idf() {
        let v = TfidfVectorizer::fit(VectorizerParams::default(), &docs(&["aa bb", "aa cc"])).unwrap();
        let aa = index(&v, "aa").unwrap();
        let bb = index(&v, "bb").unwrap();
        assert!((v.idf[aa] - 1.0).abs() < 1e-12);
        assert!((v.idf[bb] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let corpus = docs(&["hello world", "hello there world"]);
        let (_, rows) = TfidfVectorizer::fit_transform(VectorizerParams::default(), &corpus).unwrap();
        for row in rows {
            let norm: f64 = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unknown_terms_are_ignored() {
        let v = TfidfVectorizer::fit(VectorizerParams::default(), &docs(&["hello world"])).unwrap();
        assert!(v.transform_one("completely unseen").is_empty());
        assert_eq!(v.transform_one("hello unseen").len(), 1);
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        let err = TfidfVectorizer::fit(VectorizerParams::default(), &docs(&["a b c", ""])).unwrap_err();
        assert!(matches!(err, WorkflowError::Training(_)));
    }

    #[test]
    fn test_bad_ngram_range_is_rejected() {
        let params = VectorizerParams { ngram_min: 3, ngram_max: 2, min_token_len: 2 };
        assert!(TfidfVectorizer::fit(params, &docs(&["hello"])).is_err());
    }
}
