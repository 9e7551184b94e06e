// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// All feature extraction and classification maths lives here.
//
//   vectorizer.rs  — TF-IDF over word unigrams + bigrams
//                    (sparse, L2-normalised rows)
//
//   naive_bayes.rs — Multinomial naive Bayes with additive
//                    smoothing and sparse per-class likelihoods
//
//   pipeline.rs    — vectorizer → classifier, fitted together,
//                    serialisable as one artifact
//
//   trainer.rs     — seeded split, fit, held-out evaluation
//
//   inferencer.rs  — loads the artifact and labels new text
//
// Reference: Manning, Raghavan & Schütze (2008)
//            Introduction to Information Retrieval, ch. 6 and 13

/// TF-IDF feature extraction
pub mod vectorizer;

/// Multinomial naive Bayes classifier
pub mod naive_bayes;

/// Vectorizer + classifier composition
pub mod pipeline;

/// Training run with held-out evaluation
pub mod trainer;

/// Inference from a saved artifact
pub mod inferencer;
