// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by the application layer:
//
//   model_store.rs — Saving and loading the fitted pipeline
//                    as a single JSON artifact (serde_json).
//
//   metrics.rs     — Accuracy and per-language scores over the
//                    held-out test partition.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Model artifact saving and loading
pub mod model_store;

/// Held-out evaluation metrics
pub mod metrics;
