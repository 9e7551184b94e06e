// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal per
// command (inspect, clean, train, predict).
//
// Rules for this layer:
//   - No vectorizer or classifier maths here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination, driven by WorkflowConfig
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Paths and hyperparameters shared by every use case
pub mod config;

// Raw dataset diagnostics
pub mod inspect_use_case;

// Raw CSV → cleaned CSV
pub mod clean_use_case;

// Cleaned CSV → fitted, evaluated, saved pipeline
pub mod train_use_case;

// Saved pipeline → predictions
pub mod predict_use_case;
