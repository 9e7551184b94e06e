// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that define the core concepts
// of the workflow: a labelled record, the read-only quality
// report derived from a raw table, and the abstractions the
// data and ML layers implement.
//
// Rules for this layer:
//   - NO file I/O
//   - NO vectorizer / classifier maths
//   - Only plain structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One cleaned (text, language) pair
pub mod record;

// Summary of missing values, blank texts and label frequencies
pub mod quality_report;

// Core abstractions (traits) that other layers implement
pub mod traits;
