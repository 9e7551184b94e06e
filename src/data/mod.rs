// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw CSV to train/test partitions.
//
//   raw CSV
//       │
//       ▼
//   CsvLoader         → reads the file into a Dataset
//       │
//       ├──▶ quality  → missing / blank / label diagnostics
//       │
//       ▼
//   DatasetCleaner    → drops nulls, normalises, drops empties
//       │                (uses TextNormalizer)
//       ▼
//   cleaned CSV
//       │
//       ▼
//   splitter          → seeded 80/20 train/test partition
//
// Each module is responsible for exactly one step.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// In-memory table with optional cells
pub mod dataset;

/// Reads delimited files with the csv crate
pub mod loader;

/// Read-only data quality diagnostics
pub mod quality;

/// Lowercasing, bracket removal, letter filtering, whitespace collapse
pub mod normalizer;

/// Raw CSV → cleaned Text,Language CSV
pub mod cleaner;

/// Seeded shuffle and train/test split
pub mod splitter;
