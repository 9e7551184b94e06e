// ============================================================
// Layer 4 — Data Quality Checker
// ============================================================
// Diagnostics over a raw Dataset. Nothing here mutates the
// table; every function borrows it and returns a count or a
// summary.
//
//   check_missing_values   → missing cells per column
//   check_empty_text       → whitespace-only Text cells
//   language_distribution  → label frequencies, most common first

use std::collections::HashMap;

use crate::data::dataset::{Dataset, LANGUAGE_COLUMN, TEXT_COLUMN};
use crate::domain::quality_report::QualityReport;
use crate::error::WorkflowResult;

/// Missing cell count for every column, in header order.
pub fn check_missing_values(dataset: &Dataset) -> Vec<(String, usize)> {
    dataset
        .headers()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let missing = dataset.rows().iter().filter(|row| row[idx].is_none()).count();
            (name.clone(), missing)
        })
        .collect()
}

/// Number of rows whose Text is present but empty once trimmed.
pub fn check_empty_text(dataset: &Dataset) -> WorkflowResult<usize> {
    Ok(dataset
        .column(TEXT_COLUMN)?
        .flatten()
        .filter(|text| text.trim().is_empty())
        .count())
}

/// Occurrences of each language label, sorted by descending count.
/// Equal counts are ordered alphabetically by label.
pub fn language_distribution(dataset: &Dataset) -> WorkflowResult<Vec<(String, usize)>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in dataset.column(LANGUAGE_COLUMN)?.flatten() {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut distribution: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(distribution)
}

/// Run every check and bundle the results.
pub fn build_report(dataset: &Dataset) -> WorkflowResult<QualityReport> {
    let report = QualityReport {
        row_count:             dataset.len(),
        missing_values:        check_missing_values(dataset),
        empty_text_count:      check_empty_text(dataset)?,
        language_distribution: language_distribution(dataset)?,
    };

    tracing::debug!(
        "Quality report: {} rows, {} missing cells, {} blank texts, {} languages",
        report.row_count,
        report.total_missing(),
        report.empty_text_count,
        report.unique_languages()
    );

    Ok(report)
}
