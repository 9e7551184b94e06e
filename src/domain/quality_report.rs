// ============================================================
// Layer 3 — Quality Report Domain Type
// ============================================================
// Read-only diagnostics computed from a raw dataset:
//   - how many cells are missing in each column
//   - how many Text cells are blank / whitespace-only
//   - how often each language label occurs
//
// The report never mutates the dataset it was built from.

/// Summary of a raw dataset's health.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityReport {
    /// Number of data rows (header excluded)
    pub row_count: usize,

    /// (column name, missing cell count) in header order
    pub missing_values: Vec<(String, usize)>,

    /// Rows whose Text, trimmed, is the empty string
    pub empty_text_count: usize,

    /// (language, count), descending by count then alphabetical
    pub language_distribution: Vec<(String, usize)>,
}

impl QualityReport {
    /// Total number of missing cells across every column.
    pub fn total_missing(&self) -> usize {
        self.missing_values.iter().map(|(_, n)| n).sum()
    }

    /// Number of distinct language labels seen.
    pub fn unique_languages(&self) -> usize {
        self.language_distribution.len()
    }

    /// The `n` most frequent languages.
    pub fn top_languages(&self, n: usize) -> &[(String, usize)] {
        let end = n.min(self.language_distribution.len());
        &self.language_distribution[..end]
    }
}
