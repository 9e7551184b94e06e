// ============================================================
// Layer 4 — Dataset
// ============================================================
// The raw table as read from disk: a header row and rows of
// optional cells. `None` is a missing cell; the loader decides
// which spellings count as missing.
//
// Cleaning and training only ever see the Text and Language
// columns; `into_records` narrows the table down to them.

use std::path::PathBuf;

use crate::domain::record::Record;
use crate::error::{WorkflowError, WorkflowResult};

/// Header of the free-text column.
pub const TEXT_COLUMN: &str = "Text";

/// Header of the label column.
pub const LANGUAGE_COLUMN: &str = "Language";

/// One raw row. `None` marks a missing cell.
pub type Row = Vec<Option<String>>;

/// An in-memory table loaded from a delimited file.
///
/// Every row has exactly `headers.len()` cells; short rows are padded
/// with missing cells on construction and long rows are truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    source:  PathBuf,
    headers: Vec<String>,
    rows:    Vec<Row>,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>, headers: Vec<String>, rows: Vec<Row>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { source: source.into(), headers, rows }
    }

    pub fn headers(&self) -> &[String] { &self.headers }

    pub fn rows(&self) -> &[Row] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// The first `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like `column_index`, but a missing header is an error.
    pub fn require_column(&self, name: &str) -> WorkflowResult<usize> {
        self.column_index(name).ok_or_else(|| WorkflowError::MissingColumn {
            path:   self.source.clone(),
            column: name.to_string(),
        })
    }

    /// Iterate over the cells of one column.
    pub fn column(&self, name: &str) -> WorkflowResult<impl Iterator<Item = Option<&str>> + '_> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(move |row| row[idx].as_deref()))
    }

    /// Drop every row that has at least one missing cell.
    pub fn drop_missing(mut self) -> Self {
        self.rows.retain(|row| row.iter().all(Option::is_some));
        self
    }

    /// Convert the table into records, keeping only the Text and
    /// Language columns. Rows missing either value are skipped.
    pub fn into_records(self) -> WorkflowResult<Vec<Record>> {
        let text_idx = self.require_column(TEXT_COLUMN)?;
        let lang_idx = self.require_column(LANGUAGE_COLUMN)?;

        Ok(self
            .rows
            .into_iter()
            .filter_map(|mut row| {
                let language = row[lang_idx].take()?;
                let text     = row[text_idx].take()?;
                Some(Record::new(text, language))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Option<String> { Some(s.to_string()) }

    fn table() -> Dataset {
        Dataset::new(
            "mem.csv",
            vec!["Text".into(), "Language".into(), "Extra".into()],
            vec![
                vec![cell("hello"), cell("English"), cell("x")],
                vec![None, cell("French")],
                vec![cell("hola"), cell("Spanish"), None],
            ],
        )
    }

    #[test]
    fn test_short_rows_are_padded() {
        let ds = table();
        assert_eq!(ds.rows()[1].len(), 3);
        assert_eq!(ds.rows()[1][2], None);
    }

    #[test]
    fn test_drop_missing_checks_every_column() {
        let ds = table().drop_missing();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows()[0][0].as_deref(), Some("hello"));
    }

    #[test]
    fn test_into_records_ignores_extra_columns() {
        let records = table().into_records().unwrap();
        assert_eq!(records, vec![Record::new("hello", "English"), Record::new("hola", "Spanish")]);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let ds  = Dataset::new("mem.csv", vec!["Text".into()], vec![]);
        let err = ds.into_records().unwrap_err();
        assert!(matches!(err, WorkflowError::MissingColumn { ref column, .. } if column == "Language"));
    }

    #[test]
    fn test_head_clamps() {
        assert_eq!(table().head(2).len(), 2);
        assert_eq!(table().head(50).len(), 3);
    }
}
