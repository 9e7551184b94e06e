// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// A single labelled example: the text and the language it is
// written in. Records are what the cleaner writes and what the
// trainer reads; by the time one exists both fields are present.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::Serialize;

/// One (Text, Language) row of the cleaned dataset.
///
/// The serde renames match the CSV header exactly, so the csv
/// crate can write `Record` rows directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Normalised text content
    #[serde(rename = "Text")]
    pub text: String,

    /// Language label, e.g. "English"
    #[serde(rename = "Language")]
    pub language: String,
}

impl Record {
    /// Create a new Record.
    ///
    /// Example:
    ///   let r = Record::new("bonjour le monde", "French");
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text:     text.into(),
            language: language.into(),
        }
    }
}

/// Split records into parallel (texts, labels) vectors, the shape
/// the training pipeline consumes.
pub fn unzip_records(records: Vec<Record>) -> (Vec<String>, Vec<String>) {
    records.into_iter().map(|r| (r.text, r.language)).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unzip_keeps_order() {
        let records = vec![Record::new("hello", "English"), Record::new("hola", "Spanish")];
        let (texts, labels) = unzip_records(records);
        assert_eq!(texts, vec!["hello", "hola"]);
        assert_eq!(labels, vec!["English", "Spanish"]);
    }
}
