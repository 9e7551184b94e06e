// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Maps raw text to the cleaned form the classifier trains on.
//
// Cleaning steps (applied in order):
//   1. Lowercase (Unicode case mapping, no locale)
//   2. Remove every "[...]" span, brackets included; each "["
//      closes at the nearest following "]"
//   3. Drop every character that is not a letter (general
//      category L), "_" or whitespace. Digits, punctuation and
//      combining marks (vowel signs, viramas, harakat) go here
//   4. Collapse whitespace runs to one space, trim the ends
//
// The function is pure and idempotent.
//
// Reference: regex crate documentation (Unicode classes)
//            Rust Book §8 (Strings in Rust)

use once_cell::sync::Lazy;
use regex::Regex;

// (?s) lets a bracketed span cross a line break
static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*?\]").unwrap());

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}_\s]").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Stateless text cleaner.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Clean one text. See the module header for the steps.
    pub fn normalize(&self, text: &str) -> String {
        let lowered   = text.to_lowercase();
        let unbracket = BRACKETED.replace_all(&lowered, "");
        let letters   = DISALLOWED.replace_all(&unbracket, "");
        let collapsed = WHITESPACE_RUN.replace_all(&letters, " ");
        collapsed.trim().to_string()
    }
}
