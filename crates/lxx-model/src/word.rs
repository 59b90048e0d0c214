//! Word normalization.
//!
//! Every word carries its original spelling (casing preserved for name
//! detection) plus a derived comparison key: NFC-composed, combining marks
//! stripped, lowercased. Normalization is pure, total, and idempotent.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Produce the accent-stripped, case-folded comparison key for a word.
///
/// Decomposes so tonos, breathing marks, and iota subscript become
/// separate combining characters, drops them, lowercases, and recomposes.
pub fn normalize(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .nfc()
        .collect()
}

/// An immutable word with its derived normalized form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Word {
    pub original: String,
    pub normalized: String,
}

impl Word {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let normalized = normalize(&original);
        Self {
            original,
            normalized,
        }
    }

    /// True when the original spelling begins with an uppercase letter.
    pub fn starts_uppercase(&self) -> bool {
        self.original.chars().next().is_some_and(char::is_uppercase)
    }
}
