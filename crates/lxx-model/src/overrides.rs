//! Static override tables consulted before any search runs.
//!
//! Both tables are loaded once by the ingest adapters and passed to the
//! classifier as immutable values.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::verse::VerseRef;
use crate::word::normalize;

/// Words reviewed and accepted as legitimate spellings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcceptedWords {
    words: BTreeSet<String>,
}

impl AcceptedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| normalize(word.as_ref()))
                .collect(),
        }
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Where a correction entry applies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CorrectionScope {
    /// Only at this canonical verse.
    Verse(VerseRef),
    /// Anywhere in the corpus (the `*` marker in the corrections file).
    Any,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub scope: CorrectionScope,
    pub corrected: String,
}

/// Reviewed word -> correction pairs, keyed by the normalized wrong form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corrections {
    entries: BTreeMap<String, Vec<Correction>>,
}

impl Corrections {
    pub fn insert(&mut self, wrong: &str, scope: CorrectionScope, corrected: impl Into<String>) {
        self.entries.entry(normalize(wrong)).or_default().push(Correction {
            scope,
            corrected: corrected.into(),
        });
    }

    /// A verse-scoped entry wins over a wildcard one for the same word.
    pub fn lookup(&self, normalized: &str, verse: &VerseRef) -> Option<&Correction> {
        let entries = self.entries.get(normalized)?;
        entries
            .iter()
            .find(|entry| matches!(&entry.scope, CorrectionScope::Verse(v) if v == verse))
            .or_else(|| {
                entries
                    .iter()
                    .find(|entry| entry.scope == CorrectionScope::Any)
            })
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_scoped_correction_does_not_leak_to_other_verses() {
        let at = VerseRef::parse("Exod.5.10").unwrap();
        let elsewhere = VerseRef::parse("Exod.6.10").unwrap();
        let mut corrections = Corrections::default();
        corrections.insert("ἑπτκόσια", CorrectionScope::Verse(at.clone()), "ἑπτακόσια");

        assert!(corrections.lookup(&normalize("ἑπτκόσια"), &at).is_some());
        assert!(corrections.lookup(&normalize("ἑπτκόσια"), &elsewhere).is_none());
    }

    #[test]
    fn wildcard_correction_applies_anywhere() {
        let mut corrections = Corrections::default();
        corrections.insert("τεστ", CorrectionScope::Any, "τέστ");
        let verse = VerseRef::parse("Gen.1.1").unwrap();
        assert_eq!(
            corrections.lookup("τεστ", &verse).map(|c| c.corrected.as_str()),
            Some("τέστ")
        );
    }

    #[test]
    fn accepted_words_match_on_normalized_form() {
        let accepted = AcceptedWords::new(["συλλήμψεται"]);
        assert!(accepted.contains(&normalize("Συλλημψεται")));
        assert!(!accepted.contains(&normalize("λόγος")));
    }
}
