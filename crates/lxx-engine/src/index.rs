//! Per-edition reference word index.
//!
//! Built once from adapter-supplied rows, then read-only: a global
//! vocabulary set plus per-verse word sets, with an ordered verse list
//! per book for window queries.

use std::collections::{BTreeMap, BTreeSet};

use lxx_model::{BookCode, Edition, VerseRef, Word};

static EMPTY: BTreeSet<String> = BTreeSet::new();

#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    edition: Edition,
    global: BTreeSet<String>,
    by_verse: BTreeMap<VerseRef, BTreeSet<String>>,
    book_order: BTreeMap<BookCode, Vec<VerseRef>>,
}

impl ReferenceIndex {
    /// Build the index from canonicalized rows. Malformed raw rows are
    /// rejected upstream by the ingest adapter, so no row is dropped here.
    pub fn build<I>(edition: Edition, rows: I) -> Self
    where
        I: IntoIterator<Item = (VerseRef, Word)>,
    {
        let mut global = BTreeSet::new();
        let mut by_verse: BTreeMap<VerseRef, BTreeSet<String>> = BTreeMap::new();
        for (verse, word) in rows {
            global.insert(word.normalized.clone());
            by_verse.entry(verse).or_default().insert(word.normalized);
        }
        let mut book_order: BTreeMap<BookCode, Vec<VerseRef>> = BTreeMap::new();
        for verse in by_verse.keys() {
            book_order
                .entry(verse.book.clone())
                .or_default()
                .push(verse.clone());
        }
        Self {
            edition,
            global,
            by_verse,
            book_order,
        }
    }

    /// Add words to the global vocabulary without a verse position. Used
    /// for corpus words that precede the first versification entry.
    pub fn with_global_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        for word in words {
            self.global.insert(word.normalized);
        }
        self
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn global_words(&self) -> &BTreeSet<String> {
        &self.global
    }

    pub fn verse_count(&self) -> usize {
        self.by_verse.len()
    }

    pub fn word_count(&self) -> usize {
        self.global.len()
    }

    /// Words recorded at a verse. Absent verse data is a valid state and
    /// yields the empty set, never an error.
    pub fn words_at(&self, verse: &VerseRef) -> &BTreeSet<String> {
        self.by_verse.get(verse).unwrap_or(&EMPTY)
    }

    /// The verses within `radius` positions of `anchor` in this edition's
    /// ordered verse list for the anchor's book. Contiguous across chapter
    /// boundaries; never crosses into another book. When the anchor verse
    /// itself is absent the window forms around its insertion position.
    pub fn window(&self, anchor: &VerseRef, radius: usize) -> &[VerseRef] {
        let Some(order) = self.book_order.get(&anchor.book) else {
            return &[];
        };
        let position = match order.binary_search(anchor) {
            Ok(found) => found,
            Err(insertion) => insertion,
        };
        let start = position.saturating_sub(radius);
        let end = (position + radius + 1).min(order.len());
        &order[start..end]
    }
}
