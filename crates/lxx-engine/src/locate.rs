//! Verse-aware cascading search.
//!
//! Searches one edition's index at increasing radius for an explanation
//! of a missing word, returning at the first stage that matches:
//! exact-verse variation, area variation, exact-verse fuzzy, area fuzzy,
//! corpus-wide fuzzy. "No match" is a normal return value.

use std::collections::BTreeSet;

use lxx_model::{Locality, VerseRef, Word};
use tracing::trace;

use crate::index::ReferenceIndex;
use crate::similarity::{levenshtein, similarity};
use crate::variations::generate_variations;

/// Fuzzy matches below this similarity are ignored.
pub const SIMILARITY_THRESHOLD: f64 = 0.85;
/// Verses before/after the anchor covered by the area stages.
pub const AREA_RADIUS: usize = 2;

/// Toggles for the expensive stages of the cascade.
#[derive(Debug, Clone, Copy)]
pub struct LocatorOptions {
    /// Run the fuzzy stages at all.
    pub fuzzy: bool,
    /// Run the corpus-wide fuzzy scan (the most expensive stage).
    pub corpus_scan: bool,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            corpus_scan: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocatorMatch {
    pub matched: String,
    pub similarity: f64,
    pub locality: Locality,
}

/// Run the full cascade against one edition.
pub fn locate(
    word: &Word,
    verse: &VerseRef,
    index: &ReferenceIndex,
    options: LocatorOptions,
) -> Option<LocatorMatch> {
    locate_variation(word, verse, index).or_else(|| {
        if options.fuzzy {
            locate_fuzzy(word, verse, index, options.corpus_scan)
        } else {
            None
        }
    })
}

/// Stages 1-2: exact variation match at the verse, then in the area.
pub fn locate_variation(
    word: &Word,
    verse: &VerseRef,
    index: &ReferenceIndex,
) -> Option<LocatorMatch> {
    let variations = generate_variations(&word.normalized);
    if variations.capped {
        trace!(word = %word.normalized, "variation closure capped");
    }

    if let Some(matched) = best_variation(&word.normalized, variations.words.iter(), index.words_at(verse)) {
        return Some(LocatorMatch {
            matched,
            similarity: 1.0,
            locality: Locality::ExactVerse,
        });
    }

    let mut area_words = BTreeSet::new();
    for nearby in index.window(verse, AREA_RADIUS) {
        area_words.extend(index.words_at(nearby).iter().cloned());
    }
    best_variation(&word.normalized, variations.words.iter(), &area_words).map(|matched| {
        LocatorMatch {
            matched,
            similarity: 1.0,
            locality: Locality::Area,
        }
    })
}

/// Stages 3-5: fuzzy match at the verse, in the area, then corpus-wide.
pub fn locate_fuzzy(
    word: &Word,
    verse: &VerseRef,
    index: &ReferenceIndex,
    corpus_scan: bool,
) -> Option<LocatorMatch> {
    if let Some((matched, score)) = best_fuzzy(&word.normalized, index.words_at(verse).iter()) {
        return Some(LocatorMatch {
            matched,
            similarity: score,
            locality: Locality::ExactVerse,
        });
    }

    let mut area_words = BTreeSet::new();
    for nearby in index.window(verse, AREA_RADIUS) {
        area_words.extend(index.words_at(nearby).iter().cloned());
    }
    if let Some((matched, score)) = best_fuzzy(&word.normalized, area_words.iter()) {
        return Some(LocatorMatch {
            matched,
            similarity: score,
            locality: Locality::Area,
        });
    }

    if corpus_scan {
        if let Some((matched, score)) = best_fuzzy(&word.normalized, index.global_words().iter()) {
            return Some(LocatorMatch {
                matched,
                similarity: score,
                locality: Locality::Corpus,
            });
        }
    }

    None
}

/// Pick from the intersection of the variation set and the candidate set,
/// preferring the variant closest to the input by edit distance, then the
/// standard tie-break (length difference, lexicographic).
fn best_variation<'a, I>(
    input: &str,
    variations: I,
    candidates: &BTreeSet<String>,
) -> Option<String>
where
    I: Iterator<Item = &'a String>,
{
    variations
        .filter(|variant| candidates.contains(variant.as_str()))
        .min_by_key(|variant| {
            (
                levenshtein(input, variant),
                length_difference(input, variant),
                (*variant).clone(),
            )
        })
        .cloned()
}

/// Best candidate at or above the similarity threshold. Ties break toward
/// the smaller length difference, then lexicographic order, so results do
/// not depend on scan order.
fn best_fuzzy<'a, I>(input: &str, candidates: I) -> Option<(String, f64)>
where
    I: Iterator<Item = &'a String>,
{
    let mut best: Option<(String, f64, usize)> = None;
    for candidate in candidates {
        let score = similarity(input, candidate);
        if score < SIMILARITY_THRESHOLD {
            continue;
        }
        let diff = length_difference(input, candidate);
        let better = match &best {
            None => true,
            Some((held, held_score, held_diff)) => {
                score > *held_score
                    || (score == *held_score
                        && (diff < *held_diff || (diff == *held_diff && candidate < held)))
            }
        };
        if better {
            best = Some((candidate.clone(), score, diff));
        }
    }
    best.map(|(matched, score, _)| (matched, score))
}

fn length_difference(a: &str, b: &str) -> usize {
    a.chars().count().abs_diff(b.chars().count())
}
