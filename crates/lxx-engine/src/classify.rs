//! Classification of missing words.
//!
//! Orchestrates the override tables and the cascading locator across both
//! editions. Every missing word receives an outcome; name and number
//! flags are orthogonal annotations computed regardless of the
//! classification path taken.

use lxx_model::{
    AcceptedWords, Classification, Corrections, Edition, MatchEvidence, MissingWord, Outcome,
    VerseRef, Word,
};
use tracing::debug;

use crate::index::ReferenceIndex;
use crate::locate::{LocatorMatch, LocatorOptions, locate_fuzzy, locate_variation};
use crate::numerals::is_numeral_token;

pub struct Classifier<'a> {
    indexes: &'a [ReferenceIndex],
    accepted: &'a AcceptedWords,
    corrections: &'a Corrections,
    options: LocatorOptions,
}

impl<'a> Classifier<'a> {
    pub fn new(
        indexes: &'a [ReferenceIndex],
        accepted: &'a AcceptedWords,
        corrections: &'a Corrections,
        options: LocatorOptions,
    ) -> Self {
        Self {
            indexes,
            accepted,
            corrections,
            options,
        }
    }

    /// First applicable wins: corrections, accepted words, variation
    /// match in any edition, fuzzy match in any edition, unexplained.
    pub fn classify(&self, record: &MissingWord) -> Outcome {
        let is_name = record.word.starts_uppercase();
        let is_number = is_numeral_token(&record.word.normalized);
        let outcome = |classification, evidence, correction| Outcome {
            classification,
            evidence,
            correction,
            is_name,
            is_number,
        };

        if let Some(correction) = self
            .corrections
            .lookup(&record.word.normalized, &record.verse)
        {
            return outcome(
                Classification::Resolved,
                None,
                Some(correction.corrected.clone()),
            );
        }

        if self.accepted.contains(&record.word.normalized) {
            return outcome(Classification::AcceptedVariation, None, None);
        }

        if let Some(evidence) = self.best_across_editions(record, locate_variation) {
            return outcome(Classification::LegitimateVariation, Some(evidence), None);
        }

        if self.options.fuzzy {
            let corpus_scan = self.options.corpus_scan;
            let fuzzy = |word: &Word, verse: &VerseRef, index: &ReferenceIndex| {
                locate_fuzzy(word, verse, index, corpus_scan)
            };
            if let Some(evidence) = self.best_across_editions(record, fuzzy) {
                return outcome(Classification::LikelyTypo, Some(evidence), None);
            }
        }

        debug!(word = %record.word.normalized, verse = %record.verse, "unexplained");
        outcome(Classification::Unexplained, None, None)
    }

    /// Run one search over every edition and keep the best result:
    /// smaller locality tier first, then higher similarity, then the
    /// fixed edition preference order.
    fn best_across_editions<F>(&self, record: &MissingWord, search: F) -> Option<MatchEvidence>
    where
        F: Fn(&Word, &VerseRef, &ReferenceIndex) -> Option<LocatorMatch>,
    {
        let mut best: Option<MatchEvidence> = None;
        for edition in Edition::ORDER {
            let Some(index) = self.indexes.iter().find(|idx| idx.edition() == edition) else {
                continue;
            };
            let Some(found) = search(&record.word, &record.verse, index) else {
                continue;
            };
            let candidate = MatchEvidence {
                matched: found.matched,
                similarity: found.similarity,
                locality: found.locality,
                edition,
            };
            let better = match &best {
                None => true,
                Some(held) => {
                    candidate.locality < held.locality
                        || (candidate.locality == held.locality
                            && candidate.similarity > held.similarity)
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        best
    }
}
