//! Classification outcomes and supporting evidence.

use serde::{Deserialize, Serialize};

use crate::edition::Edition;
use crate::verse::VerseRef;
use crate::word::Word;

/// Search radius at which a match was found. Ordering is precedence:
/// an exact-verse match always beats an area match beats a corpus match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locality {
    ExactVerse,
    Area,
    Corpus,
}

impl Locality {
    pub fn as_str(self) -> &'static str {
        match self {
            Locality::ExactVerse => "exact-verse",
            Locality::Area => "area",
            Locality::Corpus => "corpus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    /// A reviewed correction exists for this word.
    Resolved,
    /// The word is on the accepted-words list.
    AcceptedVariation,
    /// A rule-generated spelling variant occurs near the same verse.
    LegitimateVariation,
    /// A high-similarity reference word suggests a transcription error.
    LikelyTypo,
    Unexplained,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Resolved => "resolved",
            Classification::AcceptedVariation => "accepted-variation",
            Classification::LegitimateVariation => "legitimate-variation",
            Classification::LikelyTypo => "likely-typo",
            Classification::Unexplained => "unexplained",
        }
    }
}

/// The reference word that explains a missing word, and where it was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvidence {
    pub matched: String,
    /// Symmetric similarity in [0, 1]; 1.0 for exact variation matches.
    pub similarity: f64,
    pub locality: Locality,
    pub edition: Edition,
}

/// One occurrence of a primary-text word absent from both reference corpora.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingWord {
    pub word: Word,
    pub verse: VerseRef,
    pub line_number: usize,
    pub source_line: String,
}

/// Classification plus orthogonal annotations for one missing word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub classification: Classification,
    pub evidence: Option<MatchEvidence>,
    /// The reviewed replacement, present only for [`Classification::Resolved`].
    pub correction: Option<String>,
    /// Original spelling begins with an uppercase letter.
    pub is_name: bool,
    /// The word is a Greek alphabetic numeral token.
    pub is_number: bool,
}
