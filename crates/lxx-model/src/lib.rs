pub mod classification;
pub mod edition;
pub mod error;
pub mod overrides;
pub mod verse;
pub mod word;

pub use classification::{Classification, Locality, MatchEvidence, MissingWord, Outcome};
pub use edition::Edition;
pub use error::{ModelError, Result};
pub use overrides::{AcceptedWords, Correction, CorrectionScope, Corrections};
pub use verse::{BookCode, VerseRef};
pub use word::{Word, normalize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locality_precedence_is_strict() {
        assert!(Locality::ExactVerse < Locality::Area);
        assert!(Locality::Area < Locality::Corpus);
    }

    #[test]
    fn outcome_serializes() {
        let outcome = Outcome {
            classification: Classification::LikelyTypo,
            evidence: Some(MatchEvidence {
                matched: "ἑπτακόσια".to_string(),
                similarity: 0.89,
                locality: Locality::ExactVerse,
                edition: Edition::Rahlfs,
            }),
            correction: None,
            is_name: false,
            is_number: false,
        };
        let json = serde_json::to_string(&outcome).expect("serialize outcome");
        assert!(json.contains("likely-typo"));
        assert!(json.contains("exact-verse"));
        let round: Outcome = serde_json::from_str(&json).expect("deserialize outcome");
        assert_eq!(round.classification, Classification::LikelyTypo);
    }
}
