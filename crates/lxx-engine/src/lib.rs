pub mod classify;
pub mod index;
pub mod locate;
pub mod numerals;
pub mod rules;
pub mod similarity;
pub mod variations;

pub use classify::Classifier;
pub use index::ReferenceIndex;
pub use locate::{AREA_RADIUS, LocatorMatch, LocatorOptions, SIMILARITY_THRESHOLD, locate};
pub use rules::{CATALOG, RuleCategory, SubstitutionRule};
pub use similarity::{levenshtein, similarity};
pub use variations::{MAX_PASSES, MAX_VARIANTS, VariationSet, generate_variations};
