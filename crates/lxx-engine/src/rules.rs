//! The substitution rule catalog.
//!
//! Each rule pairs two substrings attested as interchangeable in Greek
//! manuscript traditions. Patterns are stored accent-stripped and
//! lowercase because rules operate on normalized words. The catalog is
//! declarative data; the closure algorithm in [`crate::variations`] never
//! special-cases individual rules.

/// Why a substitution is considered legitimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    /// Future of λαμβάνω and compounds: λήψομαι ↔ λήμψομαι.
    LambdaFuture,
    /// Aorist passive of the same verbs: ἐλήφθη ↔ ἐλήμφθη.
    AoristPassive,
    /// ὀλοθρεύω ↔ ὀλεθρεύω and the ἐξ- compounds.
    DestructionVerb,
    /// δανείζω ↔ δανίζω.
    LoanVerb,
    /// γέννημα ↔ γένημα.
    GenerationWord,
    /// ἐντέλλομαι variants.
    CommandVerb,
    /// περιτέμνω infinitive variants.
    CircumcisionVerb,
    VowelContraction,
    /// Iotacism and related diphthong interchange.
    Diphthong,
    /// Short/long vowel interchange.
    Ablaut,
    AoristVowel,
    AoristConsonant,
    /// Elision and assimilation in compound prefixes.
    CompoundPrefix,
    Participle,
    /// Single vs. double consonant.
    DoubleConsonant,
    /// Attested variant of one specific word.
    SpecificWord,
}

/// A single substitution rule. Applied in both directions by the closure.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub category: RuleCategory,
}

const fn rule(
    pattern: &'static str,
    replacement: &'static str,
    category: RuleCategory,
) -> SubstitutionRule {
    SubstitutionRule {
        pattern,
        replacement,
        category,
    }
}

/// The fixed, ordered rule catalog. Order affects only traversal, not the
/// final closure.
pub const CATALOG: &[SubstitutionRule] = &[
    // Lambda futures; compounds (συλλήψ-, καταλήψ-, ...) contain the same
    // stem, so one rule covers the whole compound list.
    rule("ληψ", "λημψ", RuleCategory::LambdaFuture),
    rule("ληφθ", "λημφθ", RuleCategory::AoristPassive),
    rule("ληψθ", "λημψθ", RuleCategory::AoristPassive),
    rule("ολοθρ", "ολεθρ", RuleCategory::DestructionVerb),
    rule("ωλοθρ", "ωλεθρ", RuleCategory::DestructionVerb),
    rule("δανε", "δανι", RuleCategory::LoanVerb),
    rule("γεννημ", "γενημ", RuleCategory::GenerationWord),
    rule("εννημ", "ενημ", RuleCategory::GenerationWord),
    rule("εντελλ", "αντελλ", RuleCategory::CommandVerb),
    rule("εντελ", "εντλ", RuleCategory::CommandVerb),
    rule("περιτεμε", "περιτεμνε", RuleCategory::CircumcisionVerb),
    rule("εω", "ω", RuleCategory::VowelContraction),
    rule("οε", "ου", RuleCategory::VowelContraction),
    rule("αε", "α", RuleCategory::VowelContraction),
    rule("αο", "ω", RuleCategory::VowelContraction),
    rule("εε", "ει", RuleCategory::VowelContraction),
    rule("ει", "ι", RuleCategory::Diphthong),
    rule("οι", "υ", RuleCategory::Diphthong),
    rule("αι", "ε", RuleCategory::Diphthong),
    rule("ε", "η", RuleCategory::Ablaut),
    rule("ο", "ω", RuleCategory::Ablaut),
    rule("α", "η", RuleCategory::Ablaut),
    rule("φειλ", "φηλ", RuleCategory::AoristVowel),
    rule("ειλ", "ηλ", RuleCategory::AoristVowel),
    rule("θη", "ση", RuleCategory::AoristConsonant),
    rule("προσ", "προ", RuleCategory::CompoundPrefix),
    rule("κατα", "κατ", RuleCategory::CompoundPrefix),
    rule("κατα", "καθ", RuleCategory::CompoundPrefix),
    rule("κατ", "καθ", RuleCategory::CompoundPrefix),
    rule("απο", "απ", RuleCategory::CompoundPrefix),
    rule("απο", "αφ", RuleCategory::CompoundPrefix),
    rule("απ", "αφ", RuleCategory::CompoundPrefix),
    rule("επι", "επ", RuleCategory::CompoundPrefix),
    rule("επι", "εφ", RuleCategory::CompoundPrefix),
    rule("επ", "εφ", RuleCategory::CompoundPrefix),
    rule("συν", "συ", RuleCategory::CompoundPrefix),
    rule("συν", "συμ", RuleCategory::CompoundPrefix),
    rule("συ", "συμ", RuleCategory::CompoundPrefix),
    rule("ουσ", "οντ", RuleCategory::Participle),
    rule("ων", "οντ", RuleCategory::Participle),
    rule("ομεν", "ωμεν", RuleCategory::Participle),
    rule("ρρ", "ρ", RuleCategory::DoubleConsonant),
    rule("λλ", "λ", RuleCategory::DoubleConsonant),
    rule("σσ", "σ", RuleCategory::DoubleConsonant),
    rule("ττ", "τ", RuleCategory::DoubleConsonant),
    rule("διδραγμον", "διδραχμον", RuleCategory::SpecificWord),
    rule("πρωιμον", "προιμον", RuleCategory::SpecificWord),
    rule("πελακαν", "πελεκαν", RuleCategory::SpecificWord),
    rule("βδελυμα", "βδελυγμα", RuleCategory::SpecificWord),
    rule("εξεναντι", "εναντι", RuleCategory::SpecificWord),
    rule("τροφοφορ", "τροποφορ", RuleCategory::SpecificWord),
];
