//! Variation closure over the substitution rule catalog.
//!
//! Expands a normalized word into the set of spellings reachable by any
//! sequence of rule applications. Rules compose (a word may match two
//! rules in sequence), so a single pass is not enough; the closure
//! iterates until a pass adds nothing. The rule set is not known to be
//! confluent or size-decreasing, so iteration is bounded by a pass cap
//! and a growth bound, and the result records whether a bound was hit.

use std::collections::BTreeSet;

use lxx_model::normalize;

use crate::rules::CATALOG;

/// Maximum closure passes before giving up on a fixed point.
pub const MAX_PASSES: usize = 3;
/// Maximum members before the closure stops expanding.
pub const MAX_VARIANTS: usize = 4096;

/// The variants reachable from a seed word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationSet {
    pub words: BTreeSet<String>,
    /// True when a bound stopped the closure before a fixed point; the
    /// set may then be incomplete relative to the unbounded closure.
    pub capped: bool,
}

impl VariationSet {
    pub fn contains(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }
}

/// Compute the rule-catalog closure of `word`. Always contains the
/// normalized input. Deterministic: the accumulated set does not depend
/// on rule traversal order.
pub fn generate_variations(word: &str) -> VariationSet {
    let seed = normalize(word);
    let mut words = BTreeSet::new();
    words.insert(seed);

    let mut capped = true;
    for _ in 0..MAX_PASSES {
        let mut additions = Vec::new();
        for member in &words {
            for rule in CATALOG {
                // Both directions; every occurrence is replaced at once.
                if member.contains(rule.pattern) {
                    additions.push(member.replace(rule.pattern, rule.replacement));
                }
                if member.contains(rule.replacement) {
                    additions.push(member.replace(rule.replacement, rule.pattern));
                }
            }
            movable_nu(member, &mut additions);
        }
        let before = words.len();
        words.extend(additions);
        if words.len() == before {
            capped = false;
            break;
        }
        if words.len() > MAX_VARIANTS {
            break;
        }
    }

    VariationSet { words, capped }
}

/// Movable ν at word end: spellings in ε/ι gain a final ν, spellings in
/// εν/ιν lose it.
fn movable_nu(member: &str, additions: &mut Vec<String>) {
    if member.ends_with('ε') || member.ends_with('ι') {
        let mut with_nu = member.to_string();
        with_nu.push('ν');
        additions.push(with_nu);
    } else if member.ends_with("εν") || member.ends_with("ιν") {
        let mut chars = member.chars();
        chars.next_back();
        additions.push(chars.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_the_seed() {
        let set = generate_variations("συλλήψεται");
        assert!(set.contains(&normalize("συλλήψεται")));
    }

    #[test]
    fn lambda_future_stem_reaches_mu_form() {
        let set = generate_variations("συλλήψεται");
        assert!(set.contains("συλλημψεται"));
    }

    #[test]
    fn rules_compose_across_passes() {
        // λλ -> λ and ληψ -> λημψ applied in sequence.
        let set = generate_variations("συλλήψεται");
        assert!(set.contains("συλημψεται"));
    }

    #[test]
    fn movable_nu_is_bidirectional() {
        let set = generate_variations("ἐστί");
        assert!(set.contains("εστιν"));
        let set = generate_variations("ἐστίν");
        assert!(set.contains("εστι"));
    }

    #[test]
    fn seed_without_matching_rules_is_singleton_fixed_point() {
        let set = generate_variations("β");
        assert!(!set.capped);
        assert_eq!(set.words.len(), 1);
    }
}
