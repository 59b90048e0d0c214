//! String similarity scoring.
//!
//! `similarity` is the symmetric ratio `2·m / (|a| + |b|)` where `m` is
//! the length of the longest common subsequence, computed over chars.
//! `levenshtein` is used only to pick the most informative variant when
//! several exact variation matches qualify.

/// Symmetric similarity in [0, 1]; 1.0 for equal strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let m = lcs_len(&a, &b);
    (2.0 * m as f64) / ((a.len() + b.len()) as f64)
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            row[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                row[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}

/// Classic edit distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            row[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("λογος", "λογος"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("αβγ", "δεζ"), 0.0);
    }

    #[test]
    fn single_char_drop_scores_high() {
        // ἑπτκόσια vs ἑπτακόσια, normalized: 8 vs 9 chars, lcs 8.
        let score = similarity("επτκοσια", "επτακοσια");
        assert!((score - 16.0 / 17.0).abs() < 1e-9);
        assert!(score >= 0.85);
    }

    #[test]
    fn symmetric() {
        let a = "καταληψομαι";
        let b = "καταλημψομαι";
        assert_eq!(similarity(a, b), similarity(b, a));
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("επτκοσια", "επτακοσια"), 1);
    }
}
