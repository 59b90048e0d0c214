//! Greek alphabetic numeral detection.
//!
//! The Milesian system writes numbers as letters marked with a keraia
//! (ιβʹ = 12, ͵α = 1000), reusing the archaic letters ϛ, ϟ, ϡ for 6, 90,
//! 900. Such tokens are flagged as number words, not vocabulary.

/// Letters valid inside a numeral token (the 24 letters plus episema).
const NUMERAL_LETTERS: &str = "αβγδεζηθικλμνξοπρστυφχψωϛϝϟϙϡ";

/// Keraia and the marks it normalizes to.
const NUMERAL_SIGNS: [char; 3] = ['\u{0374}', '\u{02B9}', '\u{2032}'];

/// Lower keraia, prefixed for thousands.
const LOWER_KERAIA: char = '\u{0375}';

/// True when the normalized token reads as an alphabetic numeral:
/// a short run of numeral letters carrying a keraia, or a standalone
/// episemon letter (those occur only as numbers).
pub fn is_numeral_token(normalized: &str) -> bool {
    let mut body = normalized.strip_prefix(LOWER_KERAIA).unwrap_or(normalized);
    let mut signed = body.len() != normalized.len();
    for sign in NUMERAL_SIGNS {
        if let Some(stripped) = body.strip_suffix(sign) {
            body = stripped;
            signed = true;
            break;
        }
    }
    let letters: Vec<char> = body.chars().collect();
    if letters.is_empty() || letters.len() > 4 {
        return false;
    }
    if !letters.iter().all(|c| NUMERAL_LETTERS.contains(*c)) {
        return false;
    }
    // Unmarked tokens are ordinary words unless they are episema.
    signed || letters.iter().all(|c| "ϛϝϟϙϡ".contains(*c))
}
