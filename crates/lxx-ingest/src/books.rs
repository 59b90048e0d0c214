//! Book-code canonicalization.
//!
//! The canonical comparison space uses Rahlfs-style codes. Brenton book
//! headings (Greek, as printed) and Swete codes both map into it before
//! any index lookup. Split-tradition books follow the text Brenton
//! prints: JoshB, JudgB, DanTh (Theodotion), TobS (Sinaiticus), SusTh,
//! BelTh. Rahlfs combines Ezra-Nehemiah into 2Esdr, so Nehemiah chapters
//! are renumbered +10.

use lxx_model::{BookCode, ModelError, normalize};

/// Brenton Greek heading -> canonical code.
const BRENTON_BOOKS: &[(&str, &str)] = &[
    ("ΓΕΝΕΣΙΣ", "Gen"),
    ("ΕΞΟΔΟΣ", "Exod"),
    ("ΛΕΥΙΤΙΚΟΝ", "Lev"),
    ("ΑΡΙΘΜΟΙ", "Num"),
    ("ΔΕΥΤΕΡΟΝΟΜΙΟΝ", "Deut"),
    ("ΙΗΣΟΥΣ ΝΑΥΗ", "JoshB"),
    ("ΚΡΙΤΑΙ", "JudgB"),
    ("ΡΟΥΘ", "Ruth"),
    ("ΒΑΣΙΛΕΙΩΝ Α", "1Sam"),
    ("ΒΑΣΙΛΕΙΩΝ Β", "2Sam"),
    ("ΒΑΣΙΛΕΙΩΝ Γ", "1Kgs"),
    ("ΒΑΣΙΛΕΙΩΝ Δ", "2Kgs"),
    ("ΠΑΡΑΛΕΙΠΟΜΕΝΩΝ Α", "1Chr"),
    ("ΠΑΡΑΛΕΙΠΟΜΕΝΩΝ Β", "2Chr"),
    ("ΕΣΔΡΑΣ", "2Esdr"),
    ("ΝΕΕΜΙΑΣ", "2Esdr"),
    ("ΕΣΔΡΑΣ Α", "1Esdr"),
    ("ΕΣΘΗΡ", "Esth"),
    ("ΙΩΒ", "Job"),
    ("ΨΑΛΜΟΙ", "Ps"),
    ("ΠΑΡΟΙΜΙΑΙ ΣΑΛΩΜΩΝΤΟΣ", "Prov"),
    ("ΕΚΚΛΗΣΙΑΣΤΗΣ", "Eccl"),
    ("ΑΣΜΑ", "Song"),
    ("ΗΣΑΙΑΣ", "Isa"),
    ("ΙΕΡΕΜΙΑΣ", "Jer"),
    ("ΘΡΗΝΟΙ ΙΕΡΕΜΙΟΥ", "Lam"),
    ("ΙΕΖΕΚΙΗΛ", "Ezek"),
    ("ΔΑΝΙΗΛ", "DanTh"),
    ("ΩΣΗΕ", "Hos"),
    ("ΙΩΗΛ", "Joel"),
    ("ΑΜΩΣ", "Amos"),
    ("ΟΒΔΕΙΟΥ", "Obad"),
    ("ΙΩΝΑΣ", "Jonah"),
    ("ΜΙΧΑΙΑΣ", "Mic"),
    ("ΝΑΟΥΜ", "Nah"),
    ("ΑΜΒΑΚΟΥΜ", "Hab"),
    ("ΣΟΦΟΝΙΑΣ", "Zeph"),
    ("ΑΓΓΑΙΟΣ", "Hag"),
    ("ΖΑΧΑΡΙΑΣ", "Zech"),
    ("ΜΑΛΑΧΙΑΣ", "Mal"),
    ("ΤΩΒΙΤ", "TobS"),
    ("ΙΟΥΔΙΘ", "Jdt"),
    ("ΣΟΦΙΑ ΣΑΛΩΜΩΝ", "Wis"),
    ("ΣΟΦΙΑ ΣΕΙΡΑΧ", "Sir"),
    ("ΒΑΡΟΥΧ", "Bar"),
    ("ΕΠΙΣΤΟΛΗ ΙΕΡΕΜΙΟΥ", "EpJer"),
    ("ΣΩΣΑΝΝΑ", "SusTh"),
    ("ΒΗΛ ΚΑΙ ΔΡΑΚΩΝ", "BelTh"),
    ("ΜΑΚΚΑΒΑΙΩΝ Α", "1Macc"),
    ("ΜΑΚΚΑΒΑΙΩΝ Β", "2Macc"),
    ("ΜΑΚΚΑΒΑΙΩΝ Γ", "3Macc"),
    ("ΜΑΚΚΑΒΑΙΩΝ Δ", "4Macc"),
    ("ΠΡΟΣΕΥΧΗ ΜΑΝΑΣΣΗ ΥΙΟΥ ΕΖΕΚΙΟΥ", "Odes"),
];

/// Swete code -> canonical code.
const SWETE_BOOKS: &[(&str, &str)] = &[
    ("Gen", "Gen"),
    ("Exo", "Exod"),
    ("Lev", "Lev"),
    ("Num", "Num"),
    ("Deu", "Deut"),
    ("Jos", "JoshB"),
    ("Jdg", "JudgB"),
    ("Rut", "Ruth"),
    ("1Sa", "1Sam"),
    ("2Sa", "2Sam"),
    ("1Ki", "1Kgs"),
    ("2Ki", "2Kgs"),
    ("1Ch", "1Chr"),
    ("2Ch", "2Chr"),
    ("Ezr", "2Esdr"),
    ("Neh", "2Esdr"),
    ("1Es", "1Esdr"),
    ("Est", "Esth"),
    ("Job", "Job"),
    ("Psa", "Ps"),
    ("Pro", "Prov"),
    ("Ecc", "Eccl"),
    ("Sol", "Song"),
    ("Isa", "Isa"),
    ("Jer", "Jer"),
    ("Lam", "Lam"),
    ("Eze", "Ezek"),
    ("Dan", "DanTh"),
    ("Hos", "Hos"),
    ("Joe", "Joel"),
    ("Amo", "Amos"),
    ("Oba", "Obad"),
    ("Jon", "Jonah"),
    ("Mic", "Mic"),
    ("Nah", "Nah"),
    ("Hab", "Hab"),
    ("Zep", "Zeph"),
    ("Hag", "Hag"),
    ("Zec", "Zech"),
    ("Mal", "Mal"),
    ("Tob", "TobS"),
    ("Jdt", "Jdt"),
    ("Wis", "Wis"),
    ("Sir", "Sir"),
    ("Bar", "Bar"),
    ("Epj", "EpJer"),
    ("Sus", "SusTh"),
    ("Bel", "BelTh"),
    ("1Ma", "1Macc"),
    ("2Ma", "2Macc"),
    ("3Ma", "3Macc"),
    ("4Ma", "4Macc"),
    ("Ode", "Odes"),
];

/// Nehemiah chapters live at 2Esdr 11-23 in the canonical space.
const NEHEMIAH_CHAPTER_OFFSET: u32 = 10;

/// Map a Brenton book heading plus chapter into the canonical space.
/// Headings are compared accent-insensitively.
pub fn canonicalize_primary(heading: &str, chapter: u32) -> Option<(BookCode, u32)> {
    let key = normalize(heading);
    let (name, code) = BRENTON_BOOKS
        .iter()
        .find(|(name, _)| normalize(name) == key)?;
    let chapter = if normalize(name) == normalize("ΝΕΕΜΙΑΣ") {
        chapter + NEHEMIAH_CHAPTER_OFFSET
    } else {
        chapter
    };
    let book = BookCode::new(*code).ok()?;
    Some((book, chapter))
}

/// Map a Swete book code plus chapter into the canonical space.
pub fn canonicalize_swete(code: &str, chapter: u32) -> Option<(BookCode, u32)> {
    let (swete, canonical) = SWETE_BOOKS.iter().find(|(swete, _)| *swete == code)?;
    let chapter = if *swete == "Neh" {
        chapter + NEHEMIAH_CHAPTER_OFFSET
    } else {
        chapter
    };
    let book = BookCode::new(*canonical).ok()?;
    Some((book, chapter))
}

/// Validate a Rahlfs code (already canonical).
pub fn canonicalize_rahlfs(code: &str, chapter: u32) -> Result<(BookCode, u32), ModelError> {
    BookCode::new(code).map(|book| (book, chapter))
}

/// All (Brenton heading, canonical code) pairs, for listing.
pub fn brenton_books() -> &'static [(&'static str, &'static str)] {
    BRENTON_BOOKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brenton_headings_map_accent_insensitively() {
        let (book, chapter) = canonicalize_primary("ΓΕΝΕΣΙΣ", 14).unwrap();
        assert_eq!(book.as_str(), "Gen");
        assert_eq!(chapter, 14);
        // Accented heading variant resolves to the same book.
        let (book, _) = canonicalize_primary("Γένεσις", 1).unwrap();
        assert_eq!(book.as_str(), "Gen");
    }

    #[test]
    fn nehemiah_chapters_shift_into_second_esdras() {
        let (book, chapter) = canonicalize_primary("ΝΕΕΜΙΑΣ", 1).unwrap();
        assert_eq!(book.as_str(), "2Esdr");
        assert_eq!(chapter, 11);

        let (book, chapter) = canonicalize_swete("Neh", 3).unwrap();
        assert_eq!(book.as_str(), "2Esdr");
        assert_eq!(chapter, 13);
    }

    #[test]
    fn ezra_keeps_its_chapters() {
        let (book, chapter) = canonicalize_primary("ΕΣΔΡΑΣ", 8).unwrap();
        assert_eq!(book.as_str(), "2Esdr");
        assert_eq!(chapter, 8);
    }

    #[test]
    fn swete_codes_map_to_canonical() {
        assert_eq!(canonicalize_swete("Exo", 2).unwrap().0.as_str(), "Exod");
        assert_eq!(canonicalize_swete("Psa", 22).unwrap().0.as_str(), "Ps");
        assert!(canonicalize_swete("Xyz", 1).is_none());
    }

    #[test]
    fn unknown_heading_is_not_guessed() {
        assert!(canonicalize_primary("ΑΓΝΩΣΤΟΝ", 1).is_none());
    }
}
