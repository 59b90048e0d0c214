//! Reference corpus loading.
//!
//! Each edition ships as two tab-delimited files: a word list
//! (`word_id \t word`) and a versification table mapping each verse to
//! its first word id (either column order occurs in the wild). A verse
//! owns the word ids from its start up to the next verse's start minus
//! one; the last verse runs to the end of the word list.

use std::collections::BTreeMap;
use std::path::Path;

use lxx_model::{Edition, VerseRef, Word};
use tracing::{debug, warn};

use crate::books::{canonicalize_rahlfs, canonicalize_swete};
use crate::error::{IngestError, Result};

/// Canonicalized rows for one edition, ready for index building.
#[derive(Debug, Clone)]
pub struct ReferenceCorpus {
    pub edition: Edition,
    pub rows: Vec<(VerseRef, Word)>,
    /// Words whose ids precede the first versification entry. They still
    /// belong to the edition's global vocabulary.
    pub unversed: Vec<Word>,
}

pub fn load_reference_corpus(
    edition: Edition,
    words_path: &Path,
    versification_path: &Path,
) -> Result<ReferenceCorpus> {
    let words = load_words(words_path)?;
    let mut verses = load_versification(edition, versification_path)?;
    verses.sort_by_key(|(id, _)| *id);

    let mut rows = Vec::new();
    let mut unversed = Vec::new();

    if let Some((first_start, _)) = verses.first() {
        for (_, word) in words.range(..*first_start) {
            unversed.push(Word::new(word.as_str()));
        }
    } else {
        warn!(%edition, "versification is empty; all words treated as unversed");
        unversed.extend(words.values().map(|word| Word::new(word.as_str())));
    }

    for (position, (start, verse)) in verses.iter().enumerate() {
        let words_in_verse: Vec<&String> = match verses.get(position + 1) {
            Some((next_start, _)) => words.range(*start..*next_start).map(|(_, w)| w).collect(),
            None => words.range(*start..).map(|(_, w)| w).collect(),
        };
        for word in words_in_verse {
            rows.push((verse.clone(), Word::new(word.as_str())));
        }
    }

    debug!(
        %edition,
        words = words.len(),
        verses = verses.len(),
        rows = rows.len(),
        unversed = unversed.len(),
        "loaded reference corpus"
    );
    Ok(ReferenceCorpus {
        edition,
        rows,
        unversed,
    })
}

fn reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn load_words(path: &Path) -> Result<BTreeMap<u64, String>> {
    let mut words = BTreeMap::new();
    for (line, record) in reader(path)?.records().enumerate() {
        let line = line + 1;
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() < 2 {
            return Err(IngestError::MalformedReferenceRow {
                path: path.to_path_buf(),
                line,
                reason: format!("expected word id and word, got {} fields", record.len()),
            });
        }
        let id: u64 = record[0]
            .trim()
            .parse()
            .map_err(|_| IngestError::MalformedReferenceRow {
                path: path.to_path_buf(),
                line,
                reason: format!("invalid word id {:?}", &record[0]),
            })?;
        // The word is the last field; intermediate columns carry lemma
        // or tagging data in some exports.
        let word = record[record.len() - 1].trim();
        if word.is_empty() {
            return Err(IngestError::MalformedReferenceRow {
                path: path.to_path_buf(),
                line,
                reason: "empty word".to_string(),
            });
        }
        words.insert(id, word.to_string());
    }
    Ok(words)
}

fn load_versification(edition: Edition, path: &Path) -> Result<Vec<(u64, VerseRef)>> {
    let mut verses = Vec::new();
    for (line, record) in reader(path)?.records().enumerate() {
        let line = line + 1;
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() < 2 {
            return Err(IngestError::MalformedReferenceRow {
                path: path.to_path_buf(),
                line,
                reason: format!("expected verse ref and word id, got {} fields", record.len()),
            });
        }
        // Column order varies: (id, ref) or (ref, id).
        let (id_field, ref_field) = if record[0].trim().parse::<u64>().is_ok() {
            (&record[0], &record[1])
        } else {
            (&record[1], &record[0])
        };
        let id: u64 = id_field
            .trim()
            .parse()
            .map_err(|_| IngestError::MalformedReferenceRow {
                path: path.to_path_buf(),
                line,
                reason: format!("invalid word id {:?}", id_field),
            })?;
        let parsed = VerseRef::parse(ref_field.trim()).map_err(|error| {
            IngestError::MalformedReferenceRow {
                path: path.to_path_buf(),
                line,
                reason: error.to_string(),
            }
        })?;
        let verse = canonicalize(edition, &parsed).ok_or_else(|| IngestError::UnknownBookCode {
            edition: edition.to_string(),
            code: parsed.book.as_str().to_string(),
        })?;
        verses.push((id, verse));
    }
    Ok(verses)
}

fn canonicalize(edition: Edition, parsed: &VerseRef) -> Option<VerseRef> {
    let (book, chapter) = match edition {
        Edition::Rahlfs => canonicalize_rahlfs(parsed.book.as_str(), parsed.chapter).ok()?,
        Edition::Swete => canonicalize_swete(parsed.book.as_str(), parsed.chapter)?,
    };
    Some(VerseRef::new(book, chapter, parsed.verse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn joins_words_to_verses_by_id_ranges() {
        let dir = tempfile::tempdir().unwrap();
        let words = write_file(
            &dir,
            "words.csv",
            "1\tἐν\n2\tἀρχῇ\n3\tἐποίησεν\n4\tκαὶ\n5\tἡ\n",
        );
        let verses = write_file(&dir, "verses.csv", "Gen.1.1\t1\nGen.1.2\t4\n");

        let corpus = load_reference_corpus(Edition::Rahlfs, &words, &verses).unwrap();
        assert!(corpus.unversed.is_empty());
        assert_eq!(corpus.rows.len(), 5);
        let gen_1_1 = VerseRef::parse("Gen.1.1").unwrap();
        let first_verse: Vec<&str> = corpus
            .rows
            .iter()
            .filter(|(verse, _)| *verse == gen_1_1)
            .map(|(_, word)| word.original.as_str())
            .collect();
        assert_eq!(first_verse, ["ἐν", "ἀρχῇ", "ἐποίησεν"]);
    }

    #[test]
    fn accepts_reversed_versification_columns_and_colon_refs() {
        let dir = tempfile::tempdir().unwrap();
        let words = write_file(&dir, "words.csv", "1\tἐν\n2\tἀρχῇ\n");
        let verses = write_file(&dir, "verses.csv", "1\tGen.1:1\n");

        let corpus = load_reference_corpus(Edition::Swete, &words, &verses).unwrap();
        assert_eq!(corpus.rows.len(), 2);
        assert_eq!(corpus.rows[0].0, VerseRef::parse("Gen.1.1").unwrap());
    }

    #[test]
    fn swete_books_are_canonicalized() {
        let dir = tempfile::tempdir().unwrap();
        let words = write_file(&dir, "words.csv", "1\tλόγος\n");
        let verses = write_file(&dir, "verses.csv", "Neh.1:1\t1\n");

        let corpus = load_reference_corpus(Edition::Swete, &words, &verses).unwrap();
        assert_eq!(corpus.rows[0].0, VerseRef::parse("2Esdr.11.1").unwrap());
    }

    #[test]
    fn malformed_word_id_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let words = write_file(&dir, "words.csv", "x\tἐν\n");
        let verses = write_file(&dir, "verses.csv", "Gen.1.1\t1\n");

        let error = load_reference_corpus(Edition::Rahlfs, &words, &verses).unwrap_err();
        assert!(matches!(
            error,
            IngestError::MalformedReferenceRow { line: 1, .. }
        ));
    }

    #[test]
    fn unknown_swete_code_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let words = write_file(&dir, "words.csv", "1\tἐν\n");
        let verses = write_file(&dir, "verses.csv", "Zzz.1:1\t1\n");

        let error = load_reference_corpus(Edition::Swete, &words, &verses).unwrap_err();
        assert!(matches!(error, IngestError::UnknownBookCode { .. }));
    }

    #[test]
    fn words_before_first_verse_are_unversed() {
        let dir = tempfile::tempdir().unwrap();
        let words = write_file(&dir, "words.csv", "1\tτίτλος\n2\tἐν\n");
        let verses = write_file(&dir, "verses.csv", "Gen.1.1\t2\n");

        let corpus = load_reference_corpus(Edition::Rahlfs, &words, &verses).unwrap();
        assert_eq!(corpus.unversed.len(), 1);
        assert_eq!(corpus.rows.len(), 1);
    }
}
