//! Override table loading.
//!
//! `accepted_words.txt` is one word per line, `#` comments allowed.
//! `word_corrections.tsv` is `verse \t wrong \t corrected`, where the
//! verse column is a reference (`Book.C.V`, `Book.C:V`, or `Book C:V`)
//! or `*` for a corpus-wide entry.

use std::path::Path;

use lxx_model::{AcceptedWords, CorrectionScope, Corrections, VerseRef};
use tracing::debug;

use crate::error::{IngestError, Result};

pub fn load_accepted_words(path: &Path) -> Result<AcceptedWords> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect::<Vec<_>>();
    let accepted = AcceptedWords::new(&words);
    debug!(count = accepted.len(), "loaded accepted words");
    Ok(accepted)
}

pub fn load_corrections(path: &Path) -> Result<Corrections> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut corrections = Corrections::default();
    for (line_index, raw_line) in text.lines().enumerate() {
        let line = line_index + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut fields = trimmed.split('\t');
        let (Some(scope_field), Some(wrong), Some(corrected)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(IngestError::MalformedCorrectionRow {
                path: path.to_path_buf(),
                line,
                reason: "expected verse, wrong word, corrected word".to_string(),
            });
        };
        let scope = parse_scope(scope_field).map_err(|reason| {
            IngestError::MalformedCorrectionRow {
                path: path.to_path_buf(),
                line,
                reason,
            }
        })?;
        let (wrong, corrected) = (wrong.trim(), corrected.trim());
        if wrong.is_empty() || corrected.is_empty() {
            return Err(IngestError::MalformedCorrectionRow {
                path: path.to_path_buf(),
                line,
                reason: "empty word column".to_string(),
            });
        }
        corrections.insert(wrong, scope, corrected);
    }
    debug!(count = corrections.len(), "loaded corrections");
    Ok(corrections)
}

fn parse_scope(field: &str) -> std::result::Result<CorrectionScope, String> {
    let field = field.trim();
    if field == "*" {
        return Ok(CorrectionScope::Any);
    }
    // Reviewers also write the `Book C:V` citation form.
    let dotted = field.replacen(' ', ".", 1);
    VerseRef::parse(&dotted)
        .map(CorrectionScope::Verse)
        .map_err(|error| error.to_string())
}
