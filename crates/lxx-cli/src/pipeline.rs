//! Collation pipeline with explicit stages.
//!
//! 1. **Ingest**: load override tables and both reference corpora, scan
//!    the TeX source.
//! 2. **Index**: build one read-only word index per edition.
//! 3. **Detect**: keep the source tokens absent from every edition's
//!    vocabulary.
//! 4. **Classify**: run each missing word through the classifier.
//! 5. **Report**: write the TSV report.
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; adapter errors abort the run rather than emit a partial
//! report.

use std::path::Path;

use anyhow::{Context, Result};
use lxx_engine::{Classifier, LocatorOptions, ReferenceIndex};
use lxx_ingest::{
    SourceScan, load_accepted_words, load_corrections, load_reference_corpus, scan_source,
};
use lxx_model::{AcceptedWords, Corrections, Edition, MissingWord, Outcome};
use tracing::{debug, info};

/// One classified missing word, ready for the report.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub record: MissingWord,
    pub outcome: Outcome,
}

/// The reviewer override tables, empty when no files were given.
#[derive(Debug, Default, Clone)]
pub struct OverrideTables {
    pub accepted: AcceptedWords,
    pub corrections: Corrections,
}

pub fn load_overrides(
    accepted_path: Option<&Path>,
    corrections_path: Option<&Path>,
) -> Result<OverrideTables> {
    let accepted = match accepted_path {
        Some(path) => load_accepted_words(path)
            .with_context(|| format!("load accepted words from {}", path.display()))?,
        None => AcceptedWords::default(),
    };
    let corrections = match corrections_path {
        Some(path) => load_corrections(path)
            .with_context(|| format!("load corrections from {}", path.display()))?,
        None => Corrections::default(),
    };
    Ok(OverrideTables {
        accepted,
        corrections,
    })
}

/// Load one edition's corpus and build its index.
pub fn build_index(
    edition: Edition,
    words_path: &Path,
    versification_path: &Path,
) -> Result<ReferenceIndex> {
    let corpus = load_reference_corpus(edition, words_path, versification_path)
        .with_context(|| format!("load {edition} corpus"))?;
    let index =
        ReferenceIndex::build(corpus.edition, corpus.rows).with_global_words(corpus.unversed);
    info!(
        %edition,
        words = index.word_count(),
        verses = index.verse_count(),
        "reference index ready"
    );
    Ok(index)
}

pub fn scan(source: &Path) -> Result<SourceScan> {
    let scan =
        scan_source(source).with_context(|| format!("scan source {}", source.display()))?;
    info!(
        tokens = scan.tokens.len(),
        unlocated = scan.unlocated,
        "source scan complete"
    );
    Ok(scan)
}

/// Keep the tokens whose normalized form appears in no edition.
pub fn detect_missing(scan: &SourceScan, indexes: &[ReferenceIndex]) -> Vec<MissingWord> {
    let missing: Vec<MissingWord> = scan
        .tokens
        .iter()
        .filter(|token| {
            !indexes
                .iter()
                .any(|index| index.global_words().contains(&token.word.normalized))
        })
        .map(|token| MissingWord {
            word: token.word.clone(),
            verse: token.verse.clone(),
            line_number: token.line_number,
            source_line: token.source_line.clone(),
        })
        .collect();
    info!(
        scanned = scan.tokens.len(),
        missing = missing.len(),
        "missing word detection complete"
    );
    missing
}

pub fn classify_missing(
    missing: &[MissingWord],
    indexes: &[ReferenceIndex],
    overrides: &OverrideTables,
    options: LocatorOptions,
) -> Vec<ReportRow> {
    let classifier = Classifier::new(indexes, &overrides.accepted, &overrides.corrections, options);
    missing
        .iter()
        .map(|record| {
            let outcome = classifier.classify(record);
            debug!(
                word = %record.word.original,
                verse = %record.verse,
                classification = outcome.classification.as_str(),
                "classified"
            );
            ReportRow {
                record: record.clone(),
                outcome,
            }
        })
        .collect()
}

/// Write the tab-delimited report. Resolved rows carry the reviewed
/// replacement in the `matched` column.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("create report {}", path.display()))?;
    writer.write_record([
        "line",
        "verse",
        "word",
        "classification",
        "matched",
        "similarity",
        "locality",
        "edition",
        "is_name",
        "is_number",
    ])?;
    for row in rows {
        writer.write_record(report_record(row))?;
    }
    writer.flush().context("flush report")?;
    Ok(())
}

/// Render one report row as TSV fields.
pub fn report_record(row: &ReportRow) -> [String; 10] {
    let outcome = &row.outcome;
    let (matched, similarity, locality, edition) = match (&outcome.evidence, &outcome.correction) {
        (Some(evidence), _) => (
            evidence.matched.clone(),
            format!("{:.3}", evidence.similarity),
            evidence.locality.as_str().to_string(),
            evidence.edition.as_str().to_string(),
        ),
        (None, Some(correction)) => (
            correction.clone(),
            String::new(),
            String::new(),
            String::new(),
        ),
        (None, None) => (String::new(), String::new(), String::new(), String::new()),
    };
    [
        row.record.line_number.to_string(),
        row.record.verse.to_string(),
        row.record.word.original.clone(),
        outcome.classification.as_str().to_string(),
        matched,
        similarity,
        locality,
        edition,
        outcome.is_name.to_string(),
        outcome.is_number.to_string(),
    ]
}
