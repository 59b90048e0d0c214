use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use lxx_cli::pipeline::{
    build_index, classify_missing, detect_missing, load_overrides, scan, write_report,
};
use lxx_engine::LocatorOptions;
use lxx_ingest::brenton_books;
use lxx_model::{Classification, Edition};

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;
use crate::types::CheckResult;

pub fn run_books() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Heading", "Canonical"]);
    apply_table_style(&mut table);
    for (heading, canonical) in brenton_books() {
        table.add_row(vec![(*heading).to_string(), (*canonical).to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let check_span = info_span!("check", source = %args.source.display());
    let _check_guard = check_span.enter();

    // =========================================================================
    // Stage 1: Ingest - overrides, reference corpora, source scan
    // =========================================================================
    let ingest_span = info_span!("ingest");
    let ingest_start = Instant::now();
    let (overrides, indexes, scanned) = ingest_span.in_scope(|| -> Result<_> {
        let overrides =
            load_overrides(args.accepted_words.as_deref(), args.corrections.as_deref())?;
        let mut indexes = vec![build_index(
            Edition::Rahlfs,
            &args.rahlfs_words,
            &args.rahlfs_verses,
        )?];
        if let (Some(words), Some(verses)) = (&args.swete_words, &args.swete_verses) {
            indexes.push(build_index(Edition::Swete, words, verses)?);
        }
        let scanned = scan(&args.source)?;
        Ok((overrides, indexes, scanned))
    })?;
    info!(
        editions = indexes.len(),
        tokens = scanned.tokens.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Classify - detect missing words and run the cascade
    // =========================================================================
    let options = LocatorOptions {
        fuzzy: !args.no_fuzzy,
        corpus_scan: !args.no_corpus_scan,
    };
    let classify_span = info_span!("classify");
    let classify_start = Instant::now();
    let rows = classify_span.in_scope(|| {
        let missing = detect_missing(&scanned, &indexes);
        classify_missing(&missing, &indexes, &overrides, options)
    });
    info!(
        missing = rows.len(),
        duration_ms = classify_start.elapsed().as_millis(),
        "classification complete"
    );

    // =========================================================================
    // Stage 3: Report - write the TSV unless this is a dry run
    // =========================================================================
    let report_path = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| args.source.with_extension("report.tsv"));
        let report_span = info_span!("report", path = %path.display());
        report_span.in_scope(|| write_report(&path, &rows))?;
        info!(path = %path.display(), rows = rows.len(), "report written");
        Some(path)
    };

    let has_unexplained = rows
        .iter()
        .any(|row| matches!(row.outcome.classification, Classification::Unexplained));

    Ok(CheckResult {
        source: args.source.clone(),
        report_path,
        scanned_tokens: scanned.tokens.len(),
        unlocated_tokens: scanned.unlocated,
        rows,
        has_unexplained,
    })
}
