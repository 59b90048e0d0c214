//! End-to-end pipeline tests over small file fixtures.

use std::io::Write as _;
use std::path::PathBuf;

use lxx_cli::pipeline::{
    build_index, classify_missing, detect_missing, load_overrides, report_record, scan,
    write_report,
};
use lxx_engine::LocatorOptions;
use lxx_model::{Classification, Edition};

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

struct Fixture {
    _dir: tempfile::TempDir,
    source: PathBuf,
    words: PathBuf,
    verses: PathBuf,
}

/// Genesis opening with three seeded discrepancies: an orthographic
/// variation, a dropped letter, and a name absent from the reference.
fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let words = write_file(
        &dir,
        "rahlfs_words.csv",
        "1\tἐν\n2\tἀρχῇ\n3\tἐποίησεν\n4\tὁ\n5\tθεός\n6\tσυλλήμψεται\n7\tἑπτακόσια\n",
    );
    let verses = write_file(&dir, "rahlfs_verses.csv", "Gen.1.1\t1\nGen.1.2\t6\n");
    let source = write_file(
        &dir,
        "genesis.tex",
        "\\biblebook{ΓΕΝΕΣΙΣ}\n\
         \\lettrine{Ἐ}{ν} ἀρχῇ ἐποίησεν ὁ θεός\n\
         \\vs{2} συλλήψεται ἑπτκόσια Ἀβραάμ\n",
    );
    Fixture {
        _dir: dir,
        source,
        words,
        verses,
    }
}

#[test]
fn classifies_the_seeded_discrepancies() {
    let fixture = fixture();
    let index = build_index(Edition::Rahlfs, &fixture.words, &fixture.verses).unwrap();
    let indexes = vec![index];
    let scanned = scan(&fixture.source).unwrap();
    assert_eq!(scanned.tokens.len(), 8);
    assert_eq!(scanned.unlocated, 0);

    let missing = detect_missing(&scanned, &indexes);
    let overrides = load_overrides(None, None).unwrap();
    let rows = classify_missing(&missing, &indexes, &overrides, LocatorOptions::default());
    assert_eq!(rows.len(), 3);

    let variation = &rows[0];
    assert_eq!(variation.record.word.original, "συλλήψεται");
    assert_eq!(
        variation.outcome.classification,
        Classification::LegitimateVariation
    );
    let evidence = variation.outcome.evidence.as_ref().unwrap();
    assert_eq!(evidence.matched, "συλλημψεται");
    assert_eq!(evidence.similarity, 1.0);

    let typo = &rows[1];
    assert_eq!(typo.record.word.original, "ἑπτκόσια");
    assert_eq!(typo.outcome.classification, Classification::LikelyTypo);
    assert_eq!(
        typo.outcome.evidence.as_ref().unwrap().matched,
        "επτακοσια"
    );

    let name = &rows[2];
    assert_eq!(name.record.word.original, "Ἀβραάμ");
    insta::assert_snapshot!(name.outcome.classification.as_str(), @"unexplained");
    assert!(name.outcome.is_name);
    assert!(!name.outcome.is_number);
}

#[test]
fn report_rows_carry_evidence_columns() {
    let fixture = fixture();
    let indexes = vec![build_index(Edition::Rahlfs, &fixture.words, &fixture.verses).unwrap()];
    let scanned = scan(&fixture.source).unwrap();
    let missing = detect_missing(&scanned, &indexes);
    let overrides = load_overrides(None, None).unwrap();
    let rows = classify_missing(&missing, &indexes, &overrides, LocatorOptions::default());

    let record = report_record(&rows[0]);
    assert_eq!(
        record,
        [
            "3",
            "Gen.1.2",
            "συλλήψεται",
            "legitimate-variation",
            "συλλημψεται",
            "1.000",
            "exact-verse",
            "rahlfs",
            "false",
            "false",
        ]
        .map(String::from)
    );

    let unexplained = report_record(&rows[2]);
    assert_eq!(unexplained[3], "unexplained");
    assert!(unexplained[4].is_empty());
    assert!(unexplained[5].is_empty());
}

#[test]
fn writes_a_tab_delimited_report_with_header() {
    let fixture = fixture();
    let indexes = vec![build_index(Edition::Rahlfs, &fixture.words, &fixture.verses).unwrap()];
    let scanned = scan(&fixture.source).unwrap();
    let missing = detect_missing(&scanned, &indexes);
    let overrides = load_overrides(None, None).unwrap();
    let rows = classify_missing(&missing, &indexes, &overrides, LocatorOptions::default());

    let report = fixture.source.with_extension("report.tsv");
    write_report(&report, &rows).unwrap();

    let text = std::fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "line\tverse\tword\tclassification\tmatched\tsimilarity\tlocality\tedition\tis_name\tis_number"
    );
    assert!(lines[1].starts_with("3\tGen.1.2\tσυλλήψεται\tlegitimate-variation"));
    assert!(lines[3].contains("\tunexplained\t"));
}

#[test]
fn fuzzy_stages_can_be_disabled() {
    let fixture = fixture();
    let indexes = vec![build_index(Edition::Rahlfs, &fixture.words, &fixture.verses).unwrap()];
    let scanned = scan(&fixture.source).unwrap();
    let missing = detect_missing(&scanned, &indexes);
    let overrides = load_overrides(None, None).unwrap();
    let options = LocatorOptions {
        fuzzy: false,
        ..LocatorOptions::default()
    };
    let rows = classify_missing(&missing, &indexes, &overrides, options);

    // The dropped-letter word has no rule-generated variant, so without
    // the fuzzy stages it stays unexplained.
    assert_eq!(rows[1].outcome.classification, Classification::Unexplained);
    // Variation matching still runs.
    assert_eq!(
        rows[0].outcome.classification,
        Classification::LegitimateVariation
    );
}

#[test]
fn overrides_preempt_the_search() {
    let fixture = fixture();
    let dir = tempfile::tempdir().unwrap();
    let accepted = write_file(&dir, "accepted_words.txt", "συλλήψεται\n");
    let corrections = write_file(&dir, "word_corrections.tsv", "Gen.1.2\tἑπτκόσια\tἑπτακόσια\n");

    let indexes = vec![build_index(Edition::Rahlfs, &fixture.words, &fixture.verses).unwrap()];
    let scanned = scan(&fixture.source).unwrap();
    let missing = detect_missing(&scanned, &indexes);
    let overrides = load_overrides(Some(&accepted), Some(&corrections)).unwrap();
    let rows = classify_missing(&missing, &indexes, &overrides, LocatorOptions::default());

    assert_eq!(
        rows[0].outcome.classification,
        Classification::AcceptedVariation
    );
    assert_eq!(rows[1].outcome.classification, Classification::Resolved);
    assert_eq!(rows[1].outcome.correction.as_deref(), Some("ἑπτακόσια"));
}
