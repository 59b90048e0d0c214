//! Brenton TeX source scanning.
//!
//! Walks the typeset source line by line, tracking the current book,
//! chapter, and verse from `\biblebook{...}`, `\ch{N}`, and `\vs{N}`
//! markers. A `\lettrine{Α}{β}` opens a book: it implies chapter 1 verse
//! 1 and its two groups spell the decorated first word. Greek tokens are
//! emitted with the verse they fall under; markers mid-line split the
//! line into segments so words before a `\vs` keep the previous verse.

use std::path::Path;
use std::sync::LazyLock;

use lxx_model::{VerseRef, Word};
use regex::Regex;
use tracing::{debug, warn};

use crate::books::canonicalize_primary;
use crate::error::{IngestError, Result};

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\\(?P<cmd>biblebook|ch|vs)\{(?P<arg>[^}]*)\}",
        r"|\\lettrine\{(?P<initial>[^}]*)\}\{(?P<rest>[^}]*)\}",
    ))
    .expect("marker pattern")
});

static COMMAND_WITH_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\*?\{[^}]*\}").expect("command pattern"));

static BARE_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\*?").expect("bare command pattern"));

static GREEK_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{0370}-\x{03FF}\x{1F00}-\x{1FFF}]+").expect("greek token pattern")
});

/// One Greek word as it appears in the source, with its location.
#[derive(Debug, Clone)]
pub struct SourceToken {
    pub word: Word,
    pub verse: VerseRef,
    pub line_number: usize,
    pub source_line: String,
}

/// Everything a scan produced.
#[derive(Debug, Clone)]
pub struct SourceScan {
    pub tokens: Vec<SourceToken>,
    /// Greek tokens seen before a complete book/chapter/verse context
    /// (front matter, running heads). Counted, not classified.
    pub unlocated: usize,
}

#[derive(Default)]
struct ScanState {
    heading: Option<String>,
    chapter: Option<u32>,
    verse: Option<u32>,
}

impl ScanState {
    fn current_verse(&self) -> Option<VerseRef> {
        let heading = self.heading.as_deref()?;
        let chapter = self.chapter?;
        let verse = self.verse?;
        let (book, chapter) = canonicalize_primary(heading, chapter)?;
        Some(VerseRef::new(book, chapter, verse))
    }
}

pub fn scan_source(path: &Path) -> Result<SourceScan> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    scan_text(&text)
}

pub fn scan_text(text: &str) -> Result<SourceScan> {
    let mut state = ScanState::default();
    let mut tokens = Vec::new();
    let mut unlocated = 0usize;

    for (line_index, raw_line) in text.lines().enumerate() {
        let line_number = line_index + 1;
        let line = strip_comment(raw_line);
        if line.trim().is_empty() {
            continue;
        }

        let mut cursor = 0;
        for captures in MARKER.captures_iter(line) {
            let matched = captures.get(0).expect("whole match");
            scan_segment(
                &line[cursor..matched.start()],
                raw_line,
                line_number,
                &state,
                &mut tokens,
                &mut unlocated,
            );
            cursor = matched.end();

            if let (Some(cmd), Some(arg)) = (captures.name("cmd"), captures.name("arg")) {
                apply_marker(cmd.as_str(), arg.as_str(), line_number, &mut state)?;
            } else if let (Some(initial), Some(rest)) =
                (captures.name("initial"), captures.name("rest"))
            {
                // Book opening: the decorated initial spells the first word.
                state.chapter = Some(1);
                state.verse = Some(1);
                let opening = format!("{}{}", initial.as_str(), rest.as_str());
                scan_segment(
                    &opening,
                    raw_line,
                    line_number,
                    &state,
                    &mut tokens,
                    &mut unlocated,
                );
            }
        }
        scan_segment(
            &line[cursor..],
            raw_line,
            line_number,
            &state,
            &mut tokens,
            &mut unlocated,
        );
    }

    if unlocated > 0 {
        warn!(unlocated, "greek tokens outside any verse context");
    }
    debug!(tokens = tokens.len(), "scanned source");
    Ok(SourceScan { tokens, unlocated })
}

fn apply_marker(cmd: &str, arg: &str, line_number: usize, state: &mut ScanState) -> Result<()> {
    match cmd {
        "biblebook" => {
            let heading = arg.trim().to_string();
            if canonicalize_primary(&heading, 1).is_none() {
                return Err(IngestError::UnknownBook {
                    heading,
                    line: line_number,
                });
            }
            state.heading = Some(heading);
            state.chapter = None;
            state.verse = None;
        }
        "ch" => {
            // A chapter opens at its first verse until \vs says otherwise.
            state.chapter = arg.trim().parse().ok();
            state.verse = Some(1);
        }
        "vs" => {
            state.verse = arg.trim().parse().ok();
        }
        _ => {}
    }
    Ok(())
}

fn scan_segment(
    segment: &str,
    raw_line: &str,
    line_number: usize,
    state: &ScanState,
    tokens: &mut Vec<SourceToken>,
    unlocated: &mut usize,
) {
    if segment.is_empty() {
        return;
    }
    let without_args = COMMAND_WITH_ARG.replace_all(segment, " ");
    let plain = BARE_COMMAND.replace_all(&without_args, " ");
    for token in GREEK_TOKEN.find_iter(&plain) {
        match state.current_verse() {
            Some(verse) => tokens.push(SourceToken {
                word: Word::new(token.as_str()),
                verse,
                line_number,
                source_line: raw_line.trim().to_string(),
            }),
            None => *unlocated += 1,
        }
    }
}

/// Drop an unescaped `%` comment tail.
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut previous = 0u8;
    for (position, byte) in bytes.iter().enumerate() {
        if *byte == b'%' && previous != b'\\' {
            return &line[..position];
        }
        previous = *byte;
    }
    line
}
