use std::path::PathBuf;

use lxx_cli::pipeline::ReportRow;

#[derive(Debug)]
pub struct CheckResult {
    pub source: PathBuf,
    /// Absent for dry runs.
    pub report_path: Option<PathBuf>,
    pub rows: Vec<ReportRow>,
    pub scanned_tokens: usize,
    pub unlocated_tokens: usize,
    pub has_unexplained: bool,
}
