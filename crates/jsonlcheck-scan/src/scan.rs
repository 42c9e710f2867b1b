use std::io::BufRead;
use std::path::Path;

use jsonlcheck_schema::{sort_violations, RecordValidator, Violation};
use serde_json::Value;

use crate::error::Result;
use crate::reader::{JsonLines, Line};

/// Message prefix for lines that are not valid JSON.
pub const MALFORMED_PREFIX: &str = "invalid JSON";

/// Violations found on one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// 1-based line number in the input.
    pub line: usize,
    /// Sorted by path.
    pub violations: Vec<Violation>,
    /// True when the line did not parse as JSON.
    pub malformed: bool,
}

/// Outcome of one pass over a JSON-Lines input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub lines_read: usize,
    pub blank_lines: usize,
    pub records_checked: usize,
    pub malformed_lines: usize,
    /// Only lines with at least one violation, in input order.
    pub invalid: Vec<LineReport>,
}

impl ScanReport {
    /// True when no line produced a violation.
    pub fn passed(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn violation_count(&self) -> usize {
        self.invalid.iter().map(|r| r.violations.len()).sum()
    }

    fn record(&mut self, line: &Line, validator: &dyn RecordValidator) {
        self.lines_read += 1;
        if line.is_blank() {
            self.blank_lines += 1;
            return;
        }

        let (mut violations, malformed) = match serde_json::from_str::<Value>(&line.content) {
            Ok(record) => {
                self.records_checked += 1;
                (validator.violations(&record), false)
            }
            Err(err) => {
                self.malformed_lines += 1;
                let message = format!("{MALFORMED_PREFIX}: {err}");
                (vec![Violation::at_root(message)], true)
            }
        };

        if violations.is_empty() {
            return;
        }
        sort_violations(&mut violations);

        tracing::debug!(
            line = line.number,
            violations = violations.len(),
            malformed,
            "record invalid"
        );
        self.invalid.push(LineReport {
            line: line.number,
            violations,
            malformed,
        });
    }
}

/// Validate every non-blank line of `lines` against `validator`.
///
/// Blank lines are skipped but still advance the line number. A line that is
/// not valid JSON is reported as a single `<root>` violation and scanning
/// continues. Only read failures abort.
pub fn scan<R: BufRead>(lines: JsonLines<R>, validator: &dyn RecordValidator) -> Result<ScanReport> {
    let mut report = ScanReport::default();
    for line in lines {
        report.record(&line?, validator);
    }

    tracing::info!(
        lines = report.lines_read,
        records = report.records_checked,
        invalid_lines = report.invalid.len(),
        malformed_lines = report.malformed_lines,
        "scan complete"
    );
    Ok(report)
}

/// Open `path` and scan it.
pub fn scan_file(path: &Path, validator: &dyn RecordValidator) -> Result<ScanReport> {
    tracing::debug!(path = %path.display(), "scanning");
    scan(JsonLines::open(path)?, validator)
}
