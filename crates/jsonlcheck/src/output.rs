use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use jsonlcheck_scan::{write_text_report, ScanReport, ALL_GOOD};
use serde::Serialize;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-numbered diagnostics followed by "All good" on success.
    #[default]
    Text,
    /// One JSON document describing the whole run.
    Json,
    /// Violations as a table.
    Table,
}

#[derive(Serialize)]
struct ViolationOutput {
    path: String,
    message: String,
}

#[derive(Serialize)]
struct LineOutput {
    line: usize,
    malformed: bool,
    errors: Vec<ViolationOutput>,
}

#[derive(Serialize)]
struct ReportOutput {
    schema_id: &'static str,
    file: String,
    schema: String,
    lines_read: usize,
    records_checked: usize,
    blank_lines: usize,
    malformed_lines: usize,
    invalid_lines: usize,
    results: Vec<LineOutput>,
    overall: &'static str,
}

impl ReportOutput {
    fn new(report: &ScanReport, file: &Path, schema: &Path) -> Self {
        let results = report
            .invalid
            .iter()
            .map(|entry| LineOutput {
                line: entry.line,
                malformed: entry.malformed,
                errors: entry
                    .violations
                    .iter()
                    .map(|v| ViolationOutput {
                        path: v.path.to_string(),
                        message: v.message.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            schema_id: "https://schemas.3leaps.dev/jsonlcheck/cli/v1/validate-report.schema.json",
            file: file.display().to_string(),
            schema: schema.display().to_string(),
            lines_read: report.lines_read,
            records_checked: report.records_checked,
            blank_lines: report.blank_lines,
            malformed_lines: report.malformed_lines,
            invalid_lines: report.invalid.len(),
            results,
            overall: if report.passed() { "pass" } else { "fail" },
        }
    }
}

/// Write `report` to `out` in the requested format.
pub fn write_report<W: Write>(
    report: &ScanReport,
    file: &Path,
    schema: &Path,
    format: OutputFormat,
    mut out: W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text_report(report, out),
        OutputFormat::Json => {
            let doc = ReportOutput::new(report, file, schema);
            serde_json::to_writer(&mut out, &doc)?;
            writeln!(out)?;
            out.flush()
        }
        OutputFormat::Table => {
            if report.passed() {
                writeln!(out, "{ALL_GOOD}")?;
            } else {
                writeln!(out, "{}", violation_table(report))?;
            }
            out.flush()
        }
    }
}

fn violation_table(report: &ScanReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["LINE", "PATH", "MESSAGE"]);

    for entry in &report.invalid {
        for violation in &entry.violations {
            table.add_row(vec![
                entry.line.to_string(),
                violation.path.to_string(),
                violation.message.clone(),
            ]);
        }
    }
    table
}
