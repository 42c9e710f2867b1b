use std::io::{self, Write};

use crate::scan::ScanReport;

/// Closing line printed only when every record validated.
pub const ALL_GOOD: &str = "All good";

/// Write the line-numbered diagnostics for `report`.
///
/// ```text
/// [line 3] INVALID:
///   - <root>: "email" is a required property
///   - user/age: -1 is less than the minimum of 0
/// ```
///
/// followed by [`ALL_GOOD`] when the report passed.
pub fn write_text_report<W: Write>(report: &ScanReport, mut out: W) -> io::Result<()> {
    for entry in &report.invalid {
        writeln!(out, "[line {}] INVALID:", entry.line)?;
        for violation in &entry.violations {
            writeln!(out, "  - {}: {}", violation.path, violation.message)?;
        }
    }
    if report.passed() {
        writeln!(out, "{ALL_GOOD}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use jsonlcheck_schema::{InstancePath, PathSegment, Violation};

    use super::*;
    use crate::scan::LineReport;

    fn render(report: &ScanReport) -> String {
        let mut buf = Vec::new();
        write_text_report(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn passing_report_prints_only_confirmation() {
        let report = ScanReport {
            lines_read: 2,
            records_checked: 2,
            ..ScanReport::default()
        };
        assert_eq!(render(&report), "All good\n");
    }

    #[test]
    fn failing_report_lists_violations_without_confirmation() {
        let age = InstancePath::new(vec![
            PathSegment::Key("user".to_string()),
            PathSegment::Key("age".to_string()),
        ]);
        let report = ScanReport {
            lines_read: 3,
            records_checked: 3,
            invalid: vec![LineReport {
                line: 3,
                violations: vec![
                    Violation::at_root("'email' is a required property"),
                    Violation::new(age, "-1 is less than the minimum of 0"),
                ],
                malformed: false,
            }],
            ..ScanReport::default()
        };

        assert_eq!(
            render(&report),
            "[line 3] INVALID:\n  - <root>: 'email' is a required property\n  - user/age: -1 is less than the minimum of 0\n"
        );
    }
}
