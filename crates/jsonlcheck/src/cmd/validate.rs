use jsonlcheck_scan::scan_file;
use jsonlcheck_schema::SchemaValidator;

use crate::cmd::ValidateArgs;
use crate::exit::{io_error, scan_error, schema_error, CliResult, FAILURE, SUCCESS};
use crate::output::{write_report, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let schema_path = &args.schema.schema;
    let validator =
        SchemaValidator::from_path(schema_path, &args.schema.config()).map_err(schema_error)?;

    let report = scan_file(&args.file, &validator).map_err(scan_error)?;

    write_report(
        &report,
        &args.file,
        schema_path,
        format,
        std::io::stdout().lock(),
    )
    .map_err(|err| io_error("writing report", err))?;

    if report.passed() {
        Ok(SUCCESS)
    } else {
        tracing::warn!(
            file = %args.file.display(),
            invalid_lines = report.invalid.len(),
            violations = report.violation_count(),
            "validation failed"
        );
        Ok(FAILURE)
    }
}
