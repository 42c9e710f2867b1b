use serde::Serialize;

use jsonlcheck_schema::SchemaValidator;

use crate::cmd::SchemaArgs;
use crate::exit::{schema_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Debug, Serialize)]
struct SchemaCheckOutput {
    schema_id: &'static str,
    schema: String,
    strict: bool,
    overall: &'static str,
}

pub fn run(args: SchemaArgs, format: OutputFormat) -> CliResult<i32> {
    SchemaValidator::from_path(&args.schema, &args.config()).map_err(schema_error)?;

    let output = SchemaCheckOutput {
        schema_id: "https://schemas.3leaps.dev/jsonlcheck/cli/v1/schema-check.schema.json",
        schema: args.schema.display().to_string(),
        strict: args.strict,
        overall: "pass",
    };

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Text | OutputFormat::Table => {
            let mode = if output.strict { " (strict)" } else { "" };
            println!("schema ok: {}{mode}", output.schema);
        }
    }

    Ok(SUCCESS)
}
