use clap::{Args, Subcommand};
use std::path::PathBuf;

use jsonlcheck_schema::SchemaConfig;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod schema;
pub mod validate;
pub mod version;

/// Schema location used when neither `--schema` nor `JSONLCHECK_SCHEMA` is given.
pub const DEFAULT_SCHEMA_PATH: &str = "docs/schema_v1.json";

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate every record of a JSON-Lines file.
    Validate(ValidateArgs),
    /// Load and compile the schema without reading any records.
    Schema(SchemaArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Schema(args) => schema::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// JSON Schema (draft 2020-12) document.
    #[arg(
        long,
        short = 's',
        value_name = "PATH",
        env = "JSONLCHECK_SCHEMA",
        default_value = DEFAULT_SCHEMA_PATH
    )]
    pub schema: PathBuf,
    /// Reject properties not declared by object schemas.
    #[arg(long)]
    pub strict: bool,
    /// Refuse schema files larger than this many bytes.
    #[arg(long, value_name = "BYTES", default_value_t = SchemaConfig::default().max_schema_file_size)]
    pub max_schema_bytes: usize,
}

impl SchemaArgs {
    pub fn config(&self) -> SchemaConfig {
        SchemaConfig {
            strict_mode: self.strict,
            max_schema_file_size: self.max_schema_bytes,
        }
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON-Lines file to validate.
    pub file: PathBuf,
    #[command(flatten)]
    pub schema: SchemaArgs,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
