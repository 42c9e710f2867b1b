mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "jsonlcheck", version, about = "JSON-Lines schema validator")]
struct Cli {
    /// Report format (stdout).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    format: OutputFormat,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "JSONLCHECK_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    match cmd::run(cli.command, cli.format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(code = err.code, "fatal error");
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn parses_validate_with_default_schema() {
        let cli = Cli::try_parse_from(["jsonlcheck", "validate", "data.jsonl"])
            .expect("validate args should parse");

        let Command::Validate(args) = cli.command else {
            panic!("expected validate subcommand");
        };
        assert_eq!(args.file, Path::new("data.jsonl"));
        assert!(!args.schema.strict);
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn parses_schema_override_and_strict() {
        let cli = Cli::try_parse_from([
            "jsonlcheck",
            "--format",
            "json",
            "validate",
            "data.jsonl",
            "--schema",
            "other.json",
            "--strict",
        ])
        .expect("validate args should parse");

        let Command::Validate(args) = cli.command else {
            panic!("expected validate subcommand");
        };
        assert_eq!(args.schema.schema, Path::new("other.json"));
        assert!(args.schema.config().strict_mode);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn validate_requires_a_file() {
        let err = Cli::try_parse_from(["jsonlcheck", "validate"])
            .expect_err("missing file should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_schema_subcommand() {
        let cli = Cli::try_parse_from(["jsonlcheck", "schema", "-s", "s.json"])
            .expect("schema args should parse");
        assert!(matches!(cli.command, Command::Schema(_)));
    }
}
