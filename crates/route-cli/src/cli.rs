//! CLI argument definitions for routectl.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "routectl",
    version,
    about = "Operational tooling for the hosted route database",
    long_about = "Audit and inspect recommended-route rows in the hosted route database.\n\n\
                  The audit classifies data defects by severity (critical, warning, info)\n\
                  and derives a safe-to-delete set with idempotent remediation SQL."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch every route and run the data-quality audit.
    Audit(AuditArgs),

    /// List the stored routes in a table.
    List,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Also write the structured report to this path as JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Exit non-zero when any route carries a critical issue.
    ///
    /// By default defects are data, not failures: the report always prints
    /// and the process exits 0 unless configuration or the fetch itself
    /// fails.
    #[arg(long = "fail-on-critical")]
    pub fail_on_critical: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn audit_flags_parse() {
        let cli = Cli::try_parse_from([
            "routectl",
            "audit",
            "--json",
            "out/report.json",
            "--fail-on-critical",
        ])
        .expect("parse audit");
        match cli.command {
            Command::Audit(args) => {
                assert_eq!(
                    args.json.as_deref(),
                    Some(std::path::Path::new("out/report.json"))
                );
                assert!(args.fail_on_critical);
            }
            Command::List => panic!("expected audit command"),
        }
    }

    #[test]
    fn list_parses_without_flags() {
        let cli = Cli::try_parse_from(["routectl", "list"]).expect("parse list");
        assert!(matches!(cli.command, Command::List));
    }
}
