//! Top-level CLI definition and dispatch.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use colored::{Colorize, control};
use serde_json::{Value, json};
use thiserror::Error;

use clar_compare::compare::compare_files;
use clar_compare::compare::report::{
    MISSING_INPUT_MESSAGE, PercentStyle, format_report_with, report_json,
};
use clar_compare::compare::summary::SummaryReport;
use clar_compare::core::config::Config;
use clar_compare::core::errors::CompareError;
use clar_compare::core::paths::{ReportContext, ScorePaths, resolve_absolute_path};
use clar_compare::logger::jsonl::{EventType, JsonlConfig, JsonlWriter, LogEntry, Severity};

/// Compare computed anionic Clar numbers against known optimal solutions.
#[derive(Debug, Parser)]
#[command(
    name = "clar-compare",
    author,
    version,
    about = "Summarize computed vs. known anionic Clar numbers",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Fullerene vertex count.
    #[arg(value_name = "N")]
    n: u32,
    /// Anion charge parameter.
    #[arg(value_name = "P")]
    p: u32,
    /// Override config file path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Read known-optimal scores from this file instead of the derived path.
    #[arg(long, value_name = "PATH")]
    known: Option<PathBuf>,
    /// Read computed scores from this file instead of the derived path.
    #[arg(long, value_name = "PATH")]
    computed: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long)]
    json: bool,
    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
    /// Print resolved paths and unclassified-row notes to stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
    /// Quiet mode (errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
    /// Exit non-zero when an input file is missing.
    #[arg(long)]
    strict: bool,
    /// Print percentages with a fixed number of decimals.
    #[arg(long, value_name = "K")]
    decimals: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

/// CLI error type with explicit exit-code mapping.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input or config, or missing inputs under `--strict`.
    #[error("{0}")]
    User(String),
    /// Configuration, data or filesystem failure.
    #[error("{0}")]
    Runtime(String),
    /// Internal bug or invariant violation.
    #[error("{0}")]
    Internal(String),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Runtime(_) | Self::Io(_) => 2,
            Self::Internal(_) | Self::Json(_) => 3,
        }
    }
}

impl From<CompareError> for CliError {
    fn from(err: CompareError) -> Self {
        match err {
            CompareError::InvalidConfig { .. } => Self::User(err.to_string()),
            CompareError::Serialization { .. } => Self::Internal(err.to_string()),
            other => Self::Runtime(other.to_string()),
        }
    }
}

/// Load config, compare the two score files for `(n, p)`, print the summary.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }

    let ctx = ReportContext::new(cli.n, cli.p);
    let mode = output_mode(cli);
    let notes = cli.verbose && !cli.quiet;

    let mut config =
        Config::load(cli.config.as_deref()).map_err(|e| fail(mode, ctx, e))?;
    if let Some(decimals) = cli.decimals {
        config.report.percent_decimals = Some(decimals);
    }
    config.report.strict_exit |= cli.strict;
    config.validate().map_err(|e| fail(mode, ctx, e))?;

    let paths = ScorePaths::derive(ctx, &config.layout)
        .with_overrides(cli.known.as_deref(), cli.computed.as_deref());

    let mut log = if config.logging.enabled {
        JsonlWriter::open(JsonlConfig::from(&config.logging))
    } else {
        JsonlWriter::disabled()
    };
    let mut start = LogEntry::new(EventType::RunStart, Severity::Info).with_run(ctx, &paths);
    start.config_hash = config.stable_hash().ok();
    log.write_entry(&start);

    if notes {
        eprintln!("known:    {}", resolve_absolute_path(&paths.known).display());
        eprintln!("computed: {}", resolve_absolute_path(&paths.computed).display());
    }

    let started = Instant::now();
    let outcome = compare_files(&paths);
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match outcome {
        Ok(report) => {
            let mut entry = LogEntry::new(EventType::CompareComplete, Severity::Info)
                .with_run(ctx, &paths)
                .with_summary(&report);
            entry.duration_ms = Some(duration_ms);
            log.write_entry(&entry);
            log.flush();

            let style = PercentStyle::from_decimals(config.report.percent_decimals);
            emit_report(mode, &report, ctx, style)?;
            if notes {
                print_unclassified_note(&report);
            }
            Ok(())
        }
        Err(err) if err.is_missing_input() => {
            let entry = LogEntry::new(EventType::InputMissing, Severity::Warning)
                .with_run(ctx, &paths)
                .with_error(&err);
            log.write_entry(&entry);
            log.flush();

            emit_missing_input(mode, ctx, &err)?;
            if notes {
                eprintln!("{} {err}", "detail:".yellow());
            }
            if config.report.strict_exit {
                return Err(CliError::User(err.to_string()));
            }
            Ok(())
        }
        Err(err) => {
            let entry = LogEntry::new(EventType::Error, Severity::Critical)
                .with_run(ctx, &paths)
                .with_error(&err);
            log.write_entry(&entry);
            log.flush();
            Err(fail(mode, ctx, err))
        }
    }
}

fn emit_report(
    mode: OutputMode,
    report: &SummaryReport,
    ctx: ReportContext,
    style: PercentStyle,
) -> Result<(), CliError> {
    match mode {
        OutputMode::Human => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(format_report_with(report, ctx, style).as_bytes())?;
            stdout.flush()?;
        }
        OutputMode::Json => write_json_line(&report_json(report, ctx))?,
    }
    Ok(())
}

fn emit_missing_input(
    mode: OutputMode,
    ctx: ReportContext,
    err: &CompareError,
) -> Result<(), CliError> {
    match mode {
        OutputMode::Human => println!("{MISSING_INPUT_MESSAGE}"),
        OutputMode::Json => {
            let path = match err {
                CompareError::InputNotFound { path } => Some(path.to_string_lossy().into_owned()),
                _ => None,
            };
            let payload = json!({
                "command": "compare",
                "status": "input_missing",
                "n": ctx.n,
                "p": ctx.p,
                "message": MISSING_INPUT_MESSAGE,
                "path": path,
                "error_code": err.code(),
            });
            write_json_line(&payload)?;
        }
    }
    Ok(())
}

/// Convert a fatal error for the exit path, first reporting it on stdout in
/// JSON mode so every outcome reaches JSON consumers.
fn fail(mode: OutputMode, ctx: ReportContext, err: CompareError) -> CliError {
    if mode == OutputMode::Json
        && let Err(write_err) = write_json_line(&error_payload(ctx, &err))
    {
        return write_err;
    }
    err.into()
}

fn error_payload(ctx: ReportContext, err: &CompareError) -> Value {
    json!({
        "command": "compare",
        "status": "error",
        "n": ctx.n,
        "p": ctx.p,
        "error_code": err.code(),
        "error": err.to_string(),
    })
}

fn print_unclassified_note(report: &SummaryReport) {
    if let Some(row) = report.first_unclassified_row {
        eprintln!(
            "{} {} of {} rows have computed > known and appear in no category (first at row {row})",
            "note:".yellow(),
            report.unclassified_count,
            report.total,
        );
    }
}

fn write_json_line(payload: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, payload)?;
    writeln!(stdout)?;
    Ok(())
}

fn output_mode(cli: &Cli) -> OutputMode {
    let env_mode = std::env::var("CLAR_OUTPUT_FORMAT").ok();
    resolve_output_mode(cli.json, env_mode.as_deref())
}

fn resolve_output_mode(json_flag: bool, env_mode: Option<&str>) -> OutputMode {
    if json_flag {
        return OutputMode::Json;
    }

    match env_mode
        .map(str::trim)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => OutputMode::Json,
        _ => OutputMode::Human,
    }
}
