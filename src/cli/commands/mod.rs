//! `analyse-data` parser and command dispatch.
//!
//! Usage errors are reported on stdout with exit status 1, before the
//! database is touched.

mod dump;
mod patterns;
mod stats;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use tracing::info;

use crate::config::{Settings, DATABASE_ENV_VAR, DEFAULT_DATABASE_FILE};

use dump::cmd_with_validation;
use patterns::cmd_patterns;
use stats::cmd_stats;

/// What `analyse-data` should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print aggregate statistics
    Stats,
    /// Dump every stored form, one per line
    WithValidation,
    /// Extract validation patterns from every stored form
    Patterns,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Stats, Mode::WithValidation, Mode::Patterns];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Stats => "stats",
            Mode::WithValidation => "with-validation",
            Mode::Patterns => "patterns",
        }
    }

    /// `stats | with-validation | patterns`
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(Mode::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid command {0}")]
pub struct ModeError(String);

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == lowered)
            .ok_or(ModeError(lowered))
    }
}

/// Output format for `stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Three human-readable lines
    #[default]
    Text,
    /// A single JSON object
    Json,
}

#[derive(Parser)]
#[command(name = "analyse-data")]
#[command(about = "Statistics and form dumps from the form validation database")]
#[command(version)]
pub struct Cli {
    /// SQLite database produced by the ingestion pipeline
    #[arg(short, long, env = DATABASE_ENV_VAR, default_value = DEFAULT_DATABASE_FILE)]
    database: PathBuf,

    /// Output format for `stats`
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Count distinct patterns instead of streaming them (`patterns` only)
    #[arg(short, long)]
    count: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// One of: stats | with-validation | patterns (case-insensitive)
    mode: String,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "analyse-data".to_string())
}

fn usage_error(message: &str) -> ExitCode {
    println!("{} {}", style("error:").red().bold(), message);
    println!("Usage {}: {}", program_name(), Mode::choices());
    ExitCode::from(1)
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Ok(usage_error(&e.kind().to_string())),
    };

    let mode = match cli.mode.parse::<Mode>() {
        Ok(mode) => mode,
        Err(e) => return Ok(usage_error(&e.to_string())),
    };

    let settings = Settings::new(cli.database);
    let conn = settings.open_database().with_context(|| {
        format!(
            "Failed to open {} read-only",
            settings.database_path().display()
        )
    })?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    info!("Running {}", mode.as_str());
    let result = match mode {
        Mode::Stats => cmd_stats(&conn, cli.format, &mut out),
        Mode::WithValidation => cmd_with_validation(&conn, &mut out),
        Mode::Patterns => cmd_patterns(&conn, cli.count, &mut out),
    }
    .and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // The reader went away (e.g. `| head`); nothing left to do.
        Err(e) if e.is_broken_pipe() => Ok(ExitCode::SUCCESS),
        Err(e) => Err(e).with_context(|| format!("{} failed", mode.as_str())),
    }
}
