//! `extract-patterns`: validation patterns from HTML forms on stdin.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::pipeline::{PatternSink, Pipeline, RawSink, TallySink};
use crate::Result;

#[derive(Parser)]
#[command(name = "extract-patterns")]
#[command(about = "Extract input validation patterns from HTML forms, one form per stdin line")]
#[command(version)]
pub struct ExtractCli {
    /// Print each distinct pattern with its count, most frequent first
    #[arg(short, long)]
    count: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn extract_stdin<S: PatternSink>(sink: S) -> Result<()> {
    let stdin = io::stdin();
    let mut pipeline = Pipeline::new(sink);
    pipeline.feed_lines(stdin.lock())?;
    let (stats, _) = pipeline.finish()?;
    info!(
        "Found {} patterns in {} lines",
        stats.patterns, stats.lines
    );
    Ok(())
}

pub fn run_extract() -> anyhow::Result<ExitCode> {
    let cli = ExtractCli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = if cli.count {
        extract_stdin(TallySink::new(&mut out))
    } else {
        extract_stdin(RawSink::new(&mut out))
    }
    .and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_broken_pipe() => Ok(ExitCode::SUCCESS),
        Err(e) => Err(e).context("Pattern extraction failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_count_flag() {
        assert!(ExtractCli::try_parse_from(["extract-patterns", "--count"])
            .unwrap()
            .count);
        assert!(!ExtractCli::try_parse_from(["extract-patterns"]).unwrap().count);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(ExtractCli::try_parse_from(["extract-patterns", "input.html"]).is_err());
    }
}
