//! extract-patterns - validation patterns from HTML forms read on stdin.
//!
//! Reads one form per line (as produced by `analyse-data with-validation`) and
//! prints the value of every `pattern`, `data-val-regex-pattern` or
//! `ng-pattern` attribute found on an `input` element.

use std::process::ExitCode;

use form_validation::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<ExitCode> {
    let default_filter = if cli::is_verbose() {
        "form_validation=info"
    } else {
        "form_validation=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::run_extract()
}
