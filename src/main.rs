//! analyse-data - statistics and form dumps from the form validation database.
//!
//! Opens the database read-only and either reports aggregate counts, streams
//! every stored form as a single line of HTML, or extracts validation patterns.

use std::process::ExitCode;

use form_validation::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "form_validation=info"
    } else {
        "form_validation=warn"
    };

    // stdout carries data, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::run()
}
