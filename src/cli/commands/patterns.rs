//! `patterns` command: dump and extract in one pass.

use std::io::Write;

use rusqlite::Connection;
use tracing::info;

use crate::pipeline::{PatternSink, Pipeline, RawSink, TallySink};
use crate::repository::FormRepository;
use crate::Result;

/// Extract validation patterns from every stored form.
///
/// With `count`, prints a frequency table instead of one pattern per line.
pub fn cmd_patterns<W: Write>(conn: &Connection, count: bool, out: &mut W) -> Result<()> {
    if count {
        extract_from_forms(conn, TallySink::new(out))
    } else {
        extract_from_forms(conn, RawSink::new(out))
    }
}

fn extract_from_forms<S: PatternSink>(conn: &Connection, sink: S) -> Result<()> {
    let mut pipeline = Pipeline::new(sink);
    FormRepository::new(conn).for_each_form(|form| pipeline.feed(&form.html))?;
    let (stats, _) = pipeline.finish()?;
    info!(
        "Found {} patterns in {} forms",
        stats.patterns, stats.lines
    );
    Ok(())
}
