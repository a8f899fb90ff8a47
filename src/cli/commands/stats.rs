//! `stats` command.

use std::io::Write;

use rusqlite::Connection;

use super::OutputFormat;
use crate::report::{write_stats, write_stats_json};
use crate::repository::StatsRepository;
use crate::Result;

/// Print aggregate statistics about WARCs, forms and URLs.
pub fn cmd_stats<W: Write>(conn: &Connection, format: OutputFormat, out: &mut W) -> Result<()> {
    let stats = StatsRepository::new(conn).form_stats()?;
    match format {
        OutputFormat::Text => write_stats(out, &stats),
        OutputFormat::Json => write_stats_json(out, &stats),
    }
}
