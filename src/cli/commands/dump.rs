//! `with-validation` command.

use std::io::Write;

use rusqlite::Connection;
use tracing::info;

use crate::codec::strip_line_breaks;
use crate::repository::FormRepository;
use crate::Result;

/// Stream every stored form to `out`, one form per line.
pub fn cmd_with_validation<W: Write>(conn: &Connection, out: &mut W) -> Result<()> {
    let dumped = FormRepository::new(conn).for_each_form(|form| {
        writeln!(out, "{}", strip_line_breaks(&form.html))?;
        Ok(())
    })?;
    info!("Dumped {} forms", dumped);
    Ok(())
}
