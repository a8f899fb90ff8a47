//! Read-only access to the form validation dataset.
//!
//! The schema is produced by the external ingestion pipeline:
//! - `archives(id, record_url, nr_forms, nr_urls, ...)`
//! - `urls(id, from_archive_id, ...)`
//! - `forms(id, from_url, form BLOB, ...)`

mod forms;
mod stats;

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::Result;

pub use forms::FormRepository;
pub use stats::StatsRepository;

/// Open a SQLite database that forbids writes.
///
/// Fails if the file does not exist; read-only mode never creates it.
pub fn connect_read_only(path: &Path) -> Result<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}
