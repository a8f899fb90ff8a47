//! Streaming access to stored form HTML.

use rusqlite::Connection;
use tracing::trace;

use crate::codec;
use crate::models::StoredForm;
use crate::{Error, Result};

pub struct FormRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> FormRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Visit every form, one row at a time, in the storage engine's native order.
    ///
    /// The first form that fails to decompress or decode aborts the walk, as does
    /// the first error returned by `visit`. Returns the number of forms visited.
    pub fn for_each_form<F>(&self, mut visit: F) -> Result<u64>
    where
        F: FnMut(StoredForm) -> Result<()>,
    {
        let mut stmt = self.conn.prepare("SELECT id, form FROM forms")?;
        let mut rows = stmt.query([])?;

        let mut visited = 0;
        while let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let blob: Vec<u8> = row.get(1)?;
            visit(decode_form(id, &blob)?)?;
            visited += 1;
        }
        Ok(visited)
    }
}

/// Decompress and strictly UTF-8 decode one stored form.
pub fn decode_form(id: i64, blob: &[u8]) -> Result<StoredForm> {
    trace!("Decoding form {} ({} bytes)", id, blob.len());
    let bytes = codec::decompress(blob).map_err(|source| Error::Decompress {
        form_id: id,
        source,
    })?;
    let html = String::from_utf8(bytes).map_err(|source| Error::Decode {
        form_id: id,
        source,
    })?;
    Ok(StoredForm { id, html })
}
