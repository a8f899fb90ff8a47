//! Aggregate statistics over archives, URLs and forms.

use rusqlite::Connection;
use tracing::debug;

use crate::models::FormStats;
use crate::Result;

pub struct StatsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> StatsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Distinct record URLs and total forms across all archives.
    ///
    /// `SUM` over an empty table is NULL, which is reported as zero.
    pub fn count_records_and_forms(&self) -> Result<(i64, i64)> {
        let (records, forms): (i64, Option<i64>) = self.conn.query_row(
            "SELECT COUNT(DISTINCT record_url), SUM(nr_forms) FROM archives",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok((records, forms.unwrap_or(0)))
    }

    /// Forms reachable through their owning URL to an owning archive.
    pub fn count_interesting_forms(&self) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(forms.id) FROM forms
             JOIN urls ON urls.id = forms.from_url
             JOIN archives ON urls.from_archive_id = archives.id",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Total URLs seen across all archives.
    pub fn count_urls(&self) -> Result<i64> {
        let count: Option<i64> =
            self.conn
                .query_row("SELECT SUM(nr_urls) FROM archives", [], |row| row.get(0))?;
        Ok(count.unwrap_or(0))
    }

    /// Run all aggregate queries.
    pub fn form_stats(&self) -> Result<FormStats> {
        let (nr_records, nr_forms) = self.count_records_and_forms()?;
        let nr_interesting = self.count_interesting_forms()?;
        let nr_urls = self.count_urls()?;

        let stats = FormStats {
            nr_records,
            nr_forms,
            nr_interesting,
            nr_urls,
        };
        debug!(?stats, "Computed form statistics");
        Ok(stats)
    }
}
