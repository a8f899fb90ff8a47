//! Fixture databases shaped like the ingestion pipeline's output.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tempfile::TempDir;

use form_validation::codec;

const SCHEMA: &str = "
    CREATE TABLE archives (
        id INTEGER PRIMARY KEY,
        record_url TEXT NOT NULL,
        nr_forms INTEGER NOT NULL,
        nr_urls INTEGER NOT NULL
    );
    CREATE TABLE urls (
        id INTEGER PRIMARY KEY,
        from_archive_id INTEGER NOT NULL REFERENCES archives(id),
        url TEXT NOT NULL
    );
    CREATE TABLE forms (
        id INTEGER PRIMARY KEY,
        from_url INTEGER NOT NULL REFERENCES urls(id),
        form BLOB NOT NULL
    );
";

pub struct Fixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    /// An empty database with the dataset schema.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form_validation.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn conn(&self) -> Connection {
        let conn = Connection::open(&self.path).unwrap();
        // The bundled SQLite enforces foreign keys by default; the fixtures
        // deliberately insert dangling references.
        conn.pragma_update(None, "foreign_keys", false).unwrap();
        conn
    }

    pub fn add_archive(&self, id: i64, record_url: &str, nr_forms: i64, nr_urls: i64) {
        self.conn()
            .execute(
                "INSERT INTO archives (id, record_url, nr_forms, nr_urls) VALUES (?, ?, ?, ?)",
                params![id, record_url, nr_forms, nr_urls],
            )
            .unwrap();
    }

    pub fn add_url(&self, id: i64, from_archive_id: i64) {
        self.conn()
            .execute(
                "INSERT INTO urls (id, from_archive_id, url) VALUES (?, ?, ?)",
                params![id, from_archive_id, format!("https://example.org/{}", id)],
            )
            .unwrap();
    }

    pub fn add_form(&self, id: i64, from_url: i64, html: &str) {
        self.add_raw_form(id, from_url, &codec::compress(html).unwrap());
    }

    pub fn add_raw_form(&self, id: i64, from_url: i64, blob: &[u8]) {
        self.conn()
            .execute(
                "INSERT INTO forms (id, from_url, form) VALUES (?, ?, ?)",
                params![id, from_url, blob],
            )
            .unwrap();
    }
}

pub const LOGIN_FORM: &str = "<form action=\"/login\">\r\n  <input name=\"user\" pattern=\"[a-z]+\">\r\n  <input type=\"password\">\r\n</form>";
pub const ZIP_FORM: &str = "<form>\n<input ng-pattern=\"/^\\d{4}$/\">\n<input pattern=\"[a-z]+\">\n</form>";
pub const EMPTY_PATTERN_FORM: &str = "<form><input data-val-regex-pattern=\"\" ng-pattern=\"foo\"></form>";
pub const PLAIN_FORM: &str = "<form><input name=\"q\"></form>";

/// Two distinct WARCs (one ingested twice), six URLs, ten forms; four of
/// the stored forms hang off a complete forms -> urls -> archives chain.
pub fn sample_dataset() -> Fixture {
    let fixture = Fixture::empty();
    fixture.add_archive(1, "crawl/warc-a.warc.gz", 5, 3);
    fixture.add_archive(2, "crawl/warc-b.warc.gz", 3, 2);
    fixture.add_archive(3, "crawl/warc-a.warc.gz", 2, 1);

    fixture.add_url(1, 1);
    fixture.add_url(2, 2);
    // Points at an archive that was never written.
    fixture.add_url(3, 99);

    fixture.add_form(1, 1, LOGIN_FORM);
    fixture.add_form(2, 1, ZIP_FORM);
    fixture.add_form(3, 2, EMPTY_PATTERN_FORM);
    fixture.add_form(4, 2, PLAIN_FORM);
    fixture.add_form(5, 3, "<form><input pattern=\"orphan\"></form>");
    fixture.add_form(6, 42, "<form><input pattern=\"[a-z]+\"></form>");
    fixture
}
