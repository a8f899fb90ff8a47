//! Error types for form-validation.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Form {form_id} is not valid compressed data: {source}")]
    Decompress {
        form_id: i64,
        #[source]
        source: io::Error,
    },

    #[error("Form {form_id} does not decode as UTF-8: {source}")]
    Decode {
        form_id: i64,
        #[source]
        source: FromUtf8Error,
    },

    /// A ratio was requested over an aggregate that came back zero.
    #[error("Cannot compute statistics: {0} is zero (empty dataset?)")]
    EmptyDataset(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the error means stdout was closed by the reader.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
