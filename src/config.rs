//! Runtime settings for the form-validation tools.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::info;

use crate::repository;
use crate::Result;

/// Database file used when no path is given on the command line or in the environment.
pub const DEFAULT_DATABASE_FILE: &str = "form_validation.db";

/// Environment variable that overrides the database path.
pub const DATABASE_ENV_VAR: &str = "FORM_VALIDATION_DB";

/// Resolved settings for a run of the stats/dump tool.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_FILE),
        }
    }
}

impl Settings {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
        }
    }

    pub fn database_path(&self) -> &Path {
        &self.database
    }

    /// Open the dataset read-only. Writes through this connection are rejected by SQLite.
    pub fn open_database(&self) -> Result<Connection> {
        info!("Opening {} read-only", self.database.display());
        repository::connect_read_only(&self.database)
    }
}
