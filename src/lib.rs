//! form-validation - analysis tools for a dataset of web forms.
//!
//! Reads the SQLite database produced by the form ingestion pipeline and
//! extracts client-side validation patterns from HTML form fragments.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod patterns;
pub mod pipeline;
pub mod report;
pub mod repository;

pub use error::{Error, Result};
