//! Domain models for the form dataset.

use serde::Serialize;

use crate::{Error, Result};

/// Raw aggregates over the `archives`, `urls` and `forms` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FormStats {
    /// Distinct `record_url` values across all archives.
    pub nr_records: i64,
    /// Sum of per-archive form counts.
    pub nr_forms: i64,
    /// Forms reachable through the forms -> urls -> archives chain.
    pub nr_interesting: i64,
    /// Sum of per-archive URL counts.
    pub nr_urls: i64,
}

impl FormStats {
    /// Forms per WARC record.
    pub fn forms_per_record(&self) -> Result<f64> {
        ratio(self.nr_forms, self.nr_records, "nr_records")
    }

    /// Share of forms with validation, in percent.
    pub fn interesting_percent(&self) -> Result<f64> {
        Ok(ratio(self.nr_interesting, self.nr_forms, "nr_forms")? * 100.0)
    }

    /// Forms per URL.
    pub fn forms_per_url(&self) -> Result<f64> {
        ratio(self.nr_forms, self.nr_urls, "nr_urls")
    }

    /// Statistics together with their derived ratios, for machine-readable output.
    pub fn summary(&self) -> Result<StatsSummary> {
        Ok(StatsSummary {
            stats: *self,
            forms_per_record: self.forms_per_record()?,
            interesting_percent: self.interesting_percent()?,
            forms_per_url: self.forms_per_url()?,
        })
    }
}

fn ratio(numerator: i64, denominator: i64, name: &'static str) -> Result<f64> {
    if denominator == 0 {
        return Err(Error::EmptyDataset(name));
    }
    Ok(numerator as f64 / denominator as f64)
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    #[serde(flatten)]
    pub stats: FormStats,
    pub forms_per_record: f64,
    pub interesting_percent: f64,
    pub forms_per_url: f64,
}

/// A decompressed, decoded row of the `forms` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredForm {
    pub id: i64,
    pub html: String,
}
