//! Human-readable rendering of dataset statistics.

use std::io::Write;

use crate::models::FormStats;
use crate::Result;

/// Default number of significant digits for general number formatting.
pub const DEFAULT_PRECISION: usize = 6;

/// Format a float with `precision` significant digits in "general" notation.
///
/// Fixed notation is used while the decimal exponent is in `-4..precision`,
/// scientific notation (`1.2e+02`) otherwise. Trailing zeros and a dangling
/// decimal point are removed. No digit grouping is applied.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    // Rounding to the requested digits first settles the exponent (9.99 -> 1.0e1).
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Write the three-line statistics report.
pub fn write_stats<W: Write>(out: &mut W, stats: &FormStats) -> Result<()> {
    let forms_per_record = stats.forms_per_record()?;
    let interesting_percent = stats.interesting_percent()?;
    let forms_per_url = stats.forms_per_url()?;

    writeln!(
        out,
        "Saw {} WARCs with {} forms: {} forms/WARC.",
        stats.nr_records,
        stats.nr_forms,
        format_general(forms_per_record, DEFAULT_PRECISION)
    )?;
    writeln!(
        out,
        "{} forms with validation ({} %).",
        stats.nr_interesting,
        format_general(interesting_percent, 2)
    )?;
    writeln!(
        out,
        "Saw {} urls: {} form(s)/URL.",
        stats.nr_urls,
        format_general(forms_per_url, 2)
    )?;
    Ok(())
}

/// Write the statistics and derived ratios as one JSON object.
pub fn write_stats_json<W: Write>(out: &mut W, stats: &FormStats) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &stats.summary()?)?;
    writeln!(out)?;
    Ok(())
}
