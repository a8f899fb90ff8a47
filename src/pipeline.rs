//! Pattern extraction pipeline: HTML lines in, pattern values out.
//!
//! One [`PatternExtractor`] feeds a [`PatternSink`]. [`RawSink`] writes every
//! pattern as it is found; [`TallySink`] counts them and writes a frequency
//! table when the input is exhausted.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::patterns::PatternExtractor;
use crate::Result;

/// Receives extracted patterns.
pub trait PatternSink {
    fn accept(&mut self, pattern: String) -> Result<()>;

    /// Called once after the last pattern.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes each pattern on its own line, in input order.
pub struct RawSink<W: Write> {
    out: W,
}

impl<W: Write> RawSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PatternSink for RawSink<W> {
    fn accept(&mut self, pattern: String) -> Result<()> {
        writeln!(self.out, "{}", pattern)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Counts occurrences per distinct pattern.
///
/// On finish, writes `pattern\tcount` lines by descending count. Equal counts
/// keep the order in which the patterns were first seen.
pub struct TallySink<W: Write> {
    out: W,
    index: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl<W: Write> TallySink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            index: HashMap::new(),
            counts: Vec::new(),
        }
    }

    /// Current counts, most frequent first.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(pattern, count)| (pattern.as_str(), *count))
            .collect();
        // Stable sort keeps first-seen order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PatternSink for TallySink<W> {
    fn accept(&mut self, pattern: String) -> Result<()> {
        match self.index.get(&pattern) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(pattern.clone(), self.counts.len());
                self.counts.push((pattern, 1));
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        debug!("{} distinct patterns", self.counts.len());
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        for (pattern, count) in &self.counts {
            writeln!(self.out, "{}\t{}", pattern, count)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Totals for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub lines: u64,
    pub patterns: u64,
}

/// Extracts patterns from documents and forwards them to a sink.
pub struct Pipeline<S: PatternSink> {
    extractor: PatternExtractor,
    sink: S,
    stats: PipelineStats,
}

impl<S: PatternSink> Pipeline<S> {
    pub fn new(sink: S) -> Self {
        Self {
            extractor: PatternExtractor::new(),
            sink,
            stats: PipelineStats::default(),
        }
    }

    /// Process one HTML document (one form).
    pub fn feed(&mut self, html: &str) -> Result<()> {
        self.stats.lines += 1;
        for pattern in self.extractor.extract(html) {
            self.stats.patterns += 1;
            self.sink.accept(pattern)?;
        }
        Ok(())
    }

    /// Process every line of `input`, one form per line.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily rather than rejected.
    pub fn feed_lines<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                warn!("Line {} is not valid UTF-8, decoding lossily", self.stats.lines + 1);
            }
            self.feed(&line)?;
        }
        Ok(())
    }

    /// Flush the sink and return run totals along with it.
    pub fn finish(mut self) -> Result<(PipelineStats, S)> {
        self.sink.finish()?;
        debug!(
            "Processed {} lines, {} patterns",
            self.stats.lines, self.stats.patterns
        );
        Ok((self.stats, self.sink))
    }
}
