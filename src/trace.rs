//! Search trace: the append-only step log of a run.
//!
//! Each algorithmic step that examines an element appends one
//! `TraceRecord`. The trace is reset at the start of every search and kept
//! on the session until the next search or reset, so frontends can show
//! the full iteration history after a run completes.
//!
//! Traces export as JSON Lines (one record per line) for offline
//! inspection.

use std::fmt;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// One logged algorithmic step: which index was examined, when, and what
/// value it held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// 1-based iteration number within the run.
    pub iteration: u64,
    /// Index examined.
    pub index: usize,
    /// Value at that index.
    pub value: f64,
}

impl TraceRecord {
    /// Create a new trace record.
    #[must_use]
    pub const fn new(iteration: u64, index: usize, value: f64) -> Self {
        Self {
            iteration,
            index,
            value,
        }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Iteration {}: checking index {}, value {}",
            self.iteration, self.index, self.value
        )
    }
}

/// Append-only sequence of trace records for one search run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchTrace {
    records: Vec<TraceRecord>,
}

impl SearchTrace {
    /// Create an empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record.
    pub fn push(&mut self, iteration: u64, index: usize, value: f64) {
        self.records.push(TraceRecord::new(iteration, index, value));
    }

    /// All records, in append order.
    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no record has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Last record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.last()
    }

    /// Discard all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Write the trace as JSON Lines to a writer.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the underlying write fails.
    pub fn write_jsonl<W: Write>(&self, writer: &mut W) -> VizResult<()> {
        for record in &self.records {
            let line = serde_json::to_string(record)
                .map_err(|e| VizError::serialization(e.to_string()))?;
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    /// Export the trace as a JSON Lines file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or written.
    pub fn export_jsonl<P: AsRef<Path>>(&self, path: P) -> VizResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_jsonl(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SearchTrace {
    type Item = &'a TraceRecord;
    type IntoIter = std::slice::Iter<'a, TraceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
