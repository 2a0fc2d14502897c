//! Session-scoped progress log.
//!
//! The log grows by one entry per plan generation, in call order. It is never
//! sorted, deduplicated, pruned or read back from disk; `write_csv` only
//! exports the chart data for the current session.

use crate::{ProgressEntry, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Append-only list of progress entries for one session
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProgressLog {
    entries: Vec<ProgressEntry>,
}

/// A row in the CSV output
#[derive(Debug, Serialize)]
struct CsvRow {
    date: String,
    weight_kg: u32,
    bmi: String,
}

impl From<&ProgressEntry> for CsvRow {
    fn from(entry: &ProgressEntry) -> Self {
        CsvRow {
            date: entry.date.to_string(),
            weight_kg: entry.weight_kg,
            bmi: format!("{:.2}", entry.bmi),
        }
    }
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry
    pub fn append(&mut self, date: NaiveDate, weight_kg: u32, bmi: f64) {
        self.entries.push(ProgressEntry {
            date,
            weight_kg,
            bmi,
        });
        tracing::debug!(
            "Appended progress entry #{}: {} {}kg BMI {:.2}",
            self.entries.len(),
            date,
            weight_kg,
            bmi
        );
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&ProgressEntry> {
        self.entries.last()
    }

    /// (date, bmi) points in call order, for charting BMI over time
    pub fn bmi_series(&self) -> Vec<(NaiveDate, f64)> {
        self.entries.iter().map(|e| (e.date, e.bmi)).collect()
    }

    /// Write the log as `date,weight_kg,bmi` CSV rows with a header
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(writer);

        for entry in &self.entries {
            csv_writer.serialize(CsvRow::from(entry))?;
        }
        csv_writer.flush()?;

        tracing::debug!("Wrote {} progress rows as CSV", self.entries.len());
        Ok(self.entries.len())
    }
}

/// Append to a log and hand it back.
///
/// Repeated calls with the same date produce separate entries.
pub fn append_progress(
    mut log: ProgressLog,
    date: NaiveDate,
    weight_kg: u32,
    bmi: f64,
) -> ProgressLog {
    log.append(date, weight_kg, bmi);
    log
}
