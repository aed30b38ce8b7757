//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `transitions.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RunSummaryRow, TransitionRow};

/// Writes the event trace and run summary to two CSV files.
pub struct CsvWriter {
    transitions: Writer<File>,
    summary:     Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut transitions = Writer::from_path(dir.join("transitions.csv"))?;
        transitions.write_record(["time_secs", "person", "from", "to"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(["passengers", "events", "total_secs"])?;

        Ok(Self {
            transitions,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()> {
        self.transitions.write_record(&[
            row.time_secs.to_string(),
            row.person.to_string(),
            row.from.to_string(),
            row.to.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.passengers.to_string(),
            row.events.to_string(),
            row.total_secs.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.transitions.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
