//! `TraceOutputObserver<W>` — bridges `BoardingObserver` to an `OutputWriter`.

use boarding_core::SimTime;
use boarding_sim::{BoardingObserver, TransitionRecord};

use crate::row::{RunSummaryRow, TransitionRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`BoardingObserver`] that streams the event trace to any
/// [`OutputWriter`] backend (CSV today; the trait leaves room for more).
///
/// Errors from the writer are stored internally because observer methods have
/// no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceOutputObserver<W: OutputWriter> {
    writer:      W,
    /// Passengers seen reaching the terminal state; becomes the summary's
    /// passenger count.
    seated_seen: u64,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> TraceOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            seated_seen: 0,
            last_error:  None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> BoardingObserver for TraceOutputObserver<W> {
    fn on_transition(&mut self, record: &TransitionRecord) {
        if record.to.is_terminal() {
            self.seated_seen += 1;
        }
        let row = TransitionRow {
            time_secs: record.at.seconds(),
            person:    record.person.0,
            from:      record.from.name(),
            to:        record.to.name(),
        };
        let result = self.writer.write_transition(&row);
        self.store_err(result);
    }

    fn on_complete(&mut self, final_time: SimTime, events: u64) {
        let summary = RunSummaryRow {
            passengers: self.seated_seen,
            events,
            total_secs: final_time.seconds(),
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
