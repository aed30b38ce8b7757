//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RunSummaryRow, TransitionRow};

/// Trait implemented by trace writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`TraceOutputObserver::take_error`][crate::TraceOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one transition of the event trace.
    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()>;

    /// Write the run summary row.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
