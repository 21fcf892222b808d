//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ConversionRow, OutputResult, TickCensusRow};

/// Sink for per-tick census rows and conversion records.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one census row.
    fn write_census(&mut self, row: &TickCensusRow) -> OutputResult<()>;

    /// Write a batch of conversions, in the order they happened.
    fn write_conversions(&mut self, rows: &[ConversionRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
