//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rps_core::{Kind, Tick};
use rps_sim::{SimObserver, TickReport};
use tracing::warn;

use crate::row::{ConversionRow, TickCensusRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a census row per tick and every conversion
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:          W,
    census_interval: u64,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` that records every tick.
    pub fn new(writer: W) -> Self {
        Self { writer, census_interval: 1, last_error: None }
    }

    /// Write a census row only every `n` ticks.  Conversions are always
    /// written.  `0` is treated as `1`.
    pub fn census_every(mut self, n: u64) -> Self {
        self.census_interval = n.max(1);
        self
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

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let tick = report.tick.0;

        if !report.conversions.is_empty() {
            let rows: Vec<ConversionRow> = report
                .conversions
                .iter()
                .map(|c| ConversionRow::new(tick, c))
                .collect();
            let result = self.writer.write_conversions(&rows);
            self.store_err(result);
        }

        if tick.is_multiple_of(self.census_interval) {
            let [rock, paper, scissors] = report.counts.map(|n| n as u32);
            let row = TickCensusRow {
                tick,
                rock,
                paper,
                scissors,
                conversions: report.conversions.len() as u32,
            };
            let result = self.writer.write_census(&row);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _winner: Option<Kind>) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
