//! Simulation observer trait for progress reporting and data collection.

use rps_core::{Kind, Tick};

use crate::{Frame, TickReport};

/// Callbacks invoked by [`SimLoop::run`][crate::SimLoop::run] at key points
/// in the frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — census printer
///
/// ```rust,ignore
/// struct Census { interval: u64 }
///
/// impl SimObserver for Census {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         if report.tick.0 % self.interval == 0 {
///             println!("{}: {:?}", report.tick, report.counts);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called right before a tick is applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick, with its conversions and the resulting counts.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called with every published frame, before the host draws it.
    fn on_frame(&mut self, _frame: &Frame) {}

    /// Called once when a winner is detected.
    fn on_winner(&mut self, _tick: Tick, _winner: Kind) {}

    /// Called once when the loop stops, for any reason.
    fn on_sim_end(&mut self, _final_tick: Tick, _winner: Option<Kind>) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
