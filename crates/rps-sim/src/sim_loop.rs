//! The frame loop: tick, publish, draw, until a winner or a stop request.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rps_agent::{LinearScan, NeighborQuery};
use rps_core::{Kind, Tick};
use tracing::{info, trace, warn};

use crate::{Frame, FrameBuffer, Host, Population, SimError, SimObserver, SimResult};

/// Where the loop is in its lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Built but never stepped.
    Created,
    Running,
    /// Terminal.  `winner` is `None` when the loop was stopped from outside,
    /// hit its tick limit, or failed a tick.  A winner present when the tick
    /// limit is reached still ends the loop with `Some`.
    Stopped { winner: Option<Kind> },
}

impl LoopState {
    #[inline]
    pub fn is_stopped(self) -> bool {
        matches!(self, LoopState::Stopped { .. })
    }
}

/// Drives a [`Population`] and a [`Host`] frame by frame.
///
/// Each iteration locks a surface, checks for a winner, applies one tick,
/// publishes the new [`Frame`], and has the host draw it.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct SimLoop<H: Host, Q: NeighborQuery = LinearScan> {
    pub population: Population<Q>,
    pub host:       H,
    state:          LoopState,
    running:        Arc<AtomicBool>,
    frames:         FrameBuffer,
    interval:       Option<Duration>,
    max_ticks:      Option<u64>,
    skipped_frames: u64,
}

impl<H: Host, Q: NeighborQuery> SimLoop<H, Q> {
    pub(crate) fn new(
        population: Population<Q>,
        host:       H,
        interval:   Option<Duration>,
        max_ticks:  Option<u64>,
    ) -> Self {
        Self {
            population,
            host,
            state: LoopState::Created,
            running: Arc::new(AtomicBool::new(true)),
            frames: FrameBuffer::new(),
            interval,
            max_ticks,
            skipped_frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Iterations skipped because the host had no surface.
    #[inline]
    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }

    /// Shared stop flag.  Storing `false` stops the loop at the start of its
    /// next iteration.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Handle on the published frames.
    pub fn frames(&self) -> FrameBuffer {
        self.frames.clone()
    }

    /// Request a stop.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Run one loop iteration and return the resulting state.
    ///
    /// Does nothing once the loop is stopped.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<LoopState> {
        if self.state.is_stopped() {
            return Ok(self.state);
        }
        self.state = LoopState::Running;

        if !self.running.load(Ordering::Acquire) {
            info!(tick = %self.population.tick, "loop stopped on request");
            return Ok(self.finish(None, observer));
        }

        let started = Instant::now();
        let surface = self.host.lock_surface();

        if let Some(winner) = self.population.check_winner() {
            if let Some(surface) = surface {
                self.host.unlock_surface(surface);
            }
            let tick = self.population.tick;
            info!(%tick, %winner, "{}", winner.winner_message());
            self.host.on_winner(winner);
            observer.on_winner(tick, winner);
            return Ok(self.finish(Some(winner), observer));
        }

        if self.max_ticks.is_some_and(|max| self.population.tick.0 >= max) {
            if let Some(surface) = surface {
                self.host.unlock_surface(surface);
            }
            info!(tick = %self.population.tick, "loop reached its tick limit");
            return Ok(self.finish(None, observer));
        }

        let Some(mut surface) = surface else {
            self.skipped_frames += 1;
            trace!(tick = %self.population.tick, "no surface, frame skipped");
            thread::yield_now();
            return Ok(self.state);
        };

        observer.on_tick_start(self.population.tick);
        let report = match self.population.tick() {
            Ok(report) => report,
            Err(e) => {
                self.host.unlock_surface(surface);
                warn!(error = %e, "tick failed, stopping loop");
                self.finish(None, observer);
                return Err(e);
            }
        };
        observer.on_tick_end(&report);

        let frame = Arc::new(self.population.frame());
        self.frames.publish(Arc::clone(&frame));
        observer.on_frame(&frame);
        self.host.draw(&mut surface, &frame);
        self.host.unlock_surface(surface);

        if let Some(interval) = self.interval {
            let spent = started.elapsed();
            if spent < interval {
                thread::sleep(interval - spent);
            }
        }
        Ok(self.state)
    }

    /// Step until the loop stops.  Returns the winner, if there was one.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Kind>> {
        loop {
            if let LoopState::Stopped { winner } = self.step(observer)? {
                return Ok(winner);
            }
        }
    }

    /// Move the loop onto its own thread.
    ///
    /// The returned handle can stop the loop, read the latest frame, and join
    /// to get the host and observer back.
    pub fn spawn<O>(mut self, mut observer: O) -> LoopHandle<H, O>
    where
        H: Send + 'static,
        Q: Send + 'static,
        O: SimObserver + Send + 'static,
    {
        let running = self.running_flag();
        let frames = self.frames();
        let join = thread::spawn(move || -> SimResult<LoopOutcome<H, O>> {
            let winner = self.run(&mut observer)?;
            Ok(LoopOutcome {
                winner,
                ticks: self.population.tick,
                host: self.host,
                observer,
            })
        });
        LoopHandle { running, frames, join }
    }

    fn finish<O: SimObserver>(&mut self, winner: Option<Kind>, observer: &mut O) -> LoopState {
        self.running.store(false, Ordering::Release);
        self.state = LoopState::Stopped { winner };
        observer.on_sim_end(self.population.tick, winner);
        self.state
    }
}

/// What a spawned loop hands back when it ends.
pub struct LoopOutcome<H, O> {
    pub winner:   Option<Kind>,
    /// Ticks completed.
    pub ticks:    Tick,
    pub host:     H,
    pub observer: O,
}

/// Control handle for a loop running on its own thread.
pub struct LoopHandle<H, O> {
    running: Arc<AtomicBool>,
    frames:  FrameBuffer,
    join:    JoinHandle<SimResult<LoopOutcome<H, O>>>,
}

impl<H, O> LoopHandle<H, O> {
    /// Ask the loop to stop.  It finishes its current iteration first.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// `false` once the loop has stopped or been asked to.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// The last frame the loop published.
    pub fn latest_frame(&self) -> Option<Arc<Frame>> {
        self.frames.latest()
    }

    /// Wait for the loop thread to end.
    pub fn join(self) -> SimResult<LoopOutcome<H, O>> {
        self.join.join().map_err(|_| SimError::LoopPanicked)?
    }
}
