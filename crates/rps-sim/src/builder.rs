//! Fluent builder for constructing a [`SimLoop`].

use std::time::Duration;

use rps_agent::{LinearScan, NeighborQuery};
use rps_core::SimConfig;

use crate::{Host, Population, SimLoop, SimResult};

/// Fluent builder for [`SimLoop<H, Q>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — group size, speed, arena, optional seed and limits
/// - `H: Host` — surface provider and renderer
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                   |
/// |-----------------------|-------------------------------------------|
/// | `.seed(s)`            | `config.seed`, else a random seed         |
/// | `.query(q)`           | [`LinearScan`]                            |
/// | `.population(p)`      | Spawned from the config; `p.config` wins  |
/// | `.max_ticks(n)`       | `config.max_ticks` (unbounded if `None`)  |
/// | `.tick_interval(d)`   | `config.tick_interval()` (uncapped)       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), HeadlessHost::default())
///     .seed(42)
///     .build()?;
/// let winner = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<H: Host, Q: NeighborQuery = LinearScan> {
    config:     SimConfig,
    host:       H,
    query:      Q,
    seed:       Option<u64>,
    population: Option<Population<Q>>,
    max_ticks:  Option<u64>,
    interval:   Option<Duration>,
}

impl<H: Host> SimBuilder<H, LinearScan> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, host: H) -> Self {
        Self {
            max_ticks: config.max_ticks,
            interval: config.tick_interval(),
            seed: config.seed,
            config,
            host,
            query: LinearScan,
            population: None,
        }
    }
}

impl<H: Host, Q: NeighborQuery> SimBuilder<H, Q> {
    /// Seed for spawn placement and jitter.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Swap the nearest-neighbor strategy.  Drops any population supplied
    /// through [`population`](Self::population).
    pub fn query<Q2: NeighborQuery>(self, query: Q2) -> SimBuilder<H, Q2> {
        SimBuilder {
            config:     self.config,
            host:       self.host,
            query,
            seed:       self.seed,
            population: None,
            max_ticks:  self.max_ticks,
            interval:   self.interval,
        }
    }

    /// Run an already built population instead of spawning one.
    ///
    /// The population's own config replaces the builder's, and its
    /// `max_ticks` and pacing become the new defaults.  Call
    /// [`max_ticks`](Self::max_ticks) or [`tick_interval`](Self::tick_interval)
    /// afterwards to override them.
    pub fn population(mut self, population: Population<Q>) -> Self {
        self.config = population.config.clone();
        self.max_ticks = population.config.max_ticks;
        self.interval = population.config.tick_interval();
        self.seed = Some(population.seed);
        self.population = Some(population);
        self
    }

    /// Stop after `n` completed ticks.
    pub fn max_ticks(mut self, n: u64) -> Self {
        self.max_ticks = Some(n);
        self
    }

    /// Minimum wall time per iteration.
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Validate the config, spawn the population if needed, and return a
    /// loop in the `Created` state.
    pub fn build(self) -> SimResult<SimLoop<H, Q>> {
        let population = match self.population {
            Some(p) => p,
            None => {
                let seed = self.seed.unwrap_or_else(|| self.config.resolve_seed());
                Population::with_query(&self.config, seed, self.query)?
            }
        };
        Ok(SimLoop::new(population, self.host, self.interval, self.max_ticks))
    }
}
