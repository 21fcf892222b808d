//! Run configuration.
//!
//! A `SimConfig` is fixed before the run starts and never changes while the
//! loop is running.  Applications usually load it from a TOML file (with the
//! `serde` feature) and fall back to [`SimConfig::default`] for missing keys.

use std::time::Duration;

use crate::{Arena, RpsError, RpsResult};

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Initial number of sprites per kind.  Total population is three times
    /// this.  Default: 20.
    pub group_size: u32,

    /// Per-tick maximum displacement of every sprite.  Default: 2.
    pub speed: u32,

    /// Surface width supplied by the host.
    pub arena_width: u32,

    /// Surface height supplied by the host, including the score-bar strip.
    pub arena_height: u32,

    /// Master RNG seed.  `None` draws a fresh seed for every run.
    pub seed: Option<u64>,

    /// Stop after this many ticks even if nobody has won.  `None` runs until
    /// a winner emerges or the loop is stopped externally.
    pub max_ticks: Option<u64>,

    /// Minimum wall-clock time per loop iteration, in milliseconds.  `None`
    /// runs uncapped: one tick per frame, as fast as the host can draw.
    pub tick_interval_ms: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            group_size:       20,
            speed:            2,
            arena_width:      1080,
            arena_height:     1920,
            seed:             None,
            max_ticks:        None,
            tick_interval_ms: None,
        }
    }
}

impl SimConfig {
    /// Total number of sprites in the run (`3 * group_size`).
    #[inline]
    pub fn population(&self) -> usize {
        3 * self.group_size as usize
    }

    /// The arena described by `arena_width` × `arena_height`.
    #[inline]
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Pacing interval, if any.
    pub fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval_ms.map(Duration::from_millis)
    }

    /// The configured seed, or a freshly drawn one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Check every field and that the arena can hold sprites of the derived
    /// size.
    pub fn validate(&self) -> RpsResult<()> {
        if self.group_size == 0 {
            return Err(RpsError::Config("group_size must be positive".into()));
        }
        if self.speed == 0 {
            return Err(RpsError::Config("speed must be positive".into()));
        }
        if self.arena_width == 0 || self.arena_height == 0 {
            return Err(RpsError::Config(format!(
                "arena must have positive dimensions, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        let arena = self.arena();
        arena.validate_for(arena.sprite_size(self.group_size))
    }
}
