//! Fluent builder for constructing `AgentStore` + `GroupTable` + `AgentRngs`
//! in one step.
//!
//! # Usage
//!
//! ```rust
//! use rps_agent::AgentStoreBuilder;
//! use rps_core::{Arena, Kind};
//!
//! let (store, groups, rngs) = AgentStoreBuilder::new(Arena::new(1080, 1920), 20, 2)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 60);
//! assert_eq!(rngs.len(), 60);
//! assert_eq!(groups.count(Kind::Paper), 20);
//! ```

use rps_core::{AgentId, Arena, Kind, SimConfig, SimRng, SlotId, Vec2};

use crate::{AgentResult, AgentRngs, AgentStore, GroupTable};

/// Fluent builder for a freshly spawned population.
///
/// Sprites are created kind by kind (all rocks, then papers, then scissors).
/// Construction order fixes both the `AgentId`s and the initial slots: the
/// `n`-th sprite created is `AgentId(n)` and sits in slot `n` of its kind's
/// table.
pub struct AgentStoreBuilder {
    arena:      Arena,
    group_size: u32,
    speed:      u32,
    seed:       u64,
}

impl AgentStoreBuilder {
    /// Create a builder for `3 * group_size` sprites moving at `speed`.
    pub fn new(arena: Arena, group_size: u32, speed: u32) -> Self {
        Self { arena, group_size, speed, seed: 0 }
    }

    /// Builder matching a run configuration, seeded with `seed`.
    pub fn from_config(config: &SimConfig, seed: u64) -> Self {
        Self::new(config.arena(), config.group_size, config.speed).seed(seed)
    }

    /// Global seed for spawn placement and per-agent jitter.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Spawn every sprite at a random position inside
    /// `[0, width - size) × [0, bottom_wall - size)`.
    pub fn build(self) -> AgentResult<(AgentStore, GroupTable, AgentRngs)> {
        let g = self.group_size as usize;
        let count = 3 * g;
        let size = self.arena.sprite_size(self.group_size);
        let (max_x, max_y) = self.arena.spawn_extent(size);

        let mut store = AgentStore::new(count, size as f32, self.speed as f32);
        let mut groups = GroupTable::new(count);
        let mut rng = SimRng::new(self.seed);

        for (k, kind) in Kind::ALL.into_iter().enumerate() {
            for n in 0..g {
                let i = k * g + n;
                let x = rng.gen_range(0..max_x.max(1));
                let y = rng.gen_range(0..max_y.max(1));
                let agent = AgentId(i as u32);
                let slot = SlotId(i as u32);

                store.position[i] = Vec2::new(x as f32, y as f32);
                store.kind[i] = kind;
                store.slot[i] = slot;
                groups.place(kind, slot, agent)?;
            }
        }

        let rngs = AgentRngs::new(count, self.seed);
        Ok((store, groups, rngs))
    }
}
