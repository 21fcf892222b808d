//! Core sprite storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The update step needs `&mut AgentRng` for the sprite being updated while
//! it reads every other sprite's position out of the store.  Keeping RNGs in a
//! separate `AgentRngs` struct lets both borrows coexist:
//!
//! ```ignore
//! let rng = pop.rngs.get_mut(agent);
//! update_agent(agent, &mut pop.agents, &mut pop.groups, rng, &arena, &LinearScan)?;
//! ```

use rps_core::{AgentId, AgentRng, Kind, SlotId, Vec2};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent RNG state, separated from [`AgentStore`] so an agent's RNG and
/// the shared sprite arrays can be borrowed at the same time.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all sprite state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];
/// ```
///
/// `kind` and `slot` are the sprite's back-reference into the
/// [`GroupTable`][crate::GroupTable]: `groups.get(kind[i], slot[i]) == Some(AgentId(i))`
/// holds between updates.
pub struct AgentStore {
    /// Number of sprites.  Constant for the run.
    pub count: usize,

    /// Side length of every sprite's square hitbox.
    pub size: f32,

    /// Per-tick maximum displacement of every sprite.
    pub speed: f32,

    /// Top-left corner of each sprite's hitbox.
    pub position: Vec<Vec2>,

    /// Current kind of each sprite.
    pub kind: Vec<Kind>,

    /// Slot each sprite occupies in its kind's table.
    pub slot: Vec<SlotId>,
}

impl AgentStore {
    pub(crate) fn new(count: usize, size: f32, speed: f32) -> Self {
        Self {
            count,
            size,
            speed,
            position: vec![Vec2::ZERO; count],
            kind:     vec![Kind::Rock; count],
            slot:     vec![SlotId::INVALID; count],
        }
    }

    /// `true` if there are no sprites.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending (construction) order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Center of the sprite's hitbox.
    #[inline]
    pub fn center(&self, agent: AgentId) -> Vec2 {
        self.position[agent.index()].box_center(self.size)
    }
}
