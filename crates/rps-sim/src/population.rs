//! The `Population`: every sprite, the three group tables, and the tick.

use rps_agent::{
    AgentError, AgentRngs, AgentStore, AgentStoreBuilder, Conversion, GroupTable, LinearScan,
    NeighborQuery, update_agent,
};
use rps_core::{AgentId, Arena, Kind, SimConfig, Tick};
use tracing::{debug, info};

use crate::{Frame, SimResult, SpriteView};

/// Result of one [`Population::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// The tick that was applied (ticks completed before it).
    pub tick:        Tick,
    /// Winner seen by the check that opens the tick.
    pub winner:      Option<Kind>,
    /// Conversions in the order they happened.
    pub conversions: Vec<Conversion>,
    /// Per-kind counts after the tick, in [`Kind::ALL`] order.
    pub counts:      [usize; 3],
}

/// All sprites of one run plus the bookkeeping around them.
///
/// Every sprite lives in `agents` for the whole run; kinds change only through
/// conversions, so the total never changes.  `tick` counts completed ticks.
pub struct Population<Q: NeighborQuery = LinearScan> {
    pub config: SimConfig,
    pub arena:  Arena,
    /// Seed actually used for spawn and jitter.
    pub seed:   u64,
    pub agents: AgentStore,
    pub groups: GroupTable,
    pub rngs:   AgentRngs,
    pub tick:   Tick,
    query:      Q,
}

impl Population<LinearScan> {
    /// Validate `config` and spawn `3 * group_size` sprites at random.
    ///
    /// Uses `config.seed` if set, otherwise a fresh random seed.
    pub fn create(config: &SimConfig) -> SimResult<Self> {
        Self::with_query(config, config.resolve_seed(), LinearScan)
    }

    /// Like [`create`](Self::create) with an explicit seed.
    pub fn create_seeded(config: &SimConfig, seed: u64) -> SimResult<Self> {
        Self::with_query(config, seed, LinearScan)
    }
}

impl<Q: NeighborQuery> Population<Q> {
    /// Spawn a population that finds neighbors through `query`.
    pub fn with_query(config: &SimConfig, seed: u64, query: Q) -> SimResult<Self> {
        config.validate()?;
        let arena = config.arena();
        let (agents, groups, rngs) = AgentStoreBuilder::from_config(config, seed).build()?;
        info!(
            sprites = agents.count,
            size = agents.size,
            speed = agents.speed,
            seed,
            %arena,
            "population created"
        );
        Ok(Self {
            config: config.clone(),
            arena,
            seed,
            agents,
            groups,
            rngs,
            tick: Tick::ZERO,
            query,
        })
    }

    /// Total number of sprites.
    #[inline]
    pub fn total(&self) -> usize {
        self.agents.count
    }

    #[inline]
    pub fn count(&self, kind: Kind) -> usize {
        self.groups.count(kind)
    }

    /// Per-kind counts in [`Kind::ALL`] order.
    #[inline]
    pub fn counts(&self) -> [usize; 3] {
        self.groups.counts()
    }

    /// The kind holding every sprite, if any.
    pub fn check_winner(&self) -> Option<Kind> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Kind::ALL.into_iter().find(|&k| self.count(k) == total)
    }

    /// Apply one tick: check for a winner, then update every sprite once in
    /// ascending `AgentId` order.
    ///
    /// Each update sees the effects of the updates before it in the same tick.
    pub fn tick(&mut self) -> SimResult<TickReport> {
        let tick = self.tick;
        let winner = self.check_winner();
        let mut conversions = Vec::new();

        for i in 0..self.agents.count as u32 {
            let agent = AgentId(i);
            let rng = self.rngs.get_mut(agent);
            let outcome = update_agent(
                agent,
                &mut self.agents,
                &mut self.groups,
                rng,
                &self.arena,
                &self.query,
            )?;
            conversions.extend(outcome.conversions);
        }

        if cfg!(debug_assertions) {
            self.check_invariants()?;
        }

        self.tick = tick.next();
        let counts = self.counts();
        if !conversions.is_empty() {
            debug!(%tick, conversions = conversions.len(), ?counts, "tick converted sprites");
        }
        Ok(TickReport { tick, winner, conversions, counts })
    }

    /// Verify the group tables against the sprite arrays.
    ///
    /// Checks that the counts sum to the population, that every occupied slot
    /// points at a sprite recording that kind and slot, that every sprite is
    /// referenced exactly once, and that no slot index is held in more than
    /// one table.
    pub fn check_invariants(&self) -> SimResult<()> {
        let total = self.total();
        let found: usize = self.counts().iter().sum();
        if found != total {
            return Err(AgentError::PopulationChanged { expected: total, found }.into());
        }

        let mut seen = vec![false; total];
        let mut holder: Vec<Option<AgentId>> = vec![None; self.groups.capacity()];
        for kind in Kind::ALL {
            for (slot, agent) in self.groups.occupants(kind) {
                let i = agent.index();
                let consistent = i < total
                    && !seen[i]
                    && self.agents.kind[i] == kind
                    && self.agents.slot[i] == slot;
                if !consistent {
                    return Err(AgentError::Desynced { agent, kind, slot }.into());
                }
                seen[i] = true;

                if let Some(occupant) = holder[slot.index()] {
                    return Err(AgentError::SlotOccupied { kind, slot, occupant }.into());
                }
                holder[slot.index()] = Some(agent);
            }
        }
        Ok(())
    }

    /// Snapshot of everything the renderer needs.
    pub fn frame(&self) -> Frame {
        let sprites = self
            .agents
            .agent_ids()
            .map(|id| SpriteView {
                id,
                kind:     self.agents.kind[id.index()],
                position: self.agents.position[id.index()],
            })
            .collect();
        Frame {
            tick: self.tick,
            arena: self.arena,
            size: self.agents.size,
            sprites,
            counts: self.counts(),
            total: self.total(),
        }
    }
}
