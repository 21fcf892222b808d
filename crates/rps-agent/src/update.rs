//! One sprite's update for one tick.
//!
//! ```text
//!   ① jitter            uniform in [-speed, speed) per axis
//!   ② nearest lookup    closest hunter and closest prey
//!   ③ hunt              speed toward the prey's center
//!   ④ flee              0.95 * speed away from a hunter within 500
//!   ⑤ clamp             keep the box 20 units inside the play area
//!   ⑥ wall avoidance    soft pull to the center from the outer quarter
//!   ⑦ separation        fixed push out of overlapping same-kind sprites,
//!                       then re-clamp
//!   ⑧ eat               convert every prey within 0.7 * size
//! ```
//!
//! Each step sees the position left by the previous one.  Sprites are
//! updated one after another, so a sprite reads neighbors that have already
//! moved this tick.

use rps_core::{AgentId, AgentRng, Arena, Kind, SlotId, Vec2};
use tracing::debug;

use crate::steering::{flee, hunt, jitter, separate, wall_avoidance, within_bite};
use crate::{AgentResult, AgentStore, GroupTable, NeighborQuery};

/// A prey sprite converted to its predator's kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    pub predator: AgentId,
    pub prey:     AgentId,
    /// Slot the prey held in the `from` table and now holds in the `to` table.
    pub slot:     SlotId,
    pub from:     Kind,
    pub to:       Kind,
}

/// What happened during one sprite's update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateOutcome {
    /// Displacement applied this tick (final minus starting position).
    pub moved:       Vec2,
    pub conversions: Vec<Conversion>,
}

/// Advance `agent` by one tick.
///
/// Mutates the sprite's position and, when it eats, the kind of the prey and
/// the group tables.  Errors only if the tables were already inconsistent.
pub fn update_agent<Q: NeighborQuery>(
    agent:  AgentId,
    store:  &mut AgentStore,
    groups: &mut GroupTable,
    rng:    &mut AgentRng,
    arena:  &Arena,
    query:  &Q,
) -> AgentResult<UpdateOutcome> {
    let i = agent.index();
    let kind = store.kind[i];
    let size = store.size;
    let speed = store.speed;
    let bounds = arena.bounds(size);
    let start = store.position[i];

    // ① jitter
    let mut pos = start + jitter(rng, speed);

    // ② nearest hunter / prey
    let hunter = query.nearest(agent, pos, groups.slots(kind.hunter()), &store.position);
    let prey = query.nearest(agent, pos, groups.slots(kind.prey()), &store.position);

    // ③ hunt
    if let Some(p) = prey {
        pos += hunt(pos.box_center(size), store.center(p), speed);
    }

    // ④ flee
    if let Some(h) = hunter {
        pos += flee(pos.box_center(size), store.center(h), speed);
    }

    // ⑤ clamp
    pos = bounds.clamp(pos);

    // ⑥ wall avoidance
    pos += wall_avoidance(pos, size, arena);

    // ⑦ separation
    let peers = groups
        .slots(kind)
        .iter()
        .flatten()
        .filter(|&&other| other != agent)
        .map(|other| store.position[other.index()]);
    pos = bounds.clamp(separate(pos, peers, size, speed));

    store.position[i] = pos;

    // ⑧ eat
    let conversions = eat(agent, kind, pos, store, groups)?;

    Ok(UpdateOutcome { moved: pos - start, conversions })
}

/// Convert every prey within biting range of `agent` at `pos`.
fn eat(
    agent:  AgentId,
    kind:   Kind,
    pos:    Vec2,
    store:  &mut AgentStore,
    groups: &mut GroupTable,
) -> AgentResult<Vec<Conversion>> {
    let prey_kind = kind.prey();
    let size = store.size;

    let bitten: Vec<SlotId> = groups
        .occupants(prey_kind)
        .filter(|&(_, p)| within_bite(pos, store.position[p.index()], size))
        .map(|(slot, _)| slot)
        .collect();

    let mut conversions = Vec::with_capacity(bitten.len());
    for slot in bitten {
        let prey = groups.transfer(slot, prey_kind, kind)?;
        store.kind[prey.index()] = kind;
        debug!(%agent, %prey, %slot, from = %prey_kind, to = %kind, "sprite converted");
        conversions.push(Conversion { predator: agent, prey, slot, from: prey_kind, to: kind });
    }
    Ok(conversions)
}
