//! Nearest-neighbor lookup over a group slot table.
//!
//! The default [`LinearScan`] is a brute-force O(n) pass over the slot array.
//! At the intended scale (tens of sprites per kind) this beats building any
//! index, and it sees positions exactly as they are mid-tick, after earlier
//! sprites in the same pass have already moved.
//!
//! A grid or k-d tree can replace it behind [`NeighborQuery`] as long as it
//! keeps the contract: closest occupied, non-self slot; ties go to the lowest
//! slot index; `None` when the table holds nobody else.

use rps_core::{AgentId, Vec2};

/// Nearest-sprite lookup used by the hunt and flee steps.
pub trait NeighborQuery {
    /// Closest occupant of `slots` to `at`, excluding `origin`.
    ///
    /// `positions` is the store's position array, indexed by `AgentId`.
    fn nearest(
        &self,
        origin:    AgentId,
        at:        Vec2,
        slots:     &[Option<AgentId>],
        positions: &[Vec2],
    ) -> Option<AgentId>;
}

/// Brute-force scan in slot order.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScan;

impl NeighborQuery for LinearScan {
    fn nearest(
        &self,
        origin:    AgentId,
        at:        Vec2,
        slots:     &[Option<AgentId>],
        positions: &[Vec2],
    ) -> Option<AgentId> {
        let mut best: Option<(AgentId, f32)> = None;
        for &other in slots.iter().flatten() {
            if other == origin {
                continue;
            }
            let d = at.distance(positions[other.index()]);
            // Strict `<` keeps the first of equally distant candidates.
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((other, d));
            }
        }
        best.map(|(a, _)| a)
    }
}
