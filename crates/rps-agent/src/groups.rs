//! Per-kind fixed-capacity slot tables.
//!
//! # Design
//!
//! The population owns three tables (rock, paper, scissors), each with
//! `3 * group_size` slots.  A slot is either empty or holds the `AgentId` of
//! the one sprite that occupies it.  Sprites never hold references into the
//! tables; they only remember `(kind, slot)`.
//!
//! Conversion is [`GroupTable::transfer`]: the occupant of slot `i` in one
//! table moves to slot `i` of another.  Because every sprite starts in a
//! distinct slot index and transfers never change the index, each index is
//! held by exactly one sprite across the three tables at all times.

use rps_core::{AgentId, Kind, SlotId};

use crate::{AgentError, AgentResult};

/// Three slot tables indexed by [`Kind::index`].
#[derive(Clone, Debug)]
pub struct GroupTable {
    capacity: usize,
    tables:   [Vec<Option<AgentId>>; 3],
}

impl GroupTable {
    /// Create three empty tables of `capacity` slots each.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tables: [vec![None; capacity], vec![None; capacity], vec![None; capacity]],
        }
    }

    /// Slots per table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw slot array for `kind`, in slot order.
    #[inline]
    pub fn slots(&self, kind: Kind) -> &[Option<AgentId>] {
        &self.tables[kind.index()]
    }

    /// Occupant of `slot` in the `kind` table, if any.
    #[inline]
    pub fn get(&self, kind: Kind, slot: SlotId) -> Option<AgentId> {
        self.tables[kind.index()].get(slot.index()).copied().flatten()
    }

    /// Put `agent` into an empty slot.
    pub fn place(&mut self, kind: Kind, slot: SlotId, agent: AgentId) -> AgentResult<()> {
        let capacity = self.capacity;
        let cell = self.tables[kind.index()]
            .get_mut(slot.index())
            .ok_or(AgentError::SlotOutOfRange { kind, slot, capacity })?;
        if let Some(occupant) = *cell {
            return Err(AgentError::SlotOccupied { kind, slot, occupant });
        }
        *cell = Some(agent);
        Ok(())
    }

    /// Move the occupant of `slot` in the `from` table into the same slot of
    /// the `to` table and return it.
    ///
    /// Fails without touching either table if the source slot is empty or the
    /// destination slot is taken.
    pub fn transfer(&mut self, slot: SlotId, from: Kind, to: Kind) -> AgentResult<AgentId> {
        let capacity = self.capacity;
        if slot.index() >= capacity {
            return Err(AgentError::SlotOutOfRange { kind: from, slot, capacity });
        }
        let agent = self.get(from, slot).ok_or(AgentError::SlotEmpty { kind: from, slot })?;
        if from == to {
            return Ok(agent);
        }
        if let Some(occupant) = self.get(to, slot) {
            return Err(AgentError::SlotOccupied { kind: to, slot, occupant });
        }
        self.tables[from.index()][slot.index()] = None;
        self.tables[to.index()][slot.index()] = Some(agent);
        Ok(agent)
    }

    /// Number of occupied slots in the `kind` table.
    pub fn count(&self, kind: Kind) -> usize {
        self.tables[kind.index()].iter().filter(|s| s.is_some()).count()
    }

    /// Occupied-slot counts for all kinds, in [`Kind::ALL`] order.
    pub fn counts(&self) -> [usize; 3] {
        Kind::ALL.map(|k| self.count(k))
    }

    /// Iterator over `(slot, agent)` for every occupied slot of `kind`.
    pub fn occupants(&self, kind: Kind) -> impl Iterator<Item = (SlotId, AgentId)> + '_ {
        self.tables[kind.index()]
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|a| (SlotId(i as u32), a)))
    }
}
