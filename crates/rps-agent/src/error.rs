//! Error types for rps-agent.
//!
//! Every variant describes a broken group-table invariant.  None of them is
//! recoverable inside a tick: the simulation loop treats them as fatal.

use rps_core::{AgentId, Kind, SlotId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{slot} is out of range for the {kind} table (capacity {capacity})")]
    SlotOutOfRange {
        kind:     Kind,
        slot:     SlotId,
        capacity: usize,
    },

    #[error("{slot} in the {kind} table is empty")]
    SlotEmpty {
        kind: Kind,
        slot: SlotId,
    },

    #[error("{slot} in the {kind} table is already held by {occupant}")]
    SlotOccupied {
        kind:     Kind,
        slot:     SlotId,
        occupant: AgentId,
    },

    #[error("{agent} is recorded as {kind} at {slot} but the table disagrees")]
    Desynced {
        agent: AgentId,
        kind:  Kind,
        slot:  SlotId,
    },

    #[error("group tables hold {found} sprites, expected {expected}")]
    PopulationChanged {
        expected: usize,
        found:    usize,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
