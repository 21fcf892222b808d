//! Plain data row types written by output backends.

use rps_agent::Conversion;
use rps_core::Kind;

/// Per-kind counts after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickCensusRow {
    pub tick:        u64,
    pub rock:        u32,
    pub paper:       u32,
    pub scissors:    u32,
    /// Conversions that happened during the tick.
    pub conversions: u32,
}

/// One prey converted by one predator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRow {
    pub tick:     u64,
    pub predator: u32,
    pub prey:     u32,
    pub slot:     u32,
    pub from:     Kind,
    pub to:       Kind,
}

impl ConversionRow {
    pub fn new(tick: u64, c: &Conversion) -> Self {
        Self {
            tick,
            predator: c.predator.0,
            prey:     c.prey.0,
            slot:     c.slot.0,
            from:     c.from,
            to:       c.to,
        }
    }
}
