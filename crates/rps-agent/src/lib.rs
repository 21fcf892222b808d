//! `rps-agent` — sprite storage and per-tick sprite behavior for `rust_rps`.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`store`]     | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)      |
//! | [`groups`]    | `GroupTable` — three fixed-capacity per-kind slot tables    |
//! | [`nearest`]   | `NeighborQuery` trait, `LinearScan`                         |
//! | [`steering`]  | Pure behavior steps: jitter, hunt, flee, avoidance, …       |
//! | [`update`]    | `update_agent`, `Conversion`, `UpdateOutcome`               |
//! | [`builder`]   | `AgentStoreBuilder` (random spawn)                          |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                              |

pub mod builder;
pub mod error;
pub mod groups;
pub mod nearest;
pub mod steering;
pub mod store;
pub mod update;


pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use groups::GroupTable;
pub use nearest::{LinearScan, NeighborQuery};
pub use store::{AgentRngs, AgentStore};
pub use update::{Conversion, UpdateOutcome, update_agent};
