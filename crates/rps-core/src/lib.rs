//! `rps-core` — foundational types for the `rust_rps` swarm simulation.
//!
//! This crate is a dependency of every other `rps-*` crate.  It has no
//! `rps-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `SlotId`                                   |
//! | [`kind`]        | `Kind` (Rock / Paper / Scissors) and the cyclic rule  |
//! | [`geo`]         | `Vec2`                                                |
//! | [`arena`]       | `Arena`, `Bounds`, wall margin, sprite sizing         |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `SimConfig`                                           |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `RpsError`, `RpsResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `SimConfig` from a file.                  |

pub mod arena;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kind;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arena::{Arena, Bounds, SCORE_BAR_DIVISOR, WALL_MARGIN};
pub use config::SimConfig;
pub use error::{RpsError, RpsResult};
pub use geo::Vec2;
pub use ids::{AgentId, SlotId};
pub use kind::Kind;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
