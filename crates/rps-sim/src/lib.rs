//! `rps-sim` — population bookkeeping and the frame loop for `rust_rps`.
//!
//! # One loop iteration
//!
//! ```text
//! while running:
//!   ① Surface  — ask the host for a surface.
//!   ② Winner   — if one kind holds every sprite: notify host, stop.
//!   ③ Skip     — no surface: nothing changes this iteration.
//!   ④ Tick     — update every sprite once, in ascending AgentId order.
//!   ⑤ Publish  — snapshot a Frame into the FrameBuffer.
//!   ⑥ Draw     — host draws the frame and releases the surface.
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`population`] | `Population`, `TickReport`                            |
//! | [`sim_loop`]   | `SimLoop`, `LoopState`, `LoopHandle`, `LoopOutcome`   |
//! | [`frame`]      | `Frame`, `ScoreBar`, colors, `FrameBuffer`            |
//! | [`host`]       | `Host` trait, `HeadlessHost`                          |
//! | [`observer`]   | `SimObserver`, `NoopObserver`                         |
//! | [`builder`]    | `SimBuilder`                                          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rps_core::SimConfig;
//! use rps_sim::{HeadlessHost, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), HeadlessHost::default())
//!     .seed(7)
//!     .build()?;
//! if let Some(winner) = sim.run(&mut NoopObserver)? {
//!     println!("{}", winner.winner_message());
//! }
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod host;
pub mod observer;
pub mod population;
pub mod sim_loop;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use frame::{BACKGROUND, Frame, FrameBuffer, Rgb, ScoreBar, SpriteView, bar_color};
pub use host::{HeadlessHost, Host};
pub use observer::{NoopObserver, SimObserver};
pub use population::{Population, TickReport};
pub use sim_loop::{LoopHandle, LoopOutcome, LoopState, SimLoop};
