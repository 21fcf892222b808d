//! Read-only frame snapshots and the double buffer that publishes them.
//!
//! The loop builds one [`Frame`] after every completed tick and publishes it
//! as an `Arc<Frame>`.  Readers on other threads always get the last fully
//! computed frame; they never see a tick half applied.

use std::sync::{Arc, PoisonError, RwLock};

use rps_core::{AgentId, Arena, Kind, Tick, Vec2};

/// An sRGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB` form.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Arena background.
pub const BACKGROUND: Rgb = Rgb(0xFF, 0xFD, 0xF2);

/// Score-bar segment color for `kind`.
pub fn bar_color(kind: Kind) -> Rgb {
    match kind {
        Kind::Rock     => Rgb(0xA6, 0xD0, 0xDD),
        Kind::Paper    => Rgb(0xFF, 0xD3, 0xB0),
        Kind::Scissors => Rgb(0xFF, 0x69, 0x69),
    }
}

/// One sprite as the renderer sees it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteView {
    pub id:       AgentId,
    pub kind:     Kind,
    /// Top-left corner of the sprite's square.
    pub position: Vec2,
}

/// One segment of the score bar, in surface coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoreBar {
    pub kind:  Kind,
    pub left:  f32,
    pub right: f32,
    pub top:   f32,
    pub bottom: f32,
    pub color: Rgb,
}

impl ScoreBar {
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// Everything the host needs to draw one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Ticks completed when the frame was taken.
    pub tick:    Tick,
    pub arena:   Arena,
    /// Side length of every sprite.
    pub size:    f32,
    /// Sprites in construction order.
    pub sprites: Vec<SpriteView>,
    /// Per-kind counts in [`Kind::ALL`] order.
    pub counts:  [usize; 3],
    pub total:   usize,
}

impl Frame {
    #[inline]
    pub fn count(&self, kind: Kind) -> usize {
        self.counts[kind.index()]
    }

    /// The three score-bar segments, left to right Rock, Paper, Scissors.
    ///
    /// Each segment is `(width / total) * count` wide and spans the strip
    /// below the play area.
    pub fn score_bars(&self) -> [ScoreBar; 3] {
        let unit = if self.total == 0 { 0.0 } else { self.arena.width as f32 / self.total as f32 };
        let top = self.arena.bottom_wall as f32;
        let bottom = self.arena.height as f32;
        let mut left = 0.0;
        Kind::ALL.map(|kind| {
            let right = left + unit * self.count(kind) as f32;
            let bar = ScoreBar { kind, left, right, top, bottom, color: bar_color(kind) };
            left = right;
            bar
        })
    }
}

/// Single-slot publish/read buffer for frames.
///
/// Cloning shares the same slot.
#[derive(Clone, Default)]
pub struct FrameBuffer {
    latest: Arc<RwLock<Option<Arc<Frame>>>>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the published frame.
    pub fn publish(&self, frame: Arc<Frame>) {
        let mut slot = self.latest.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(frame);
    }

    /// The last published frame, if any.
    pub fn latest(&self) -> Option<Arc<Frame>> {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
