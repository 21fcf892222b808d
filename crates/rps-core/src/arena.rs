//! Arena geometry: play area, score-bar strip, walls and sprite sizing.
//!
//! ```text
//!   0 ───────────────────────────── width
//!   │   20-unit wall margin          │
//!   │                                │
//!   │         play area              │
//!   │                                │
//!   ├──────────── bottom_wall ───────┤   bottom_wall = height - height / 15
//!   │   score-bar strip              │
//!   height ──────────────────────────┘
//! ```
//!
//! The host supplies `width`/`height` once at creation; they never change
//! during a run.

use crate::{RpsError, RpsResult, Vec2};

/// Distance kept between a sprite's box and every arena edge.
pub const WALL_MARGIN: f32 = 20.0;

/// The score-bar strip takes `1 / SCORE_BAR_DIVISOR` of the full height.
pub const SCORE_BAR_DIVISOR: u32 = 15;

/// Rectangle a sprite's top-left corner may occupy (inclusive on all sides).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// `true` if `p` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// Hard-clamp `p` into the rectangle.
    ///
    /// The lower wall is applied first and the upper wall second, so in a
    /// degenerate rectangle the upper wall wins.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        let mut out = p;
        if out.x <= self.min_x {
            out.x = self.min_x;
        }
        if out.x >= self.max_x {
            out.x = self.max_x;
        }
        if out.y <= self.min_y {
            out.y = self.min_y;
        }
        if out.y >= self.max_y {
            out.y = self.max_y;
        }
        out
    }
}

/// Screen dimensions and the derived play area.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    /// Full surface width.
    pub width: u32,
    /// Full surface height, including the score-bar strip.
    pub height: u32,
    /// Height of the play area; everything below is the score-bar strip.
    pub bottom_wall: u32,
}

impl Arena {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bottom_wall: height - height / SCORE_BAR_DIVISOR,
        }
    }

    /// Height of the reserved score-bar strip.
    #[inline]
    pub fn score_bar_height(&self) -> u32 {
        self.height - self.bottom_wall
    }

    /// Side length of every sprite for a run with `group_size` sprites per kind.
    ///
    /// Each sprite gets roughly a quarter of its share of the play area:
    /// `floor(sqrt(bottom_wall * width / (3 * group_size)) / 2)`, never below 1.
    pub fn sprite_size(&self, group_size: u32) -> u32 {
        let total = 3.0 * group_size.max(1) as f32;
        let area = self.bottom_wall as f32 * self.width as f32;
        let side = ((area / total).sqrt() / 2.0) as u32;
        side.max(1)
    }

    /// Region a sprite of side `size` may occupy after wall clamping.
    #[inline]
    pub fn bounds(&self, size: f32) -> Bounds {
        Bounds {
            min_x: WALL_MARGIN,
            max_x: self.width as f32 - WALL_MARGIN - size,
            min_y: WALL_MARGIN,
            max_y: self.bottom_wall as f32 - WALL_MARGIN - size,
        }
    }

    /// Exclusive upper limits for random spawn coordinates: the spawn region
    /// is `[0, width - size) × [0, bottom_wall - size)`.
    #[inline]
    pub fn spawn_extent(&self, size: u32) -> (u32, u32) {
        (
            self.width.saturating_sub(size),
            self.bottom_wall.saturating_sub(size),
        )
    }

    /// Center of the play area.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.bottom_wall as f32 * 0.5)
    }

    /// `true` when `point` lies in the outer quarter of the play area on
    /// either axis (nearer than 25 % or farther than 75 %).
    #[inline]
    pub fn in_outer_quarter(&self, point: Vec2) -> bool {
        let w = self.width as f32;
        let h = self.bottom_wall as f32;
        point.x < w * 0.25 || point.x > w * 0.75 || point.y < h * 0.25 || point.y > h * 0.75
    }

    /// Fail unless a sprite of side `size` fits between the walls and can be
    /// spawned.
    pub fn validate_for(&self, size: u32) -> RpsResult<()> {
        let b = self.bounds(size as f32);
        let (sx, sy) = self.spawn_extent(size);
        if b.max_x < b.min_x || b.max_y < b.min_y || sx == 0 || sy == 0 {
            return Err(RpsError::ArenaTooSmall {
                width:  self.width,
                height: self.height,
                size,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} (play height {})", self.width, self.height, self.bottom_wall)
    }
}
