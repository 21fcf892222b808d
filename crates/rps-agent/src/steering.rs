//! The individual behaviors that make up one sprite update.
//!
//! Each function is pure: it takes positions and constants and returns a
//! displacement or a new position.  [`update_agent`][crate::update_agent]
//! chains them in a fixed order.

use rps_core::{AgentRng, Arena, Vec2};

/// Hunters farther than this (center to center) are ignored by the flee step.
pub const FLEE_RADIUS: f32 = 500.0;

/// Fleeing moves at this fraction of full speed, so a hunter closes in.
pub const FLEE_FACTOR: f32 = 0.95;

/// Fraction of the distance to the arena center applied per tick by wall
/// avoidance.
pub const AVOIDANCE_WEIGHT: f32 = 0.002;

/// A predator eats prey whose axis gaps are both within this fraction of the
/// sprite size.
pub const BITE_FACTOR: f32 = 0.7;

/// Random displacement, each axis uniform in `[-speed, +speed)`.
#[inline]
pub fn jitter(rng: &mut AgentRng, speed: f32) -> Vec2 {
    let dx = rng.symmetric(speed);
    let dy = rng.symmetric(speed);
    Vec2::new(dx, dy)
}

/// Step of exactly `speed` from `center` toward `target`.
///
/// Zero when the two points coincide.
#[inline]
pub fn hunt(center: Vec2, target: Vec2, speed: f32) -> Vec2 {
    (target - center).with_length(speed).unwrap_or(Vec2::ZERO)
}

/// Step of `FLEE_FACTOR * speed` from `center` directly away from `hunter`.
///
/// Zero beyond [`FLEE_RADIUS`] or when the two points coincide.
#[inline]
pub fn flee(center: Vec2, hunter: Vec2, speed: f32) -> Vec2 {
    let toward = hunter - center;
    if toward.length() > FLEE_RADIUS {
        return Vec2::ZERO;
    }
    toward
        .with_length(speed * FLEE_FACTOR)
        .map(|v| -v)
        .unwrap_or(Vec2::ZERO)
}

/// Soft pull toward the arena center for sprites in the outer quarter.
///
/// Inactive (zero) unless the sprite's center is in the outer quarter on at
/// least one axis; once active it applies to both axes.
pub fn wall_avoidance(position: Vec2, size: f32, arena: &Arena) -> Vec2 {
    let center = position.box_center(size);
    if !arena.in_outer_quarter(center) {
        return Vec2::ZERO;
    }
    let mid = arena.center();
    let axis = |c: f32, m: f32| {
        let dir = if c >= m { -1.0 } else { 1.0 };
        dir * (c - m).abs() * AVOIDANCE_WEIGHT
    };
    Vec2::new(axis(center.x, mid.x), axis(center.y, mid.y))
}

/// `true` when two boxes of side `size` at `a` and `b` overlap (both axis gaps
/// within `size`).
#[inline]
pub fn overlaps(a: Vec2, b: Vec2, size: f32) -> bool {
    (a.x - b.x).abs() <= size && (a.y - b.y).abs() <= size
}

/// `true` when `prey` is within biting range of `predator`.
#[inline]
pub fn within_bite(predator: Vec2, prey: Vec2, size: f32) -> bool {
    let reach = size * BITE_FACTOR;
    (predator.x - prey.x).abs() <= reach && (predator.y - prey.y).abs() <= reach
}

/// Push `position` out of every overlapping peer, one fixed `speed` step per
/// overlap and axis.
///
/// Peers are visited in order and each comparison uses the position left by
/// the previous push, so several overlaps add up within one call.
pub fn separate(position: Vec2, peers: impl IntoIterator<Item = Vec2>, size: f32, speed: f32) -> Vec2 {
    let mut pos = position;
    for other in peers {
        if !overlaps(pos, other, size) {
            continue;
        }
        let gap = pos - other;
        pos.x += step_away(gap.x, speed);
        pos.y += step_away(gap.y, speed);
    }
    pos
}

#[inline]
fn step_away(gap: f32, speed: f32) -> f32 {
    if gap > 0.0 {
        speed
    } else if gap < 0.0 {
        -speed
    } else {
        0.0
    }
}
