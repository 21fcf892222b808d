//! The host/renderer collaborator.
//!
//! The simulation never draws anything itself.  Each loop iteration it asks
//! the host for a surface, hands it a [`Frame`], and gives the surface back.
//! When a kind wins, the host is told once and is responsible for whatever
//! screen change follows.

use rps_core::Kind;

use crate::Frame;

/// Drawing surface provider and renderer.
pub trait Host {
    /// Whatever the host needs to draw into (a locked canvas, a buffer, …).
    type Surface;

    /// Lock a surface for this iteration.  `None` means no surface is
    /// available; the loop then skips the iteration without ticking.
    fn lock_surface(&mut self) -> Option<Self::Surface>;

    /// Render `frame`: background, every sprite, and the score bars.
    fn draw(&mut self, surface: &mut Self::Surface, frame: &Frame);

    /// Release a surface obtained from [`lock_surface`](Self::lock_surface).
    fn unlock_surface(&mut self, _surface: Self::Surface) {}

    /// Called once when `winner` has absorbed the whole population.
    fn on_winner(&mut self, winner: Kind);
}

/// A host without a screen: every surface is available and drawing only
/// records what would have been shown.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub frames_drawn: u64,
    /// Counts from the last drawn frame.
    pub last_counts:  [usize; 3],
    pub winner:       Option<Kind>,
}

impl Host for HeadlessHost {
    type Surface = ();

    fn lock_surface(&mut self) -> Option<()> {
        Some(())
    }

    fn draw(&mut self, _surface: &mut (), frame: &Frame) {
        self.frames_drawn += 1;
        self.last_counts = frame.counts;
    }

    fn on_winner(&mut self, winner: Kind) {
        self.winner = Some(winner);
    }
}
