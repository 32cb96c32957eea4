//! Target selection: hunt around the most recent hit, otherwise fire at
//! random.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::ShotResult;
use crate::config::GRID_SIZE;
use crate::tracker::AttackTracker;

/// Cardinal probe offsets, tried in this order: left, right, up, down.
/// The fixed order keeps hunts reproducible under a seeded rng.
const PROBE_ORDER: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Interface implemented by target-selection strategies.
pub trait Targeting {
    /// Choose the next coordinate to fire at. The tracker is guaranteed
    /// to hold at least one untargeted coordinate while the match is in
    /// progress.
    fn choose_target(&mut self, rng: &mut SmallRng, tracker: &AttackTracker) -> (usize, usize);

    /// Learn whether the shot just issued hit a ship.
    fn report_result(&mut self, _target: (usize, usize), _result: ShotResult) {}
}

/// Remembers the single most recent confirmed hit and probes its
/// cardinal neighbors before falling back to uniform random fire.
///
/// The memory holds one coordinate only; orientation is never inferred,
/// so a hunt may re-probe the axis that already missed. Each side owns
/// its own instance — hunts never leak across sides.
#[derive(Debug, Clone, Default)]
pub struct HuntStrategy {
    pending: Option<(usize, usize)>,
}

impl HuntStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinate of the hit currently being hunted, if any.
    pub fn pending(&self) -> Option<(usize, usize)> {
        self.pending
    }
}

impl Targeting for HuntStrategy {
    fn choose_target(&mut self, rng: &mut SmallRng, tracker: &AttackTracker) -> (usize, usize) {
        if let Some((hx, hy)) = self.pending {
            for (dx, dy) in PROBE_ORDER {
                let x = hx as isize + dx;
                let y = hy as isize + dy;
                if tracker.is_valid_target(x, y) {
                    return (x as usize, y as usize);
                }
            }
            // All four neighbors explored; give up the hunt.
            self.pending = None;
        }
        // Rejection sampling; at least one coordinate is always open.
        loop {
            let x = rng.random_range(0..GRID_SIZE);
            let y = rng.random_range(0..GRID_SIZE);
            if tracker.is_valid_target(x as isize, y as isize) {
                return (x, y);
            }
        }
    }

    fn report_result(&mut self, target: (usize, usize), result: ShotResult) {
        // A miss leaves an ongoing hunt alone; the remaining directions
        // are probed on the next turn.
        if result.is_hit() {
            self.pending = Some(target);
        }
    }
}
