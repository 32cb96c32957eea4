//! Per-side record of every coordinate already fired at.

use crate::bitgrid::BitGrid;
use crate::common::GameError;
use crate::config::GRID_SIZE;

/// 8×8 boolean matrix of targeted coordinates, one per attacking side.
///
/// Independent of either side's grid. Marks are monotone: once a
/// coordinate is targeted it stays targeted for the rest of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackTracker {
    cells: BitGrid<u64, GRID_SIZE>,
}

impl AttackTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff (x, y) is on the board and has not been targeted yet.
    /// Signed inputs so neighbor probes may wander off-board safely.
    pub fn is_valid_target(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x >= GRID_SIZE as isize || y >= GRID_SIZE as isize {
            return false;
        }
        !self.cells.is_marked(y as usize, x as usize).unwrap_or(true)
    }

    /// Record a shot at (x, y).
    pub fn mark(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        self.cells.mark(y, x).map_err(GameError::from)
    }

    /// Whether (x, y) has already been targeted. Off-board coordinates
    /// read as unmarked; use `is_valid_target` for aiming decisions.
    pub fn is_marked(&self, x: usize, y: usize) -> bool {
        self.cells.is_marked(y, x).unwrap_or(false)
    }

    /// Number of coordinates targeted so far.
    pub fn marked_count(&self) -> usize {
        self.cells.marked_count()
    }

    /// True once every coordinate has been targeted.
    pub fn is_exhausted(&self) -> bool {
        self.cells.is_full()
    }
}
