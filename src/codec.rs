//! Fixed-layout binary snapshots of a full match state.
//!
//! One byte per cell or flag, in order: side A grid, side B grid,
//! side A tracker, side B tracker, phase, active side. No header, magic
//! or version tag; the format is tied to the fixed 8×8 geometry and the
//! fixed fleet. Loading is all-or-nothing and never touches existing
//! state.

use crate::common::{CorruptState, GameError};
use crate::config::GRID_SIZE;
use crate::engine::{GameState, Phase, Side};
use crate::grid::{Cell, Grid};
use crate::tracker::AttackTracker;

const CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Exact byte length of a persisted state.
pub const STATE_LEN: usize = 4 * CELLS + 2;

/// Serialize a state into its fixed byte layout.
pub fn save_state(state: &GameState) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(STATE_LEN);
    for grid in &state.grids {
        for row in grid.rows() {
            for cell in row {
                bytes.push(cell.to_byte());
            }
        }
    }
    for tracker in &state.trackers {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                bytes.push(tracker.is_marked(x, y) as u8);
            }
        }
    }
    bytes.push(match state.phase {
        Phase::Continue => 0,
        Phase::Over => 1,
    });
    bytes.push(match state.active {
        Side::A => 0,
        Side::B => 1,
    });
    bytes
}

/// Deserialize a state from its fixed byte layout.
///
/// Rejects any buffer that is not exactly [`STATE_LEN`] bytes, contains
/// a byte outside its vocabulary, or decodes to grids and trackers that
/// contradict each other.
pub fn load_state(bytes: &[u8]) -> Result<GameState, GameError> {
    if bytes.len() != STATE_LEN {
        return Err(CorruptState::WrongLength {
            expected: STATE_LEN,
            actual: bytes.len(),
        }
        .into());
    }

    let mut offset = 0;
    let mut grids = [Grid::new(), Grid::new()];
    for grid in grids.iter_mut() {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let value = bytes[offset];
                let cell = Cell::from_byte(value)
                    .ok_or(CorruptState::BadByte { offset, value })?;
                grid.set(x, y, cell)?;
                offset += 1;
            }
        }
    }

    let mut trackers = [AttackTracker::new(), AttackTracker::new()];
    for tracker in trackers.iter_mut() {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                match bytes[offset] {
                    0 => {}
                    1 => tracker.mark(x, y)?,
                    value => return Err(CorruptState::BadByte { offset, value }.into()),
                }
                offset += 1;
            }
        }
    }

    let phase = match bytes[offset] {
        0 => Phase::Continue,
        1 => Phase::Over,
        value => return Err(CorruptState::BadByte { offset, value }.into()),
    };
    offset += 1;
    let active = match bytes[offset] {
        0 => Side::A,
        1 => Side::B,
        value => return Err(CorruptState::BadByte { offset, value }.into()),
    };

    // A grid cell is resolved exactly when the opposing side has
    // targeted it; anything else is not a reachable state.
    for (grid, tracker) in [(&grids[0], &trackers[1]), (&grids[1], &trackers[0])] {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if grid.cell(x, y)?.is_resolved() != tracker.is_marked(x, y) {
                    return Err(CorruptState::Mismatch { x, y }.into());
                }
            }
        }
    }

    // A match still in progress needs ships afloat on both sides;
    // otherwise the next move has no legal target and could never
    // resolve.
    if phase == Phase::Continue {
        for (i, grid) in grids.iter().enumerate() {
            if !grid.has_ship_cells() {
                return Err(CorruptState::NoFleet { grid: i }.into());
            }
        }
    }

    Ok(GameState {
        grids,
        trackers,
        phase,
        active,
    })
}
