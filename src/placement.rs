//! Random fleet placement under the no-touch adjacency rule.

use rand::Rng;

use crate::common::GameError;
use crate::config::{FLEET, GRID_SIZE, PLACEMENT_ATTEMPTS};
use crate::grid::{Cell, Grid};
use crate::ship::{Orientation, ShipClass};

/// Place the whole fleet onto an all-empty grid, in fleet order.
///
/// Fails with `PlacementExhausted` if any ship cannot find a legal spot
/// within the attempt budget. Retrying the whole placement from scratch
/// is safe since sampling is random, but the budget is generous enough
/// that exhaustion signals a configuration problem.
pub fn place_fleet<R: Rng>(rng: &mut R, grid: &mut Grid) -> Result<(), GameError> {
    for ship in FLEET {
        place_ship(rng, grid, ship)?;
    }
    Ok(())
}

fn place_ship<R: Rng>(rng: &mut R, grid: &mut Grid, ship: ShipClass) -> Result<(), GameError> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let x = rng.random_range(0..GRID_SIZE);
        let y = rng.random_range(0..GRID_SIZE);
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if is_valid_placement(grid, x, y, ship.length(), orientation) {
            for i in 0..ship.length() {
                let (px, py) = orientation.nth_cell(x, y, i);
                grid.set(px, py, Cell::Ship)?;
            }
            return Ok(());
        }
    }
    Err(GameError::PlacementExhausted { ship: ship.name() })
}

/// A placement is valid when every cell is in bounds and empty, and no
/// already placed ship occupies the 8-connected (Moore) neighborhood of
/// any of its cells — ships never touch, not even diagonally.
pub fn is_valid_placement(
    grid: &Grid,
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
) -> bool {
    for i in 0..length {
        let (px, py) = orientation.nth_cell(x, y, i);
        if px >= GRID_SIZE || py >= GRID_SIZE {
            return false;
        }
        if !matches!(grid.cell(px, py), Ok(Cell::Empty)) {
            return false;
        }
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                let nx = px as i32 + dx;
                let ny = py as i32 + dy;
                if nx < 0 || ny < 0 || nx >= GRID_SIZE as i32 || ny >= GRID_SIZE as i32 {
                    continue;
                }
                if matches!(grid.cell(nx as usize, ny as usize), Ok(Cell::Ship)) {
                    return false;
                }
            }
        }
    }
    true
}
