//! The 8×8 fleet grid and its cell vocabulary.

use core::fmt;

use crate::common::{GameError, ShotResult};
use crate::config::GRID_SIZE;

/// State of a single grid cell.
///
/// Legal transitions are `Ship → Hit` and `Empty → Miss`; cells never
/// revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Fixed-width encoding used by the persistence codec.
    pub fn to_byte(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Ship => 1,
            Cell::Hit => 2,
            Cell::Miss => 3,
        }
    }

    /// Inverse of [`Cell::to_byte`]; `None` for out-of-vocabulary bytes.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Ship),
            2 => Some(Cell::Hit),
            3 => Some(Cell::Miss),
            _ => None,
        }
    }

    /// True once the cell has been shot at.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Ship => '#',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

/// One side's fleet layout, including hits and misses scored against it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    // indexed [y][x]
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// An all-empty grid, as created at match setup.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Bounds-checked read of the cell at (x, y).
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, GameError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[y][x])
    }

    /// Bounds-checked write. Fleet placement and test fixtures seed
    /// layouts through this; attack resolution goes via `receive_shot`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GameError> {
        self.check_bounds(x, y)?;
        self.cells[y][x] = cell;
        Ok(())
    }

    /// Resolve a shot at (x, y): `Ship → Hit`, `Empty → Miss`.
    ///
    /// Shooting a cell that is already resolved means the caller's
    /// tracker and this grid have diverged, which is a bug.
    pub fn receive_shot(&mut self, x: usize, y: usize) -> Result<ShotResult, GameError> {
        match self.cell(x, y)? {
            Cell::Ship => {
                self.cells[y][x] = Cell::Hit;
                Ok(ShotResult::Hit)
            }
            Cell::Empty => {
                self.cells[y][x] = Cell::Miss;
                Ok(ShotResult::Miss)
            }
            _ => Err(GameError::InvalidOperation("shot at an already resolved cell")),
        }
    }

    /// Count of `Ship` cells still afloat.
    pub fn ship_cells_remaining(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Ship)
            .count()
    }

    /// True while any `Ship` cell remains; the win check.
    pub fn has_ship_cells(&self) -> bool {
        self.cells.iter().flatten().any(|c| *c == Cell::Ship)
    }

    pub(crate) fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GameError> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            Err(GameError::OutOfBounds { x, y })
        } else {
            Ok(())
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in &self.cells {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            if y + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
