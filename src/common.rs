//! Shot results and the crate error taxonomy.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::bitgrid::BitGridError;

/// Outcome of resolving one shot against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    Hit,
    Miss,
}

impl ShotResult {
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit)
    }
}

/// Why a persisted snapshot was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptState {
    /// Byte length differs from the fixed snapshot size.
    WrongLength { expected: usize, actual: usize },
    /// A cell or flag byte is outside its vocabulary.
    BadByte { offset: usize, value: u8 },
    /// A grid cell and the opposing tracker disagree about whether the
    /// coordinate was ever shot at.
    Mismatch { x: usize, y: usize },
    /// The phase flag says play continues, but the fleet in the given
    /// grid slot is already destroyed.
    NoFleet { grid: usize },
}

/// Errors returned by engine operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bit matrix error (out-of-range index).
    BitGrid(BitGridError),
    /// Coordinate outside the 8×8 board.
    OutOfBounds { x: usize, y: usize },
    /// Fleet placement ran out of attempts for the named ship.
    PlacementExhausted { ship: &'static str },
    /// Persisted bytes failed validation.
    CorruptState(CorruptState),
    /// Internal invariant breach; indicates a bug, not a user condition.
    InvalidOperation(&'static str),
}

impl From<BitGridError> for GameError {
    fn from(err: BitGridError) -> Self {
        GameError::BitGrid(err)
    }
}

impl From<CorruptState> for GameError {
    fn from(err: CorruptState) -> Self {
        GameError::CorruptState(err)
    }
}

impl fmt::Display for CorruptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptState::WrongLength { expected, actual } => {
                write!(f, "snapshot is {} bytes, expected {}", actual, expected)
            }
            CorruptState::BadByte { offset, value } => {
                write!(f, "invalid byte {} at offset {}", value, offset)
            }
            CorruptState::Mismatch { x, y } => {
                write!(f, "grid and tracker disagree at ({}, {})", x, y)
            }
            CorruptState::NoFleet { grid } => {
                write!(f, "match marked in progress but grid {} has no ship cells", grid)
            }
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitGrid(e) => write!(f, "BitGrid error: {}", e),
            GameError::OutOfBounds { x, y } => {
                write!(f, "coordinate ({}, {}) is off the board", x, y)
            }
            GameError::PlacementExhausted { ship } => {
                write!(f, "no legal placement found for {}", ship)
            }
            GameError::CorruptState(e) => write!(f, "corrupt saved state: {}", e),
            GameError::InvalidOperation(msg) => write!(f, "invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}
