//! A fixed-size N×N bit matrix packed into an unsigned integer `T`.
//!
//! Backs the per-side attack trackers: one bit per board coordinate,
//! set once a coordinate has been fired at. Marks are monotone; there
//! is deliberately no operation that clears a single bit.

use core::{any, fmt, mem};

use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bit matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// Requested grid size N*N exceeds the capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An N×N grid of mark bits stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the grid (`N * N`).
    const GRID_BITS: usize = N * N;

    /// Create a new empty grid (no marks) without a size check.
    #[inline]
    pub fn new() -> Self {
        BitGrid { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitGridError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::GRID_BITS > capacity {
            Err(BitGridError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(BitGrid { bits: T::zero() })
        }
    }

    /// Number of marked coordinates.
    pub fn marked_count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True if no coordinate is marked.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// True once every coordinate is marked.
    pub fn is_full(&self) -> bool {
        self.marked_count() == Self::GRID_BITS
    }

    /// Whether the bit at (row, col) is set.
    pub fn is_marked(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Set the bit at (row, col). Marking twice is a no-op.
    pub fn mark(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitGridError> {
        if row >= N || col >= N {
            Err(BitGridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> Default for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    'x'
                } else {
                    '.'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
