//! A fixed-size bitboard used as the engine's cell set.
//!
//! Boards of any supported [`GridSize`] are packed row-major into an unsigned
//! integer `T` with a row stride of `N`, so set algebra over ships, halos and
//! shots is a handful of integer operations. The type is `no_std` friendly and
//! avoids heap allocations.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::{GridSize, MAX_DIMENSION};
use crate::coordinate::Coordinate;

/// Cell set sized for the largest supported grid.
pub type CellMask = BitBoard<u128, MAX_DIMENSION>;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Row or column index is outside the `N×N` capacity.
    IndexOutOfBounds { row: u8, col: u8 },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An `N×N` bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn capacity_mask() -> T {
        if Self::BOARD_BITS >= mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn index(coord: Coordinate) -> Option<usize> {
        if (coord.row as usize) < N && (coord.col as usize) < N {
            Some(coord.row as usize * N + coord.col as usize)
        } else {
            None
        }
    }

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Every cell of a `grid` board.
    pub fn full(grid: GridSize) -> Self {
        Self::from_coords(grid.coordinates())
    }

    /// Builds a set from coordinates, ignoring any outside the capacity.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut board = Self::new();
        for coord in coords {
            board.insert(coord);
        }
        board
    }

    /// Number of cells in the set.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; out-of-capacity cells are never members.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match Self::index(coord) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `coord`, failing if it lies outside the capacity.
    pub fn set(&mut self, coord: Coordinate) -> Result<(), BitBoardError> {
        let idx = Self::index(coord).ok_or(BitBoardError::IndexOutOfBounds {
            row: coord.row,
            col: coord.col,
        })?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Adds `coord` and reports whether it was newly inserted.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        if self.contains(coord) {
            return false;
        }
        self.set(coord).is_ok()
    }

    /// Returns `true` if every bit set here is also set in `other`, including
    /// stray bits past the capacity.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        (self.bits & !other.bits).is_zero()
    }

    /// Returns `true` if the two sets share a cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// The 8-directional ring around the set on a `grid` board, excluding
    /// the set itself.
    pub fn halo(&self, grid: GridSize) -> Self {
        let mut ring = Self::new();
        for coord in self.iter() {
            for n in coord.all_neighbors(grid) {
                ring.insert(n);
            }
        }
        ring & !*self
    }

    /// Lowest-index member in row-major order.
    pub fn first(&self) -> Option<Coordinate> {
        self.iter().next()
    }

    /// Iterator over members in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<T, N> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::from_coords(iter)
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / N) as u8, (idx % N) as u8));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Complement within the `N×N` capacity. Intersect with
/// [`BitBoard::full`] to restrict to a smaller grid.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::capacity_mask(),
        }
    }
}

impl<T, const N: usize> BitAndAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
