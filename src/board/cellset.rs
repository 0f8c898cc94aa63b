//! Compact cell set for free-cell enumeration

use super::{Cell, TOTAL_CELLS};

const FULL: u16 = u16::MAX;

/// Set of cells packed into one `u16`, bit `i` = cell with index `i`.
///
/// Iteration follows bit order, which is the fixed column-major move order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSet {
    bits: u16,
}

impl CellSet {
    /// Create empty set
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set holding all 16 cells
    pub const fn full() -> Self {
        Self { bits: FULL }
    }

    #[inline]
    pub fn insert(&mut self, cell: Cell) {
        self.bits |= 1u16 << cell.to_index();
    }

    #[inline]
    pub fn remove(&mut self, cell: Cell) {
        self.bits &= !(1u16 << cell.to_index());
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (self.bits >> cell.to_index()) & 1 == 1
    }

    /// Cells not in this set
    #[inline]
    pub fn complement(&self) -> Self {
        Self { bits: !self.bits }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> CellSetIter {
        CellSetIter { bits: self.bits }
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

/// Iterator over the cells of a `CellSet`, lowest index first
pub struct CellSetIter {
    bits: u16,
}

impl Iterator for CellSetIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        debug_assert!(idx < TOTAL_CELLS);
        Some(Cell::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellSetIter {}
