//! Fixed 8x8 storage.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::BOARD_SIZE;

/// An 8x8 grid of optional values addressed by (row, col).
///
/// Indices outside `0..8` panic. Bounds as a chess rule are answered by
/// [`BoardQuery::out_of_bounds`](super::BoardQuery::out_of_bounds), never here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid<T> {
    cells: [[Option<T>; BOARD_SIZE]; BOARD_SIZE],
}

impl<T: Copy> Grid<T> {
    #[must_use]
    pub fn new() -> Self {
        Grid {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.cells[row][col]
    }

    /// Store `value` and return the previous occupant.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.cells[row][col], value)
    }

    #[inline]
    pub fn take(&mut self, row: usize, col: usize) -> Option<T> {
        self.cells[row][col].take()
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<T>; BOARD_SIZE] {
        &self.cells[row]
    }

    pub fn set_row(&mut self, row: usize, values: [Option<T>; BOARD_SIZE]) {
        self.cells[row] = values;
    }

    /// Occupied cells as `(row, col, value)`, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|v| (r, c, v)))
        })
    }
}

impl<T: Copy> Default for Grid<T> {
    fn default() -> Self {
        Grid::new()
    }
}
