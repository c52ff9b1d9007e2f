//! Moves, destination lists and move outcomes.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use super::piece::Piece;
use crate::board::error::MoveParseError;

/// A source/destination pair. Never stored by the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Cursor,
    pub to: Cursor,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Cursor, to: Cursor) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse coordinate notation such as `e2e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from = s[0..2].parse::<Cursor>().map_err(|_| invalid())?;
        let to = s[2..4].parse::<Cursor>().map_err(|_| invalid())?;
        Ok(Move { from, to })
    }
}

/// Result of [`Board::perform_move`](crate::board::Board::perform_move).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// The move was committed and the side to move flipped.
    Moved { captured: Option<Piece> },
    /// The source square holds no piece of the side to move.
    NotFriendly,
    /// The destination is not among the generated moves for the source.
    Illegal,
}

impl MoveOutcome {
    #[inline]
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        match self {
            MoveOutcome::Moved { captured } => captured,
            _ => None,
        }
    }
}

/// Upper bound on candidates any built-in rule produces (queen in the centre: 27).
///
/// Rules are only constructed inside the crate, so the bound holds for every
/// list the generator fills.
pub(crate) const MAX_DESTINATIONS: usize = 32;

/// Destination squares with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    cursors: [Cursor; MAX_DESTINATIONS],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            cursors: [Cursor(0, 0); MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, cursor: Cursor) {
        debug_assert!(self.len < MAX_DESTINATIONS, "move list full at {cursor}");
        self.cursors[self.len] = cursor;
        self.len += 1;
    }

    /// Keep only the cursors matching `keep`, preserving order.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(Cursor) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let cursor = self.cursors[read];
            if keep(cursor) {
                self.cursors[write] = cursor;
                write += 1;
            }
        }
        self.len = write;
    }

    pub(crate) fn extend_from(&mut self, other: &MoveList) {
        for &cursor in other {
            self.push(cursor);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Cursor] {
        &self.cursors[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cursor> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, cursor: Cursor) -> bool {
        self.as_slice().contains(&cursor)
    }

    /// Copy out the destinations in row-major order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Cursor> {
        let mut v = self.as_slice().to_vec();
        v.sort_unstable();
        v
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Cursor;
    type IntoIter = std::slice::Iter<'a, Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over cursors in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Cursor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let cursor = self.list.cursors[self.idx];
            self.idx += 1;
            Some(cursor)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Cursor;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}
