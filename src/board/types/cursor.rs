//! Cursor and delta types.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CursorError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A (row, column) coordinate. Row 0 is black's back rank, row 7 is white's.
///
/// Cursors may point off the board; that is how move generation detects the
/// edge. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cursor(pub i8, pub i8); // (row, col)

impl Cursor {
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Cursor(row, col)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.1
    }

    /// Returns true if both components lie in `[0, 8)`
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 >= 0 && self.0 < BOARD_SIZE as i8 && self.1 >= 0 && self.1 < BOARD_SIZE as i8
    }

    /// Grid indices for an on-board cursor.
    #[inline]
    #[must_use]
    pub const fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.0 as usize, self.1 as usize))
        } else {
            None
        }
    }

    /// Step by `delta`. Wraps instead of overflowing; a wrapped cursor is
    /// always off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: Delta) -> Self {
        Cursor(self.0.wrapping_add(delta.0), self.1.wrapping_add(delta.1))
    }
}

impl Add<Delta> for Cursor {
    type Output = Cursor;

    #[inline]
    fn add(self, delta: Delta) -> Cursor {
        self.offset(delta)
    }
}

/// Algebraic notation for on-board cursors (row 7 is rank 1), raw pair otherwise.
impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{}{}",
                (self.1 as u8 + b'a') as char,
                BOARD_SIZE as i8 - self.0
            )
        } else {
            write!(f, "({},{})", self.0, self.1)
        }
    }
}

impl TryFrom<(usize, usize)> for Cursor {
    type Error = CursorError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(CursorError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(CursorError::ColumnOutOfBounds { col });
        }
        Ok(Cursor(row as i8, col as i8))
    }
}

impl FromStr for Cursor {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CursorError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as i8,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => BOARD_SIZE as i8 - (bytes[1] - b'0') as i8,
            _ => return Err(invalid()),
        };

        Ok(Cursor(row, col))
    }
}

/// A step added to a cursor; sliding pieces repeat it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delta(pub i8, pub i8); // (row, col)

impl Delta {
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Delta(row, col)
    }

    /// Half of this delta, rounding toward zero. For a pawn double step this
    /// is the square passed over.
    #[inline]
    #[must_use]
    pub const fn halved(self) -> Self {
        Delta(self.0 / 2, self.1 / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_add_delta() {
        assert_eq!(Cursor(4, 4) + Delta(-1, 2), Cursor(3, 6));
        assert_eq!(Cursor(0, 0) + Delta(-1, -1), Cursor(-1, -1));
    }

    #[test]
    fn test_offset_wraps_off_the_board() {
        let wrapped = Cursor(i8::MAX, 0) + Delta(1, 0);
        assert_eq!(wrapped, Cursor(i8::MIN, 0));
        assert!(!wrapped.is_on_board());
        assert!(!(Cursor(i8::MIN, i8::MIN) + Delta(-2, -1)).is_on_board());
    }

    #[test]
    fn test_on_board() {
        assert!(Cursor(0, 0).is_on_board());
        assert!(Cursor(7, 7).is_on_board());
        assert!(!Cursor(8, 0).is_on_board());
        assert!(!Cursor(0, -1).is_on_board());
        assert_eq!(Cursor(-1, 3).indices(), None);
        assert_eq!(Cursor(2, 5).indices(), Some((2, 5)));
    }

    #[test]
    fn test_display_algebraic() {
        assert_eq!(Cursor(7, 0).to_string(), "a1");
        assert_eq!(Cursor(6, 4).to_string(), "e2");
        assert_eq!(Cursor(0, 7).to_string(), "h8");
        assert_eq!(Cursor(-1, 9).to_string(), "(-1,9)");
    }

    #[test]
    fn test_parse_algebraic() {
        assert_eq!("e2".parse::<Cursor>(), Ok(Cursor(6, 4)));
        assert_eq!("a8".parse::<Cursor>(), Ok(Cursor(0, 0)));
        assert!("i1".parse::<Cursor>().is_err());
        assert!("a9".parse::<Cursor>().is_err());
        assert!("e".parse::<Cursor>().is_err());
    }

    #[test]
    fn test_try_from_pair() {
        assert_eq!(Cursor::try_from((3, 4)), Ok(Cursor(3, 4)));
        assert_eq!(
            Cursor::try_from((8, 0)),
            Err(CursorError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Cursor::try_from((0, 11)),
            Err(CursorError::ColumnOutOfBounds { col: 11 })
        );
    }

    #[test]
    fn test_halved_delta() {
        assert_eq!(Delta(-2, 0).halved(), Delta(-1, 0));
        assert_eq!(Delta(2, 0).halved(), Delta(1, 0));
    }

    #[test]
    fn test_row_major_order() {
        let mut cursors = vec![Cursor(3, 1), Cursor(1, 7), Cursor(1, 2)];
        cursors.sort();
        assert_eq!(cursors, vec![Cursor(1, 2), Cursor(1, 7), Cursor(3, 1)]);
    }
}
