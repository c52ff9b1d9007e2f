//! Piece, kind and color types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PieceCodeError;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Resolve a factory code (`R`, `B`, `K`, `Q`, `N`, `PW`, `PB`).
    ///
    /// Both pawn codes yield [`PieceKind::Pawn`]; the color is chosen
    /// separately when the piece is created.
    pub fn from_code(code: &str) -> Result<PieceKind, PieceCodeError> {
        match code {
            "R" => Ok(PieceKind::Rook),
            "B" => Ok(PieceKind::Bishop),
            "K" => Ok(PieceKind::King),
            "Q" => Ok(PieceKind::Queen),
            "N" => Ok(PieceKind::Knight),
            "PW" | "PB" => Ok(PieceKind::Pawn),
            _ => Err(PieceCodeError {
                code: code.to_string(),
            }),
        }
    }

    /// Convert kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Returns true if this kind slides until blocked (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl FromStr for PieceKind {
    type Err = PieceCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::from_code(s)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn from_is_white(is_white: bool) -> Color {
        if is_white {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color advances by (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's back rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row pawns of this color start on (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A colored piece. Immutable once created; the board stores it by value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { color, kind }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        self.color.is_white()
    }

    /// FEN letter, uppercase for White
    #[inline]
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        if self.is_white() {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

/// Build a piece from a factory code and a color flag.
///
/// # Panics
///
/// Panics on an unknown code. Codes are fixed by the caller's source, so a
/// bad one is a programmer error; use [`PieceKind::from_code`] to check first.
#[must_use]
pub fn create_piece(code: &str, is_white: bool) -> Piece {
    match PieceKind::from_code(code) {
        Ok(kind) => Piece::new(kind, Color::from_is_white(is_white)),
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_codes() {
        assert_eq!(create_piece("R", true), Piece::new(PieceKind::Rook, Color::White));
        assert_eq!(create_piece("N", false), Piece::new(PieceKind::Knight, Color::Black));
        assert_eq!(create_piece("B", true).kind, PieceKind::Bishop);
        assert_eq!(create_piece("Q", true).kind, PieceKind::Queen);
        assert_eq!(create_piece("K", false).kind, PieceKind::King);
    }

    #[test]
    fn test_pawn_codes_share_a_kind() {
        assert_eq!(create_piece("PW", true).kind, PieceKind::Pawn);
        assert_eq!(create_piece("PB", false).kind, PieceKind::Pawn);
        // color comes from the flag, not the code
        assert!(create_piece("PB", true).is_white());
    }

    #[test]
    #[should_panic(expected = "unknown piece code")]
    fn test_unknown_code_panics() {
        let _ = create_piece("X", true);
    }

    #[test]
    fn test_from_code_error() {
        let err = PieceKind::from_code("pw").unwrap_err();
        assert_eq!(err.code, "pw");
        assert_eq!("N".parse::<PieceKind>(), Ok(PieceKind::Knight));
    }

    #[test]
    fn test_fen_char() {
        assert_eq!(create_piece("Q", true).to_fen_char(), 'Q');
        assert_eq!(create_piece("N", false).to_string(), "n");
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.pawn_start_row(), 1);
        assert_eq!(Color::from_is_white(false), Color::Black);
    }
}
