use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::{DoubleStepRule, MoveRules};
use super::grid::Grid;
use super::query::BoardQuery;
use super::types::{Color, Cursor, Move, MoveList, Piece, PieceKind, BOARD_SIZE};

const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard opening layout: black on rows 0-1, white on rows 6-7.
static STARTING_GRID: Lazy<Grid<Piece>> = Lazy::new(|| {
    let mut grid = Grid::new();
    for color in Color::BOTH {
        let back = color.back_row();
        let pawns = color.pawn_start_row() as usize;
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            grid.set(back, col, Some(Piece::new(kind, color)));
            grid.set(pawns, col, Some(Piece::new(PieceKind::Pawn, color)));
        }
    }
    grid
});

/// An 8x8 board, the side to move, and the rules its pieces follow.
///
/// The board is the single owner of its pieces. Queries borrow it
/// immutably; only [`Board::perform_move`] flips the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) grid: Grid<Piece>,
    pub(crate) white_to_move: bool,
    pub(crate) rules: MoveRules,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// An empty board with White to move.
    #[must_use]
    pub fn new() -> Self {
        Board::with_rules(MoveRules::default())
    }

    #[must_use]
    pub fn with_rules(rules: MoveRules) -> Self {
        Board {
            grid: Grid::new(),
            white_to_move: true,
            rules,
        }
    }

    /// A fresh board holding the standard opening layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::new();
        board.set_up_default_board();
        board
    }

    /// Place the 16 pieces of each side on rows 0-1 and 6-7.
    ///
    /// Only those four rows are overwritten; rows 2-5 and the side to move
    /// are left as they are.
    pub fn set_up_default_board(&mut self) {
        for color in Color::BOTH {
            for row in [color.back_row(), color.pawn_start_row() as usize] {
                self.grid.set_row(row, *STARTING_GRID.row(row));
            }
        }
        trace_board!(debug, "default layout placed, {} to move", self.side_to_move());
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        Color::from_is_white(self.white_to_move)
    }

    #[inline]
    #[must_use]
    pub fn rules(&self) -> MoveRules {
        self.rules
    }

    /// Raw grid read. Panics if `row` or `col` is not in `0..8`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.grid.get(row, col)
    }

    /// Raw grid write, returning the previous occupant. Panics if `row` or
    /// `col` is not in `0..8`. Does not touch the side to move.
    pub fn set(&mut self, row: usize, col: usize, piece: Option<Piece>) -> Option<Piece> {
        self.grid.set(row, col, piece)
    }

    /// The piece on `cursor`, or `None` for an empty or off-board square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, cursor: Cursor) -> Option<Piece> {
        let (row, col) = cursor.indices()?;
        self.grid.get(row, col)
    }

    /// Every piece with its square, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Cursor, Piece)> + '_ {
        self.grid
            .iter()
            .map(|(r, c, piece)| (Cursor(r as i8, c as i8), piece))
    }

    // Off-board squares count as unoccupied in every occupancy query below.

    #[inline]
    #[must_use]
    pub fn out_of_bounds(&self, cursor: Cursor) -> bool {
        !cursor.is_on_board()
    }

    #[inline]
    #[must_use]
    pub fn empty_at(&self, cursor: Cursor) -> bool {
        self.piece_at(cursor).is_none()
    }

    #[inline]
    #[must_use]
    pub fn friend_at(&self, cursor: Cursor) -> bool {
        self.piece_at(cursor)
            .is_some_and(|p| p.is_white() == self.white_to_move)
    }

    #[inline]
    #[must_use]
    pub fn enemy_at(&self, cursor: Cursor) -> bool {
        self.piece_at(cursor)
            .is_some_and(|p| p.is_white() != self.white_to_move)
    }

    #[inline]
    #[must_use]
    pub fn is_white(&self, cursor: Cursor) -> bool {
        self.piece_at(cursor).is_some_and(Piece::is_white)
    }

    /// Destinations for the piece on `cursor`, or `None` if there is none.
    ///
    /// Works for either color; friend and enemy are still judged against the
    /// side to move.
    #[must_use]
    pub fn generate_move_list(&self, cursor: Cursor) -> Option<MoveList> {
        let piece = self.piece_at(cursor)?;
        Some(piece.generate_moves(cursor, self))
    }

    /// All pseudo-legal moves for the side to move, sources in row-major order.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, piece) in self.pieces() {
            if piece.is_white() != self.white_to_move {
                continue;
            }
            for to in piece.generate_moves(from, self) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }
}

impl BoardQuery for Board {
    fn out_of_bounds(&self, cursor: Cursor) -> bool {
        Board::out_of_bounds(self, cursor)
    }

    fn empty_at(&self, cursor: Cursor) -> bool {
        Board::empty_at(self, cursor)
    }

    fn friend_at(&self, cursor: Cursor) -> bool {
        Board::friend_at(self, cursor)
    }

    fn enemy_at(&self, cursor: Cursor) -> bool {
        Board::enemy_at(self, cursor)
    }

    fn is_white(&self, cursor: Cursor) -> bool {
        Board::is_white(self, cursor)
    }

    fn double_step_rule(&self) -> DoubleStepRule {
        self.rules.double_step
    }
}
