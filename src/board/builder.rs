//! Fluent builder for constructing positions.
//!
//! # Example
//! ```
//! use chess_movegen::board::{BoardBuilder, Color, Cursor, Piece, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece(Cursor(7, 4), Piece::new(PieceKind::King, Color::White))
//!     .piece(Cursor(0, 4), Piece::new(PieceKind::King, Color::Black))
//!     .side_to_move(Color::Black)
//!     .build();
//! assert!(!board.white_to_move());
//! ```

use super::{Board, Color, Cursor, MoveRules, Piece};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Cursor, Piece)>,
    side_to_move: Color,
    rules: MoveRules,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder, White to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            rules: MoveRules::default(),
        }
    }

    /// Create a builder starting from the standard opening layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::starting_position().pieces().collect();
        builder
    }

    /// Place a piece, replacing anything already on that square.
    ///
    /// # Panics
    ///
    /// `build` panics if `cursor` is off the board.
    #[must_use]
    pub fn piece(mut self, cursor: Cursor, piece: Piece) -> Self {
        self.pieces.retain(|(c, _)| *c != cursor);
        self.pieces.push((cursor, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, cursor: Cursor) -> Self {
        self.pieces.retain(|(c, _)| *c != cursor);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn rules(mut self, rules: MoveRules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::with_rules(self.rules);
        for (cursor, piece) in self.pieces {
            let Some((row, col)) = cursor.indices() else {
                panic!("piece placed off the board at {cursor}");
            };
            board.grid.set(row, col, Some(piece));
        }
        board.white_to_move = self.side_to_move.is_white();
        board
    }
}
