//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//! ```

pub use super::{
    create_piece, Board, BoardBuilder, BoardQuery, Color, Cursor, Delta, Move, MoveList,
    MoveOutcome, MoveRules, Piece, PieceKind,
};
