//! Chess board representation and pseudo-legal move generation.
//!
//! Pieces are described by delta tables bound to a handful of movement
//! primitives. The board answers occupancy queries for those primitives and
//! commits moves that appear in a piece's generated list. King safety is not
//! considered anywhere.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Board, Cursor};
//!
//! let mut board = Board::starting_position();
//! let moves = board.generate_move_list(Cursor(6, 4)).unwrap();
//! assert_eq!(moves.sorted(), vec![Cursor(4, 4), Cursor(5, 4)]);
//!
//! assert!(board.perform_move(Cursor(6, 4), Cursor(4, 4)).is_moved());
//! assert!(!board.white_to_move());
//! ```

mod builder;
mod config;
mod display;
mod error;
mod grid;
mod make_move;
mod movegen;
pub mod prelude;
mod query;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use config::{DoubleStepRule, MoveRules};
pub use error::{CursorError, MoveParseError, PieceCodeError};
pub use grid::Grid;
pub use movegen::{MoveRule, Movement};
pub use query::BoardQuery;
pub use state::Board;
pub use types::{
    create_piece, Color, Cursor, Delta, Move, MoveList, MoveListIntoIter, MoveOutcome, Piece,
    PieceKind, BOARD_SIZE,
};
