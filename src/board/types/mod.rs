//! Core types.
//!
//! - `Cursor` and `Delta` - board coordinates and the offsets added to them
//! - `Piece`, `PieceKind` and `Color`
//! - `Move`, `MoveList` and `MoveOutcome`

mod cursor;
mod moves;
mod piece;

pub use cursor::{Cursor, Delta, BOARD_SIZE};
pub use moves::{Move, MoveList, MoveListIntoIter, MoveOutcome};
#[cfg(test)]
pub(crate) use moves::MAX_DESTINATIONS;
pub use piece::{create_piece, Color, Piece, PieceKind};
