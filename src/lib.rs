/// Log through the `log` crate when the `logging` feature is on; compiles
/// to nothing otherwise.
macro_rules! trace_board {
    (debug, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
    };
    (trace, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)+);
    };
}

pub mod board;

pub use board::{create_piece, Board, Color, Cursor, Move, MoveOutcome, Piece, PieceKind};
