//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move lists for each piece kind
//! - `make_move.rs` - `perform_move` acceptance, rejection and turn handling
//! - `edge_cases.rs` - Blockers, board edges and rule configuration
//! - `proptest.rs` - Property-based tests
//! - `logging.rs` - Log records, built with `--features logging`

mod movegen;

use crate::board::{Board, Cursor};

/// Sorted destinations for the piece on `(row, col)`.
pub(super) fn moves_at(board: &Board, row: i8, col: i8) -> Vec<Cursor> {
    board
        .generate_move_list(Cursor(row, col))
        .map(|list| list.sorted())
        .unwrap_or_default()
}

/// Sorted cursors from `(row, col)` pairs.
pub(super) fn cursors(pairs: &[(i8, i8)]) -> Vec<Cursor> {
    let mut v: Vec<Cursor> = pairs.iter().map(|&(r, c)| Cursor(r, c)).collect();
    v.sort_unstable();
    v
}
