//! Piece shape tables.

use crate::board::types::{Color, Delta};

pub(crate) const ROOK_DELTAS: [Delta; 4] = [Delta(1, 0), Delta(-1, 0), Delta(0, 1), Delta(0, -1)];

pub(crate) const BISHOP_DELTAS: [Delta; 4] =
    [Delta(1, 1), Delta(1, -1), Delta(-1, 1), Delta(-1, -1)];

pub(crate) const QUEEN_DELTAS: [Delta; 8] = [
    Delta(1, 0),
    Delta(-1, 0),
    Delta(0, 1),
    Delta(0, -1),
    Delta(1, 1),
    Delta(1, -1),
    Delta(-1, 1),
    Delta(-1, -1),
];

// Same shape as the queen, one step at a time.
pub(crate) const KING_DELTAS: [Delta; 8] = QUEEN_DELTAS;

pub(crate) const KNIGHT_DELTAS: [Delta; 8] = [
    Delta(-2, -1),
    Delta(-2, 1),
    Delta(-1, -2),
    Delta(-1, 2),
    Delta(1, -2),
    Delta(1, 2),
    Delta(2, -1),
    Delta(2, 1),
];

const WHITE: i8 = Color::White.forward();
const BLACK: i8 = Color::Black.forward();

pub(crate) const WHITE_PAWN_STEP: [Delta; 1] = [Delta(WHITE, 0)];
pub(crate) const WHITE_PAWN_CAPTURES: [Delta; 2] = [Delta(WHITE, -1), Delta(WHITE, 1)];
pub(crate) const WHITE_PAWN_DOUBLE_STEP: [Delta; 1] = [Delta(2 * WHITE, 0)];

pub(crate) const BLACK_PAWN_STEP: [Delta; 1] = [Delta(BLACK, 0)];
pub(crate) const BLACK_PAWN_CAPTURES: [Delta; 2] = [Delta(BLACK, -1), Delta(BLACK, 1)];
pub(crate) const BLACK_PAWN_DOUBLE_STEP: [Delta; 1] = [Delta(2 * BLACK, 0)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        for d in ROOK_DELTAS.iter().chain(BISHOP_DELTAS.iter()) {
            assert!(QUEEN_DELTAS.contains(d));
        }
        assert_eq!(QUEEN_DELTAS.len(), ROOK_DELTAS.len() + BISHOP_DELTAS.len());
    }

    #[test]
    fn test_pawn_tables_do_not_overlap() {
        for d in WHITE_PAWN_STEP.iter().chain(WHITE_PAWN_DOUBLE_STEP.iter()) {
            assert!(!WHITE_PAWN_CAPTURES.contains(d));
        }
        assert_ne!(WHITE_PAWN_STEP[0], WHITE_PAWN_DOUBLE_STEP[0]);
        assert_eq!(BLACK_PAWN_STEP[0], Delta(1, 0));
        assert_eq!(BLACK_PAWN_DOUBLE_STEP[0], Delta(2, 0));
    }
}
