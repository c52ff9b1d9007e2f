//! Piece kinds bound to their movement rules.

use super::deltas::{
    BISHOP_DELTAS, BLACK_PAWN_CAPTURES, BLACK_PAWN_DOUBLE_STEP, BLACK_PAWN_STEP, KING_DELTAS,
    KNIGHT_DELTAS, QUEEN_DELTAS, ROOK_DELTAS, WHITE_PAWN_CAPTURES, WHITE_PAWN_DOUBLE_STEP,
    WHITE_PAWN_STEP,
};
use super::{MoveRule, Movement};
use crate::board::query::BoardQuery;
use crate::board::types::{Color, Cursor, MoveList, Piece, PieceKind};

static ROOK_RULES: [MoveRule; 1] = [MoveRule::new(Movement::ClearPath, &ROOK_DELTAS)];
static BISHOP_RULES: [MoveRule; 1] = [MoveRule::new(Movement::ClearPath, &BISHOP_DELTAS)];
static QUEEN_RULES: [MoveRule; 1] = [MoveRule::new(Movement::ClearPath, &QUEEN_DELTAS)];
static KING_RULES: [MoveRule; 1] = [MoveRule::new(Movement::Simple, &KING_DELTAS)];
static KNIGHT_RULES: [MoveRule; 1] = [MoveRule::new(Movement::Simple, &KNIGHT_DELTAS)];

// Forward steps, diagonal captures, then the double step.
static WHITE_PAWN_RULES: [MoveRule; 3] = [
    MoveRule::new(Movement::SimpleNoCapture, &WHITE_PAWN_STEP),
    MoveRule::new(Movement::PawnDiagonalAttack, &WHITE_PAWN_CAPTURES),
    MoveRule::new(Movement::PawnExtra, &WHITE_PAWN_DOUBLE_STEP),
];
static BLACK_PAWN_RULES: [MoveRule; 3] = [
    MoveRule::new(Movement::SimpleNoCapture, &BLACK_PAWN_STEP),
    MoveRule::new(Movement::PawnDiagonalAttack, &BLACK_PAWN_CAPTURES),
    MoveRule::new(Movement::PawnExtra, &BLACK_PAWN_DOUBLE_STEP),
];

impl PieceKind {
    /// The rules whose destinations make up this kind's moves.
    #[must_use]
    pub fn move_rules(self, color: Color) -> &'static [MoveRule] {
        match (self, color) {
            (PieceKind::Rook, _) => &ROOK_RULES,
            (PieceKind::Bishop, _) => &BISHOP_RULES,
            (PieceKind::Queen, _) => &QUEEN_RULES,
            (PieceKind::King, _) => &KING_RULES,
            (PieceKind::Knight, _) => &KNIGHT_RULES,
            (PieceKind::Pawn, Color::White) => &WHITE_PAWN_RULES,
            (PieceKind::Pawn, Color::Black) => &BLACK_PAWN_RULES,
        }
    }
}

impl Piece {
    /// Pseudo-legal destinations for this piece standing on `from`.
    #[must_use]
    pub fn generate_moves<Q: BoardQuery + ?Sized>(&self, from: Cursor, board: &Q) -> MoveList {
        let mut moves = MoveList::new();
        for rule in self.kind.move_rules(self.color) {
            rule.generate_into(from, board, &mut moves);
        }
        moves
    }
}
