//! Movement primitives.
//!
//! A [`MoveRule`] pairs one [`Movement`] strategy with a delta table. Each
//! strategy maps every delta to candidate squares, then keeps the candidates
//! that pass its filter. Pieces are built from one or more rules in
//! [`pieces`].

pub(crate) mod deltas;
mod pieces;

use super::config::DoubleStepRule;
use super::query::BoardQuery;
use super::types::{Color, Cursor, Delta, MoveList};

/// How far a piece travels along each delta and what it may land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Slide until blocked; land on empty squares or capture the blocker.
    ClearPath,
    /// One step; land on an empty square or capture.
    Simple,
    /// One step onto an empty square only.
    SimpleNoCapture,
    /// Pawn double step from its start row, onto an empty square.
    PawnExtra,
    /// One step onto an enemy-occupied square only.
    PawnDiagonalAttack,
}

impl Movement {
    fn candidates<Q: BoardQuery + ?Sized>(
        self,
        from: Cursor,
        delta: Delta,
        board: &Q,
        out: &mut MoveList,
    ) {
        match self {
            Movement::ClearPath => {
                let mut dest = from + delta;
                while !board.out_of_bounds(dest) && board.empty_at(dest) {
                    out.push(dest);
                    dest = dest + delta;
                }
                if !board.out_of_bounds(dest) && board.enemy_at(dest) {
                    out.push(dest);
                }
            }
            Movement::PawnExtra => {
                if !on_pawn_start_row(from, board) {
                    return;
                }
                if board.double_step_rule() == DoubleStepRule::ClearPath {
                    let passed = from + delta.halved();
                    if board.out_of_bounds(passed) || !board.empty_at(passed) {
                        return;
                    }
                }
                out.push(from + delta);
            }
            Movement::Simple | Movement::SimpleNoCapture | Movement::PawnDiagonalAttack => {
                out.push(from + delta);
            }
        }
    }

    fn accepts<Q: BoardQuery + ?Sized>(self, dest: Cursor, board: &Q) -> bool {
        if board.out_of_bounds(dest) {
            return false;
        }
        match self {
            Movement::ClearPath | Movement::Simple => board.empty_at(dest) || board.enemy_at(dest),
            Movement::SimpleNoCapture | Movement::PawnExtra => board.empty_at(dest),
            Movement::PawnDiagonalAttack => board.enemy_at(dest),
        }
    }
}

/// White on row 6 or black on row 1.
fn on_pawn_start_row<Q: BoardQuery + ?Sized>(from: Cursor, board: &Q) -> bool {
    let color = Color::from_is_white(board.is_white(from));
    from.row() == color.pawn_start_row()
}

/// A movement strategy bound to the deltas it walks.
///
/// Only the built-in tables exist; read them through
/// [`PieceKind::move_rules`](crate::board::PieceKind::move_rules).
///
/// ```compile_fail
/// use chess_movegen::board::{Delta, MoveRule, Movement};
///
/// let rule = MoveRule::new(Movement::Simple, &[Delta(1, 0)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRule {
    pub(crate) movement: Movement,
    pub(crate) deltas: &'static [Delta],
}

impl MoveRule {
    /// Callers keep every candidate set within the capacity of a
    /// [`MoveList`]: ClearPath deltas are distinct and non-zero.
    #[must_use]
    pub(crate) const fn new(movement: Movement, deltas: &'static [Delta]) -> Self {
        MoveRule { movement, deltas }
    }

    #[inline]
    #[must_use]
    pub const fn movement(&self) -> Movement {
        self.movement
    }

    #[inline]
    #[must_use]
    pub const fn deltas(&self) -> &'static [Delta] {
        self.deltas
    }

    #[must_use]
    pub fn generate<Q: BoardQuery + ?Sized>(&self, from: Cursor, board: &Q) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_into(from, board, &mut moves);
        moves
    }

    /// Append this rule's destinations from `from` to `out`.
    pub fn generate_into<Q: BoardQuery + ?Sized>(&self, from: Cursor, board: &Q, out: &mut MoveList) {
        let mut candidates = MoveList::new();
        for &delta in self.deltas {
            self.movement.candidates(from, delta, board, &mut candidates);
        }
        candidates.retain(|dest| self.movement.accepts(dest, board));
        out.extend_from(&candidates);
    }
}
