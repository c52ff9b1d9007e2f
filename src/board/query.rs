//! Board queries consulted by move generation.

use super::config::DoubleStepRule;
use super::types::Cursor;

/// Read-only occupancy questions a movement primitive may ask.
///
/// Friend and enemy are judged against the side to move, not against the
/// piece being generated for. Implementors must answer `out_of_bounds` for
/// any cursor; the other queries are only asked about on-board cursors.
pub trait BoardQuery {
    fn out_of_bounds(&self, cursor: Cursor) -> bool;

    fn empty_at(&self, cursor: Cursor) -> bool;

    fn friend_at(&self, cursor: Cursor) -> bool;

    /// An empty square is never an enemy.
    fn enemy_at(&self, cursor: Cursor) -> bool;

    /// True if the occupying piece is white. Only pawn start-rank logic uses this.
    fn is_white(&self, cursor: Cursor) -> bool;

    fn double_step_rule(&self) -> DoubleStepRule {
        DoubleStepRule::default()
    }
}
