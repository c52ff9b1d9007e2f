use super::types::{Cursor, Move, MoveOutcome};
use super::Board;

impl Board {
    /// Move the piece on `src` to `dest` if the move is pseudo-legal.
    ///
    /// A rejected move leaves the board and the side to move untouched. A
    /// committed move overwrites whatever stood on `dest`, clears `src`, and
    /// hands the turn to the other side.
    pub fn perform_move(&mut self, src: Cursor, dest: Cursor) -> MoveOutcome {
        if !self.friend_at(src) {
            trace_board!(trace, "rejected {src}{dest}: no {} piece on {src}", self.side_to_move());
            return MoveOutcome::NotFriendly;
        }

        let legal = self
            .generate_move_list(src)
            .is_some_and(|moves| moves.contains(dest));
        if !legal {
            trace_board!(trace, "rejected {src}{dest}: destination not generated");
            return MoveOutcome::Illegal;
        }
        // generated destinations are always on the board
        let (Some((sr, sc)), Some((dr, dc))) = (src.indices(), dest.indices()) else {
            return MoveOutcome::Illegal;
        };

        let moving = self.grid.take(sr, sc);
        let captured = self.grid.set(dr, dc, moving);
        self.white_to_move = !self.white_to_move;

        trace_board!(
            debug,
            "committed {src}{dest}{}, {} to move",
            captured.map_or(String::new(), |p| format!(" x{p}")),
            self.side_to_move()
        );
        MoveOutcome::Moved { captured }
    }

    /// [`Board::perform_move`] for a [`Move`] value.
    pub fn play(&mut self, mv: Move) -> MoveOutcome {
        self.perform_move(mv.from, mv.to)
    }
}
