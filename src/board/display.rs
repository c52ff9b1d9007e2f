use std::fmt;

use super::types::BOARD_SIZE;
use super::Board;

/// ASCII diagram with row 0 on top, uppercase for White, `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} |", BOARD_SIZE - row)?;
            for cell in self.grid.row(row) {
                let ch = cell.map_or('.', |p| p.to_fen_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f, "\n  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move())
    }
}
