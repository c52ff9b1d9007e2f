//! Rule configuration carried by a board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a pawn's double step treats the square it passes over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DoubleStepRule {
    /// Only the landing square must be empty; the pawn may pass over a piece.
    #[default]
    DestinationOnly,
    /// The passed-over square must be empty too, as in standard chess.
    ClearPath,
}

/// Per-board rule switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRules {
    pub double_step: DoubleStepRule,
}

impl MoveRules {
    /// Standard chess: pawns cannot jump on their double step.
    #[must_use]
    pub const fn standard() -> Self {
        MoveRules {
            double_step: DoubleStepRule::ClearPath,
        }
    }

    #[must_use]
    pub const fn with_double_step(mut self, rule: DoubleStepRule) -> Self {
        self.double_step = rule;
        self
    }
}
