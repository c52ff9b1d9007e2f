//! Error types for board operations.

use std::fmt;

/// Error type for cursor construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            CursorError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            CursorError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CursorError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Unrecognized piece factory code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCodeError {
    pub code: String,
}

impl fmt::Display for PieceCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown piece code '{}' (expected R, N, B, Q, K, PW or PB)",
            self.code
        )
    }
}

impl std::error::Error for PieceCodeError {}
