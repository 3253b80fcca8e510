//! Error types for board construction, vertex naming and diagrams.

use thiserror::Error;

/// Errors raised by [`Board`](crate::Board) construction and mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board side: {0}")]
    InvalidSide(usize),

    #[error("point ({row}, {col}) is off a board of side {side}")]
    OffBoard { row: usize, col: usize, side: usize },
}

/// Errors raised when converting between coordinates and vertex labels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VertexError {
    #[error("vertex ({row}, {col}) has no label")]
    OutOfRange { row: usize, col: usize },

    #[error("invalid vertex: '{0}'")]
    Invalid(String),

    #[error("vertex is off board: '{0}'")]
    OffBoard(String),
}

/// Errors raised while rendering a board for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("board rendering is not supported")]
    Unsupported,

    #[error("board of side {side} is too large to render")]
    TooLarge { side: usize },

    #[error("rendering failed: {0}")]
    Failed(String),
}

/// Errors raised by [`interpret_diagram`](crate::interpret_diagram).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("invalid diagram: {0}")]
    Invalid(String),
}
