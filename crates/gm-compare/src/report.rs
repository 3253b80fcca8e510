//! Mismatch reports produced by the board differ.

use core::fmt;

use gm_board::{BoardView, Coords, RenderError, describe_vertex};
use thiserror::Error;

/// Why two boards compared unequal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardMismatch {
    /// Sides differ; no point was compared.
    #[error("size is different: {first}, {second}")]
    SizeMismatch { first: usize, second: usize },

    /// Same side, at least one point differs.
    #[error("{0}")]
    CellMismatch(MismatchReport),
}

/// Diagrams of both boards, when they could be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    Available { first: String, second: String },
    Unavailable,
}

impl Rendering {
    /// Render both boards. Any failure gives [`Rendering::Unavailable`].
    pub fn attempt<B, F>(b1: &B, b2: &B, render: F) -> Self
    where
        B: BoardView + ?Sized,
        F: Fn(&B) -> Result<String, RenderError>,
    {
        match (render(b1), render(b2)) {
            (Ok(first), Ok(second)) => Rendering::Available { first, second },
            (Err(e), _) | (_, Err(e)) => {
                tracing::trace!(error = %e, "board rendering unavailable for mismatch report");
                Rendering::Unavailable
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Rendering::Available { .. })
    }
}

/// Points where two same-sized boards differ, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchReport {
    pub differences: Vec<Coords>,
    pub rendering: Rendering,
}

impl MismatchReport {
    /// The differing points as vertex labels, space separated.
    pub fn vertex_list(&self) -> String {
        self.differences
            .iter()
            .map(|&coords| describe_vertex(coords))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boards differ at {}", self.vertex_list())?;
        if let Rendering::Available { first, second } = &self.rendering {
            write!(f, "\n{first}\n{second}")?;
        }
        Ok(())
    }
}
