//! gm-board: Go board positions for the gomill test-support layer
//!
//! The comparison and harness crates only consume boards through the
//! [`BoardView`] trait. This crate supplies that trait, a concrete square
//! [`Board`], the vertex naming convention used in diagnostics, and the
//! ASCII diagram format used to render and build positions.
//!
//! No game rules live here: there is no move legality, capture or scoring.

pub mod ascii;
pub mod board;
pub mod error;
pub mod vertex;

// Re-export commonly used items
pub use ascii::{interpret_diagram, render_board};
pub use board::{Board, BoardView, Colour, Coords};
pub use error::{BoardError, DiagramError, RenderError, VertexError};
pub use vertex::{describe_vertex, format_vertex, parse_vertex};
