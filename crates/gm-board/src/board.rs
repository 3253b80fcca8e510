//! Board positions and the read-only view consumed by the differ.

use core::fmt;

use strum::{Display, EnumIter, EnumString};

use crate::ascii;
use crate::error::{BoardError, RenderError};
use crate::vertex::MAX_LABELLED;

/// A `(row, col)` pair. Row 0 is the bottom of the board, column 0 the left.
pub type Coords = (usize, usize);

/// Stone colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Colour {
    #[strum(serialize = "b")]
    Black,
    #[strum(serialize = "w")]
    White,
}

impl Colour {
    /// The other colour.
    pub const fn opponent(self) -> Self {
        match self {
            Colour::Black => Colour::White,
            Colour::White => Colour::Black,
        }
    }
}

/// Read-only access to a square grid of occupants.
///
/// This is everything the board differ needs: the side length, the
/// coordinates in their native enumeration order, and a lookup. Implementors
/// must not change while a comparison is running.
pub trait BoardView {
    /// Occupant of a single point, including the empty sentinel.
    type Occupant: PartialEq + fmt::Debug;

    fn side(&self) -> usize;

    /// Every valid coordinate, in the order diagnostics should list them.
    ///
    /// Defaults to row-major order, row 0 first.
    fn board_coords(&self) -> impl Iterator<Item = Coords> {
        coords_for_side(self.side())
    }

    fn get(&self, row: usize, col: usize) -> Self::Occupant;

    /// Multi-line diagram of the position, used only for diagnostics.
    fn render(&self) -> Result<String, RenderError> {
        Err(RenderError::Unsupported)
    }
}

/// Row-major coordinates of a board with the given side.
pub fn coords_for_side(side: usize) -> impl Iterator<Item = Coords> {
    (0..side).flat_map(move |row| (0..side).map(move |col| (row, col)))
}

/// A square Go board. Empty points hold `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    cells: Vec<Option<Colour>>,
}

impl Board {
    /// Create an empty board. The side must be between 1 and 25.
    pub fn new(side: usize) -> Result<Self, BoardError> {
        if side == 0 || side > MAX_LABELLED {
            return Err(BoardError::InvalidSide(side));
        }
        Ok(Self {
            side,
            cells: vec![None; side * side],
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Occupant of a point.
    ///
    /// Panics if the point is off the board, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> Option<Colour> {
        assert!(
            row < self.side && col < self.side,
            "point ({row}, {col}) is off a board of side {}",
            self.side
        );
        self.cells[row * self.side + col]
    }

    /// Place a stone, or clear the point with `None`.
    pub fn set(&mut self, row: usize, col: usize, colour: Option<Colour>) -> Result<(), BoardError> {
        if row >= self.side || col >= self.side {
            return Err(BoardError::OffBoard {
                row,
                col,
                side: self.side,
            });
        }
        self.cells[row * self.side + col] = colour;
        Ok(())
    }

    /// True if no point is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Occupied points in enumeration order.
    pub fn list_occupied_points(&self) -> Vec<(Colour, Coords)> {
        coords_for_side(self.side)
            .filter_map(|(row, col)| self.get(row, col).map(|colour| (colour, (row, col))))
            .collect()
    }

    pub fn board_coords(&self) -> impl Iterator<Item = Coords> + use<> {
        coords_for_side(self.side)
    }
}

impl BoardView for Board {
    type Occupant = Option<Colour>;

    fn side(&self) -> usize {
        self.side
    }

    fn get(&self, row: usize, col: usize) -> Option<Colour> {
        Board::get(self, row, col)
    }

    fn render(&self) -> Result<String, RenderError> {
        ascii::render_board(self)
    }
}
