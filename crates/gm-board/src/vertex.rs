//! Vertex labels: `A1` is the bottom-left point, column `I` is skipped.

use crate::board::Coords;
use crate::error::VertexError;

/// Column letters in order. There is no `I`.
pub const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Largest coordinate + 1 that has a label.
pub const MAX_LABELLED: usize = COLUMN_LETTERS.len();

/// Label for a point, e.g. `(0, 0)` is `A1` and `(2, 8)` is `J3`.
pub fn format_vertex((row, col): Coords) -> Result<String, VertexError> {
    if row >= MAX_LABELLED || col >= MAX_LABELLED {
        return Err(VertexError::OutOfRange { row, col });
    }
    let letter = COLUMN_LETTERS.as_bytes()[col] as char;
    Ok(format!("{}{}", letter, row + 1))
}

/// Label for a point, or `(row, col)` when the point has no label.
pub fn describe_vertex(coords: Coords) -> String {
    format_vertex(coords).unwrap_or_else(|_| format!("({}, {})", coords.0, coords.1))
}

/// Parse a vertex label for a board of the given side.
///
/// Case-insensitive. `pass` gives `None`.
pub fn parse_vertex(vertex: &str, side: usize) -> Result<Option<Coords>, VertexError> {
    let s = vertex.trim().to_ascii_uppercase();
    if s == "PASS" {
        return Ok(None);
    }
    let mut chars = s.chars();
    let letter = chars
        .next()
        .ok_or_else(|| VertexError::Invalid(vertex.to_string()))?;
    let col = COLUMN_LETTERS
        .find(letter)
        .ok_or_else(|| VertexError::Invalid(vertex.to_string()))?;
    let number: usize = chars
        .as_str()
        .parse()
        .map_err(|_| VertexError::Invalid(vertex.to_string()))?;
    if number == 0 {
        return Err(VertexError::Invalid(vertex.to_string()));
    }
    let row = number - 1;
    if row >= side || col >= side {
        return Err(VertexError::OffBoard(vertex.to_string()));
    }
    Ok(Some((row, col)))
}
