//! ASCII board diagrams.
//!
//! ```text
//! 3  .  .  .
//! 2  .  #  .
//! 1  o  .  .
//!    A  B  C
//! ```
//!
//! Black is `#`, white is `o`, empty is `.`. The top row comes first.

use crate::board::{Board, BoardView, Colour};
use crate::error::{DiagramError, RenderError};
use crate::vertex::{COLUMN_LETTERS, MAX_LABELLED, describe_vertex};

fn point_string(occupant: Option<Colour>) -> &'static str {
    match occupant {
        None => " .",
        Some(Colour::Black) => " #",
        Some(Colour::White) => " o",
    }
}

/// Render a board as a diagram.
///
/// Fails for boards too large to have column letters.
pub fn render_board<B>(board: &B) -> Result<String, RenderError>
where
    B: BoardView<Occupant = Option<Colour>> + ?Sized,
{
    let side = board.side();
    if side > MAX_LABELLED {
        return Err(RenderError::TooLarge { side });
    }
    let padding = if side > 9 { " " } else { "" };
    let mut lines = Vec::with_capacity(side + 1);
    for row in (0..side).rev() {
        let points: Vec<&str> = (0..side)
            .map(|col| point_string(board.get(row, col)))
            .collect();
        let label = if side > 9 {
            format!("{:>2} ", row + 1)
        } else {
            format!("{} ", row + 1)
        };
        lines.push(format!("{}{}", label, points.join(" ")));
    }
    let header: Vec<String> = COLUMN_LETTERS
        .chars()
        .take(side)
        .map(String::from)
        .collect();
    lines.push(format!("{}   {}", padding, header.join("  ")));
    Ok(lines.join("\n"))
}

/// Build a board from a diagram in the [`render_board`] format.
///
/// A single leading and trailing blank line are ignored, so diagrams can be
/// written as multi-line string literals.
pub fn interpret_diagram(diagram: &str, side: usize) -> Result<Board, DiagramError> {
    let mut board = Board::new(side)?;
    let mut lines: Vec<&str> = diagram.split('\n').collect();
    if lines.first().is_some_and(|l| l.trim().is_empty()) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.len() != side + 1 {
        return Err(DiagramError::Invalid(format!(
            "expected {} lines, found {}",
            side + 1,
            lines.len()
        )));
    }
    let extra_offset = usize::from(side > 9);
    for (row, col) in board.board_coords() {
        let line = lines[side - row - 1].as_bytes();
        let colour = match line.get(3 * (col + 1) + extra_offset) {
            Some(b'#') => Some(Colour::Black),
            Some(b'o') => Some(Colour::White),
            Some(b'.') => None,
            _ => {
                return Err(DiagramError::Invalid(format!(
                    "bad point at {}",
                    describe_vertex((row, col))
                )));
            }
        };
        board.set(row, col, colour)?;
    }
    Ok(board)
}
