//! Point-by-point board comparison.

use gm_board::{BoardView, Coords, RenderError};

use crate::report::{BoardMismatch, MismatchReport, Rendering};

/// Points where two boards differ, in `b1`'s enumeration order.
///
/// Returns `None` if the sides differ; no point is looked at in that case.
pub fn diff_boards<B>(b1: &B, b2: &B) -> Option<Vec<Coords>>
where
    B: BoardView + ?Sized,
{
    if b1.side() != b2.side() {
        return None;
    }
    Some(
        b1.board_coords()
            .filter(|&(row, col)| b1.get(row, col) != b2.get(row, col))
            .collect(),
    )
}

/// Check that two boards hold the same position.
///
/// Mismatch diagnostics include both boards rendered with
/// [`BoardView::render`] when that succeeds.
pub fn check_boards_equal<B>(b1: &B, b2: &B) -> Result<(), BoardMismatch>
where
    B: BoardView + ?Sized,
{
    check_boards_equal_with(b1, b2, |b: &B| b.render())
}

/// Like [`check_boards_equal`], rendering diagnostics with `render`.
///
/// A failing renderer only drops the diagrams from the report; it never
/// changes whether the check passes.
pub fn check_boards_equal_with<B, F>(b1: &B, b2: &B, render: F) -> Result<(), BoardMismatch>
where
    B: BoardView + ?Sized,
    F: Fn(&B) -> Result<String, RenderError>,
{
    let Some(differences) = diff_boards(b1, b2) else {
        return Err(BoardMismatch::SizeMismatch {
            first: b1.side(),
            second: b2.side(),
        });
    };
    if differences.is_empty() {
        return Ok(());
    }
    tracing::debug!(count = differences.len(), "boards differ");
    Err(BoardMismatch::CellMismatch(MismatchReport {
        differences,
        rendering: Rendering::attempt(b1, b2, render),
    }))
}
