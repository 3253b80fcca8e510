//! Board comparison for gomill tests.
//!
//! Compares two board positions point by point and, on mismatch, produces a
//! diagnostic listing every differing vertex followed by a best-effort
//! rendering of both positions.

pub mod diff;
pub mod report;

pub use diff::{check_boards_equal, check_boards_equal_with, diff_boards};
pub use report::{BoardMismatch, MismatchReport, Rendering};
