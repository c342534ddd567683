//! Presentation models derived from backend data.

mod header;
mod line;
mod rows;

pub use header::{CommitHeader, CommitterLine};
pub use line::{line_number_cell, wrap_content, LineClass};
pub use rows::{display_rows, DisplayRow};
