//! State management for the commit diff view.

mod section;
mod viewer_state;

pub use section::{Expansion, FileSection};
pub use viewer_state::CommitDiffState;
