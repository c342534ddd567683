//! # commit-diff-viewer
//!
//! Presentation layer for a single commit: the commit header (summary,
//! author, committer, parent) and one collapsible section per changed file.
//!
//! ## Design Principles
//!
//! Like the rest of the workspace this crate is **instrumented**: it receives
//! already-fetched [`commit_client`] data and never performs I/O itself.
//! "Now" is always passed in, so relative times are deterministic in tests.
//!
//! ## Action-Based Architecture
//!
//! The orchestrating application maps key events to [`DiffAction`] variants
//! and hands them to [`CommitDiffState::handle_action`]. Widgets only read
//! state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use commit_diff_viewer::{CommitDiffState, DiffAction, FileSectionsWidget, DefaultTheme};
//!
//! let mut state = CommitDiffState::new(files);
//! state.handle_action(DiffAction::Toggle);
//!
//! let widget = FileSectionsWidget::new(&state, &DefaultTheme);
//! frame.render_widget(widget, area);
//! ```

pub mod action;
pub mod model;
pub mod state;
pub mod time;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::DiffAction;
pub use model::{
    display_rows, line_number_cell, CommitHeader, CommitterLine, DisplayRow, LineClass,
};
pub use state::{CommitDiffState, Expansion, FileSection};
pub use time::format_relative_time;
pub use traits::{DefaultTheme, ThemeProvider};
pub use widget::{CommitHeaderWidget, FileSectionsWidget, LoadingIndicator};
