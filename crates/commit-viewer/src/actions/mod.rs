//! Actions module
//!
//! All state changes are expressed as tagged actions:
//! - `Global`: application-wide (quit, raw keys, ticks)
//! - `Commit`: loading the commit and its diff, route changes
//! - `Diff`: file section navigation, forwarded to the viewer state

pub mod commit;
pub mod global;

pub use commit::CommitAction;
pub use commit_diff_viewer::DiffAction;
pub use global::GlobalAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Commit loading and navigation
    Commit(CommitAction),
    /// File section list actions
    Diff(DiffAction),
}
