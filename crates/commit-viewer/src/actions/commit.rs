//! Commit Actions
//!
//! Loading is tagged with a generation: every `Open` gets a fresh one and
//! results issued for an older generation are dropped by the reducer.

use commit_client::{CommitInfo, CommitRoute, DiffFile};

#[derive(Debug, Clone)]
pub enum CommitAction {
    // === Loading ===
    /// Show `route` (triggers both fetches)
    Open(CommitRoute),
    /// Fetches for `route` were issued under `generation`
    LoadStart {
        route: CommitRoute,
        generation: u64,
    },
    /// Commit metadata arrived
    InfoLoaded { generation: u64, info: CommitInfo },
    /// Commit metadata fetch failed
    InfoLoadError { generation: u64, message: String },
    /// Changed file list arrived
    DiffLoaded {
        generation: u64,
        files: Vec<DiffFile>,
    },
    /// Changed file list fetch failed
    DiffLoadError { generation: u64, message: String },

    // === Navigation ===
    /// Open the first parent of the current commit
    NavigateParent,
    /// Fetch the current route again
    Reload,
}
