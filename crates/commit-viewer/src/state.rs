//! Application State

use crate::theme::Theme;
use commit_client::{CommitInfo, CommitRoute};
use commit_diff_viewer::CommitDiffState;

/// Progress of one fetch
#[derive(Debug, Clone, Default)]
pub enum LoadState<T> {
    /// Requested (or not requested yet), nothing arrived
    #[default]
    Pending,
    /// Data arrived
    Loaded(T),
    /// Fetch failed with this message; the data stays unset
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Space inside the file list border, as last reported by the UI loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub height: usize,
    pub width: usize,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Commit being shown
    pub route: CommitRoute,
    /// Generation of the in-flight (or last) load; results from others are dropped
    pub generation: u64,
    /// Commit metadata slot
    pub commit: LoadState<CommitInfo>,
    /// Changed files slot
    pub diff: LoadState<CommitDiffState>,
    pub viewport: Viewport,
    /// Loading spinner frame
    pub spinner_frame: usize,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            route: CommitRoute::default(),
            generation: 0,
            commit: LoadState::Pending,
            diff: LoadState::Pending,
            viewport: Viewport::default(),
            spinner_frame: 0,
            theme: Theme::default(),
        }
    }
}

impl AppState {
    /// Start with `route` shown in the footer before its first load.
    pub fn new(route: CommitRoute) -> Self {
        Self {
            route,
            ..Self::default()
        }
    }

    /// The file list shows the loading indicator: the diff is not loaded,
    /// or it loaded without any files.
    pub fn shows_spinner(&self) -> bool {
        !matches!(self.files(), Some(files) if !files.is_empty())
    }

    /// The file sections, or nothing while the diff is pending or failed.
    pub fn files(&self) -> Option<&CommitDiffState> {
        self.diff.loaded()
    }

    /// Failures of the current load, for the footer.
    pub fn load_error(&self) -> Option<String> {
        let errors: Vec<String> = [
            ("Commit", self.commit.failure()),
            ("Diff", self.diff.failure()),
        ]
        .into_iter()
        .filter_map(|(what, message)| message.map(|m| format!("{}: {}", what, m)))
        .collect();

        (!errors.is_empty()).then(|| errors.join(" · "))
    }
}
