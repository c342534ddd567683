//! Commit Reducer
//!
//! Applies load lifecycle actions. Results carry the generation they were
//! requested under; anything not matching `state.generation` is stale (the
//! route changed meanwhile) and dropped.

use crate::actions::CommitAction;
use crate::state::{AppState, LoadState};
use commit_diff_viewer::{CommitDiffState, DiffAction};

pub fn reduce_commit(mut state: AppState, action: &CommitAction) -> AppState {
    match action {
        // Side effects only, handled by middleware
        CommitAction::Open(_) | CommitAction::Reload | CommitAction::NavigateParent => state,

        CommitAction::LoadStart { route, generation } => {
            state.route = route.clone();
            state.generation = *generation;
            state.commit = LoadState::Pending;
            state.diff = LoadState::Pending;
            state
        }

        CommitAction::InfoLoaded { generation, info } => {
            if is_stale(&state, *generation) {
                return state;
            }
            state.commit = LoadState::Loaded(info.clone());
            state
        }

        CommitAction::InfoLoadError {
            generation,
            message,
        } => {
            if is_stale(&state, *generation) {
                return state;
            }
            state.commit = LoadState::Failed(message.clone());
            state
        }

        CommitAction::DiffLoaded { generation, files } => {
            if is_stale(&state, *generation) {
                return state;
            }
            let mut sections = CommitDiffState::new(files.clone());
            if state.viewport.height > 0 {
                sections.handle_action(DiffAction::SetViewport {
                    height: state.viewport.height,
                    width: state.viewport.width,
                });
            }
            state.diff = LoadState::Loaded(sections);
            state
        }

        CommitAction::DiffLoadError {
            generation,
            message,
        } => {
            if is_stale(&state, *generation) {
                return state;
            }
            state.diff = LoadState::Failed(message.clone());
            state
        }
    }
}

fn is_stale(state: &AppState, generation: u64) -> bool {
    let stale = generation != state.generation;
    if stale {
        log::debug!(
            "Dropping result of generation {} (current {})",
            generation,
            state.generation
        );
    }
    stale
}
