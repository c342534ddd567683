use crate::actions::{Action, GlobalAction};
use crate::reducers::{commit_reducer::reduce_commit, diff_reducer::reduce_diff};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            state
        }
        Action::Global(GlobalAction::Tick) => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            state
        }
        // Translated by the keyboard middleware
        Action::Global(GlobalAction::KeyPressed(_)) => state,
        Action::Commit(action) => reduce_commit(state, action),
        Action::Diff(action) => reduce_diff(state, *action),
    }
}
