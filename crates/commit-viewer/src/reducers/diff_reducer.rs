//! File Section Reducer
//!
//! Forwards `DiffAction`s to the loaded file sections. The viewport is
//! remembered even while nothing is loaded so fresh sections start with it.

use crate::state::{AppState, Viewport};
use commit_diff_viewer::DiffAction;

pub fn reduce_diff(mut state: AppState, action: DiffAction) -> AppState {
    if let DiffAction::SetViewport { height, width } = action {
        state.viewport = Viewport { height, width };
    }

    if let Some(files) = state.diff.loaded_mut() {
        files.handle_action(action);
    }
    state
}
