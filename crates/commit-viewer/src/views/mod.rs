use crate::state::{AppState, Viewport};
use chrono::{DateTime, Utc};
use commit_diff_viewer::CommitHeader;
use ratatui::{layout::Rect, Frame};

pub mod commit_view;
pub mod layout;
pub mod status_bar;

use layout::ScreenLayout;

/// Render the entire application UI
///
/// Returns the space available inside the file list, which the main loop
/// reports back as the viewport.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) -> Viewport {
    render_at(state, area, f, Utc::now())
}

/// Render with relative times computed against `now`
pub fn render_at(state: &AppState, area: Rect, f: &mut Frame, now: DateTime<Utc>) -> Viewport {
    let header = state
        .commit
        .loaded()
        .map(|info| CommitHeader::new(info, &state.route.commit_oid, now));

    let layout = ScreenLayout::new(area, header.as_ref().map(CommitHeader::height));

    if let Some(header) = &header {
        commit_view::render_header(header, &state.theme, layout.header, f);
    }
    commit_view::render_files(state, layout.files, f);
    f.render_widget(status_bar::StatusBarWidget::new(state), layout.footer);

    layout.file_list_viewport()
}
