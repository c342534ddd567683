//! Commit View
//!
//! Renders the commit header and the file sections using the widgets from
//! commit-diff-viewer, themed through an adapter.

use crate::state::AppState;
use crate::theme::Theme;
use commit_diff_viewer::{
    CommitDiffState, CommitHeader, CommitHeaderWidget, FileSectionsWidget, ThemeProvider,
};
use ratatui::{prelude::*, widgets::Clear};

/// Theme adapter to bridge the app theme with commit-diff-viewer's ThemeProvider
pub struct ViewerThemeAdapter<'a>(pub &'a Theme);

impl ThemeProvider for ViewerThemeAdapter<'_> {
    fn added_background(&self) -> Color {
        self.0.added_bg
    }

    fn removed_background(&self) -> Color {
        self.0.removed_bg
    }

    fn unchanged_background(&self) -> Color {
        self.0.bg_panel
    }

    fn code_foreground(&self) -> Color {
        self.0.text_primary
    }

    fn hunk_header_background(&self) -> Color {
        self.0.hunk_header_bg
    }

    fn hunk_header_foreground(&self) -> Color {
        self.0.accent_primary
    }

    fn line_number_foreground(&self) -> Color {
        self.0.text_muted
    }

    fn file_path_foreground(&self) -> Color {
        self.0.status_info
    }

    fn selected_background(&self) -> Color {
        self.0.selected_bg
    }

    fn muted_foreground(&self) -> Color {
        self.0.text_muted
    }

    fn emphasis_foreground(&self) -> Color {
        self.0.text_primary
    }

    fn link_foreground(&self) -> Color {
        self.0.accent_primary
    }

    fn border(&self) -> Color {
        self.0.text_muted
    }

    fn spinner_foreground(&self) -> Color {
        self.0.accent_primary
    }
}

pub fn render_header(header: &CommitHeader, theme: &Theme, area: Rect, f: &mut Frame) {
    if area.height == 0 {
        return;
    }
    f.render_widget(Clear, area);
    f.render_widget(CommitHeaderWidget::new(header, &ViewerThemeAdapter(theme)), area);
}

/// File sections, or the loading indicator while the diff is pending,
/// failed, or empty.
pub fn render_files(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = ViewerThemeAdapter(&state.theme);
    let empty = CommitDiffState::default();
    let files = state.files().unwrap_or(&empty);

    f.render_widget(
        FileSectionsWidget::new(files, &theme).with_spinner_frame(state.spinner_frame),
        area,
    );
}
