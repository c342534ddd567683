use crate::state::Viewport;
use ratatui::layout::{Constraint, Layout, Rect};

/// The header never takes more than a third of the screen; a longer
/// message is clipped.
const HEADER_MAX_FRACTION: u16 = 3;

/// Vertical split: commit header, file list, one-line footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Zero height until the commit is loaded
    pub header: Rect,
    pub files: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, header_height: Option<u16>) -> Self {
        let header_height = header_height
            .unwrap_or(0)
            .min(area.height / HEADER_MAX_FRACTION);
        let [header, files, footer] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            files,
            footer,
        }
    }

    /// Rows inside the file list border
    pub fn file_list_rows(&self) -> usize {
        self.files.height.saturating_sub(2) as usize
    }

    /// Rows and columns inside the file list border
    pub fn file_list_viewport(&self) -> Viewport {
        Viewport {
            height: self.file_list_rows(),
            width: self.files.width.saturating_sub(2) as usize,
        }
    }
}
