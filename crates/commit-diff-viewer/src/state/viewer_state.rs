//! Main state for the file section list.

use super::{Expansion, FileSection};
use crate::action::DiffAction;
use commit_client::DiffFile;

/// Default until the orchestrator reports the real viewport.
const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

/// Sections for every changed file, plus selection and scroll position.
#[derive(Debug, Clone)]
pub struct CommitDiffState {
    sections: Vec<FileSection>,
    /// Index of the selected section.
    selected: usize,
    /// First visible row.
    scroll_offset: usize,
    /// Rows available for rendering (for scroll calculations).
    viewport_height: usize,
    /// Columns inside the list border; zero until reported.
    viewport_width: usize,
}

impl Default for CommitDiffState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CommitDiffState {
    /// Create a state with one collapsed section per file, in the given order.
    pub fn new(files: Vec<DiffFile>) -> Self {
        Self {
            sections: files.into_iter().map(FileSection::new).collect(),
            selected: 0,
            scroll_offset: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            viewport_width: 0,
        }
    }

    /// No files to show (not loaded yet, or a commit without changes).
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[FileSection] {
        &self.sections
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn viewport_width(&self) -> usize {
        self.viewport_width
    }

    /// Total rows across all sections, counting wrapped continuation rows.
    pub fn total_rows(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.row_count(self.viewport_width))
            .sum()
    }

    /// Row of the selected section's path line.
    pub fn selected_row(&self) -> usize {
        self.sections
            .iter()
            .take(self.selected)
            .map(|s| s.row_count(self.viewport_width))
            .sum()
    }

    /// Process an action.
    pub fn handle_action(&mut self, action: DiffAction) {
        match action {
            DiffAction::NextFile => {
                if self.selected + 1 < self.sections.len() {
                    self.selected += 1;
                }
                self.ensure_selected_visible();
            }
            DiffAction::PrevFile => {
                self.selected = self.selected.saturating_sub(1);
                self.ensure_selected_visible();
            }
            DiffAction::FirstFile => {
                self.selected = 0;
                self.ensure_selected_visible();
            }
            DiffAction::LastFile => {
                self.selected = self.sections.len().saturating_sub(1);
                self.ensure_selected_visible();
            }
            DiffAction::Toggle => {
                if let Some(section) = self.sections.get_mut(self.selected) {
                    section.toggle();
                }
                self.clamp_scroll();
                self.ensure_selected_visible();
            }
            DiffAction::ExpandAll => self.set_all(Expansion::Expanded),
            DiffAction::CollapseAll => self.set_all(Expansion::Collapsed),
            DiffAction::ScrollHalfDown => self.scroll_down((self.viewport_height / 2).max(1)),
            DiffAction::ScrollHalfUp => self.scroll_up((self.viewport_height / 2).max(1)),
            DiffAction::ScrollPageDown => self.scroll_down(self.viewport_height.max(1)),
            DiffAction::ScrollPageUp => self.scroll_up(self.viewport_height.max(1)),
            DiffAction::SetViewport { height, width } => {
                self.viewport_height = height.max(1);
                self.viewport_width = width;
                self.clamp_scroll();
                self.ensure_selected_visible();
            }
        }
    }

    fn set_all(&mut self, expansion: Expansion) {
        for section in &mut self.sections {
            section.set_expansion(expansion);
        }
        self.clamp_scroll();
        self.ensure_selected_visible();
    }

    fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.viewport_height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn ensure_selected_visible(&mut self) {
        let row = self.selected_row();
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = row + 1 - self.viewport_height;
        }
    }

    fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = (self.scroll_offset + rows).min(self.max_scroll());
        self.select_section_at_top();
    }

    fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
        self.select_section_at_top();
    }

    /// Selection follows the section that owns the first visible row.
    fn select_section_at_top(&mut self) {
        let mut start = 0;
        for (index, section) in self.sections.iter().enumerate() {
            let end = start + section.row_count(self.viewport_width);
            if self.scroll_offset < end {
                self.selected = index;
                return;
            }
            start = end;
        }
    }
}
