//! File section list widget.

use super::LoadingIndicator;
use crate::model::{display_rows, line_number_cell, DisplayRow, LineClass};
use crate::state::CommitDiffState;
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

/// Renders every file section, or the loading spinner while there are none.
///
/// The list is empty both before the diff arrives and for a commit without
/// changed files; both render the spinner.
pub struct FileSectionsWidget<'a, T: ThemeProvider> {
    state: &'a CommitDiffState,
    theme: &'a T,
    /// Current spinner frame.
    spinner_frame: usize,
}

impl<'a, T: ThemeProvider> FileSectionsWidget<'a, T> {
    pub fn new(state: &'a CommitDiffState, theme: &'a T) -> Self {
        Self {
            state,
            theme,
            spinner_frame: 0,
        }
    }

    pub fn with_spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn file_row<'r>(&self, path: &'r str, icon: &'static str, selected: bool) -> (Line<'r>, Style) {
        let mut path_style = Style::default().fg(self.theme.file_path_foreground());
        let mut row_style = Style::default();
        if selected {
            path_style = path_style.add_modifier(Modifier::BOLD);
            row_style = row_style.bg(self.theme.selected_background());
        }

        let line = Line::from(vec![
            Span::styled(icon, Style::default().fg(self.theme.toggle_icon_foreground())),
            Span::raw(" "),
            Span::styled(path, path_style),
        ]);
        (line, row_style)
    }

    fn hunk_row<'r>(&self, header: &'r str) -> (Line<'r>, Style) {
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(header, Style::default().fg(self.theme.hunk_header_foreground())),
        ]);
        (line, Style::default().bg(self.theme.hunk_header_background()))
    }

    fn diff_row<'r>(
        &self,
        numbers: Option<(Option<u32>, Option<u32>)>,
        text: &'r str,
        class: LineClass,
        width: usize,
    ) -> (Line<'r>, Style) {
        let number_style = Style::default().fg(self.theme.line_number_foreground());
        let background = match class {
            LineClass::Added => self.theme.added_background(),
            LineClass::Removed => self.theme.removed_background(),
            LineClass::Unchanged => self.theme.unchanged_background(),
        };

        // Continuation rows leave both number columns blank
        let (base, head) = numbers.unwrap_or_default();
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:>width$}", line_number_cell(base), width = width),
                number_style,
            ),
            Span::raw(" "),
            Span::styled(
                format!("{:>width$}", line_number_cell(head), width = width),
                number_style,
            ),
            Span::raw(" "),
            Span::styled(
                text,
                Style::default()
                    .fg(self.theme.code_foreground())
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        (line, Style::default().bg(background))
    }
}

impl<T: ThemeProvider> Widget for FileSectionsWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.state.is_empty() {
            " Files changed ".to_string()
        } else {
            format!(" Files changed ({}) ", self.state.sections().len())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border()))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.is_empty() {
            LoadingIndicator::new(self.spinner_frame, self.theme).render(inner, buf);
            return;
        }

        let rows = display_rows(self.state.sections(), inner.width as usize);
        let scroll = self.state.scroll_offset().min(rows.len().saturating_sub(1));
        let selected = self.state.selected();

        for (offset, row) in rows
            .iter()
            .skip(scroll)
            .take(inner.height as usize)
            .enumerate()
        {
            let y = inner.y + offset as u16;
            let (line, row_style) = match row {
                DisplayRow::File {
                    index,
                    path,
                    expansion,
                } => self.file_row(*path, expansion.icon(), *index == selected),
                DisplayRow::HunkHeader { header, .. } => self.hunk_row(*header),
                DisplayRow::Line {
                    line,
                    class,
                    line_no_width,
                    text,
                    continuation,
                    ..
                } => self.diff_row(
                    (!continuation).then_some((line.base_line_number, line.head_line_number)),
                    text,
                    *class,
                    *line_no_width,
                ),
            };

            buf.set_style(Rect::new(inner.x, y, inner.width, 1), row_style);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
