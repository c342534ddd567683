//! Loading spinner shown while the diff list is empty.

use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::widgets::Widget;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const LABEL: &str = "Loading diff…";

/// Centered spinner with a label.
pub struct LoadingIndicator<'a, T: ThemeProvider> {
    frame: usize,
    theme: &'a T,
}

impl<'a, T: ThemeProvider> LoadingIndicator<'a, T> {
    pub fn new(frame: usize, theme: &'a T) -> Self {
        Self { frame, theme }
    }

    fn glyph(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }
}

impl<T: ThemeProvider> Widget for LoadingIndicator<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(
                self.glyph(),
                Style::default()
                    .fg(self.theme.spinner_foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(LABEL, Style::default().fg(self.theme.muted_foreground())),
        ]);

        let width = line.width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        buf.set_line(x, y, &line, area.width);
    }
}
