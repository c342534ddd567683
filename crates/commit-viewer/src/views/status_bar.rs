//! Status Bar Widget
//!
//! One line at the bottom: the route on the left, then either the failures
//! of the current load or the key hints.

use crate::state::AppState;
use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};

const KEY_HINTS: [(&str, &str); 6] = [
    ("j/k", "select"),
    ("enter", "toggle"),
    ("E/C", "expand/collapse all"),
    ("p", "parent"),
    ("r", "reload"),
    ("q", "quit"),
];

pub struct StatusBarWidget<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<Span<'static>> {
        let theme = &self.state.theme;
        let mut spans = Vec::with_capacity(KEY_HINTS.len() * 3);
        for (key, description) in KEY_HINTS {
            spans.push(Span::styled(key, theme.key_hint()));
            spans.push(Span::styled(" ", theme.key_description()));
            spans.push(Span::styled(description, theme.key_description()));
            spans.push(Span::raw("  "));
        }
        spans
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let theme = &self.state.theme;

        // Fill entire row with background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(theme.bg_primary).set_char(' ');
        }

        let route = format!(" {} ", self.state.route);
        let (x, _) = buf.set_stringn(
            area.x,
            area.y,
            &route,
            area.width as usize,
            theme.muted(),
        );
        let remaining = area.width.saturating_sub(x - area.x);

        match self.state.load_error() {
            Some(error) => {
                let text = format!("✗ {}", error);
                buf.set_stringn(x, area.y, text, remaining as usize, theme.error());
            }
            None => {
                buf.set_line(x, area.y, &self.hints().into(), remaining);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadState;
    use commit_client::CommitRoute;

    fn render(state: &AppState) -> String {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(state).render(area, &mut buf);
        (0..area.width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_shows_route_and_hints() {
        let state = AppState::new(CommitRoute::new("acme", "widgets", "abc123"));
        let line = render(&state);
        assert!(line.starts_with(" acme/widgets@abc123 "));
        assert!(line.contains("j/k select"));
        assert!(line.contains("q quit"));
    }

    #[test]
    fn test_error_replaces_hints() {
        let mut state = AppState::new(CommitRoute::new("acme", "widgets", "abc123"));
        state.diff = LoadState::Failed("request failed".to_string());
        let line = render(&state);
        assert!(line.contains("✗ Diff: request failed"));
        assert!(!line.contains("j/k"));
    }
}
