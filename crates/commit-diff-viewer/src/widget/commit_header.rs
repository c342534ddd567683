//! Commit header widget.

use crate::model::CommitHeader;
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Share of the width given to the message column.
const MESSAGE_COLUMN_PERCENT: u16 = 65;

/// Renders the commit message, authorship and identifiers.
///
/// Left column: summary, "Authored by", body. Right column: optional
/// "Committed by", the commit OID, and the first parent when there is one.
pub struct CommitHeaderWidget<'a, T: ThemeProvider> {
    header: &'a CommitHeader,
    theme: &'a T,
}

impl<'a, T: ThemeProvider> CommitHeaderWidget<'a, T> {
    pub fn new(header: &'a CommitHeader, theme: &'a T) -> Self {
        Self { header, theme }
    }

    fn who_when(&self, verb: &'static str, name: &'a str, when: &'a str) -> Line<'a> {
        let muted = Style::default().fg(self.theme.muted_foreground());
        Line::from(vec![
            Span::styled(verb, muted),
            Span::raw(" "),
            Span::styled(
                name,
                Style::default()
                    .fg(self.theme.emphasis_foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(when, muted),
        ])
    }

    fn oid_line(&self, label: &'static str, oid: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(label, Style::default().fg(self.theme.muted_foreground())),
            Span::raw(" "),
            Span::styled(oid, Style::default().fg(self.theme.link_foreground())),
        ])
    }

    fn message_lines(&self) -> Vec<Line<'a>> {
        let header = self.header;
        let mut lines = vec![
            Line::from(Span::styled(
                header.summary.as_str(),
                Style::default()
                    .fg(self.theme.emphasis_foreground())
                    .add_modifier(Modifier::BOLD),
            )),
            self.who_when("Authored by", &header.author, &header.authored),
        ];
        lines.extend(
            header
                .body_lines()
                .into_iter()
                .map(|line| Line::from(Span::raw(line))),
        );
        lines
    }

    fn identity_lines(&self) -> Vec<Line<'a>> {
        let header = self.header;
        let mut lines = Vec::with_capacity(3);
        if let Some(committer) = &header.committer {
            lines.push(self.who_when("Committed by", &committer.name, &committer.committed));
        }
        lines.push(self.oid_line("Commit", &header.commit_oid));
        if let Some(parent) = &header.parent_oid {
            lines.push(self.oid_line("Parent", parent));
        }
        lines
    }
}

impl<T: ThemeProvider> Widget for CommitHeaderWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border()))
            .title(" Commit ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [message_area, identity_area] = Layout::horizontal([
            Constraint::Percentage(MESSAGE_COLUMN_PERCENT),
            Constraint::Percentage(100 - MESSAGE_COLUMN_PERCENT),
        ])
        .areas(inner);

        // Rows beyond the area are clipped; the layout caps the header height
        Paragraph::new(self.message_lines())
            .wrap(Wrap { trim: false })
            .render(message_area, buf);
        Paragraph::new(self.identity_lines())
            .wrap(Wrap { trim: false })
            .render(identity_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommitterLine;
    use crate::traits::DefaultTheme;
    use crate::widget::row_text;

    fn header(committer: Option<CommitterLine>, parent: Option<&str>) -> CommitHeader {
        CommitHeader {
            summary: "Fix parser".to_string(),
            body: "Handles empty input.\nAdds tests.".to_string(),
            author: "Ada".to_string(),
            authored: "three hours ago".to_string(),
            committer,
            commit_oid: "abc123".to_string(),
            parent_oid: parent.map(str::to_string),
        }
    }

    fn render(header: &CommitHeader) -> Buffer {
        let area = Rect::new(0, 0, 100, header.height());
        let mut buf = Buffer::empty(area);
        CommitHeaderWidget::new(header, &DefaultTheme).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_message_column() {
        let buf = render(&header(None, Some("p1")));

        assert!(row_text(&buf, 0).contains("Commit"));
        assert!(row_text(&buf, 1).contains("Fix parser"));
        assert!(row_text(&buf, 2).contains("Authored by Ada three hours ago"));
        assert!(row_text(&buf, 3).contains("Handles empty input."));
        assert!(row_text(&buf, 4).contains("Adds tests."));
    }

    #[test]
    fn test_identity_column_with_committer_and_parent() {
        let committer = CommitterLine {
            name: "Grace".to_string(),
            committed: "1 months ago".to_string(),
        };
        let buf = render(&header(Some(committer), Some("p1")));

        assert!(row_text(&buf, 1).contains("Committed by Grace 1 months ago"));
        assert!(row_text(&buf, 2).contains("Commit abc123"));
        assert!(row_text(&buf, 3).contains("Parent p1"));
    }

    #[test]
    fn test_root_commit_without_committer_line() {
        let buf = render(&header(None, None));
        let text: String = (0..buf.area.height).map(|y| row_text(&buf, y)).collect();

        assert!(row_text(&buf, 1).contains("Commit abc123"));
        assert!(!text.contains("Committed by"));
        assert!(!text.contains("Parent"));
    }

    #[test]
    fn test_long_body_line_wraps_in_message_column() {
        let mut long = header(None, None);
        long.body = format!("{} END", "word ".repeat(20));
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        CommitHeaderWidget::new(&long, &DefaultTheme).render(area, &mut buf);

        let text: String = (0..area.height).map(|y| row_text(&buf, y)).collect();
        assert!(text.contains("END"));
        assert!(row_text(&buf, 4).contains("word"));
    }
}
