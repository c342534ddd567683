//! Line classification for diff rendering.

use unicode_width::UnicodeWidthChar;

/// Columns a tab expands to.
pub const TAB_WIDTH: usize = 4;

/// How a diff line is presented.
///
/// Derived purely from the first character of the content; line numbers
/// play no part. The content itself is always shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Content starts with `+`.
    Added,
    /// Content starts with `-`.
    Removed,
    /// Anything else, including empty content.
    Unchanged,
}

impl LineClass {
    /// Classify a raw content string.
    pub fn of(content: &str) -> Self {
        if content.starts_with('+') {
            LineClass::Added
        } else if content.starts_with('-') {
            LineClass::Removed
        } else {
            LineClass::Unchanged
        }
    }

    /// Stable lowercase name ("added", "removed", "unchanged").
    pub fn as_str(&self) -> &'static str {
        match self {
            LineClass::Added => "added",
            LineClass::Removed => "removed",
            LineClass::Unchanged => "unchanged",
        }
    }
}

/// Text for a line-number column; blank when the number is absent.
pub fn line_number_cell(number: Option<u32>) -> String {
    number.map(|n| n.to_string()).unwrap_or_default()
}

/// Split diff content into rows of at most `max_cols` terminal columns.
///
/// Tabs are expanded first; no other character is altered or dropped.
/// Always yields at least one (possibly empty) row. `max_cols == 0` means
/// the width is unknown and the content stays on one row.
pub fn wrap_content(content: &str, max_cols: usize) -> Vec<String> {
    let expanded = content.replace('\t', &" ".repeat(TAB_WIDTH));
    if max_cols == 0 {
        return vec![expanded];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut col = 0;
    for ch in expanded.chars() {
        let width = ch.width().unwrap_or(0);
        // A character wider than the row still goes somewhere
        if col + width > max_cols && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            col = 0;
        }
        current.push(ch);
        col += width;
    }
    rows.push(current);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use commit_client::DiffLine;

    #[test]
    fn test_classification_by_first_char() {
        assert_eq!(LineClass::of("+foo"), LineClass::Added);
        assert_eq!(LineClass::of("-foo"), LineClass::Removed);
        assert_eq!(LineClass::of(" foo"), LineClass::Unchanged);
        assert_eq!(LineClass::of("foo"), LineClass::Unchanged);
        assert_eq!(LineClass::of(""), LineClass::Unchanged);
        assert_eq!(LineClass::of("\\ No newline at end of file"), LineClass::Unchanged);
    }

    #[test]
    fn test_classification_ignores_line_numbers() {
        // A "+" line that nonetheless carries both numbers is still added
        let line = DiffLine::new("+odd", Some(3), Some(4));
        assert_eq!(LineClass::of(&line.content), LineClass::Added);

        // A context-looking line with no base number is still unchanged
        let line = DiffLine::new(" ctx", None, Some(4));
        assert_eq!(LineClass::of(&line.content), LineClass::Unchanged);
    }

    #[test]
    fn test_added_line_columns() {
        let line = DiffLine::new("+foo", None, Some(42));
        assert_eq!(LineClass::of(&line.content).as_str(), "added");
        assert_eq!(line_number_cell(line.base_line_number), "");
        assert_eq!(line_number_cell(line.head_line_number), "42");
    }

    #[test]
    fn test_short_content_is_one_row() {
        assert_eq!(wrap_content("+foo", 10), vec!["+foo"]);
        assert_eq!(wrap_content("", 10), vec![""]);
    }

    #[test]
    fn test_long_content_wraps_without_losing_text() {
        let content = format!("+{}TAIL", "x".repeat(20));
        let rows = wrap_content(&content, 10);
        assert_eq!(rows, vec!["+xxxxxxxxx", "xxxxxxxxxx", "xTAIL"]);
        assert_eq!(rows.concat(), content);
    }

    #[test]
    fn test_tabs_expand_before_wrapping() {
        assert_eq!(wrap_content("\tab", 5), vec!["    a", "b"]);
    }

    #[test]
    fn test_wide_characters_do_not_split_columns() {
        // Each CJK character takes two columns
        assert_eq!(wrap_content("+漢字漢", 4), vec!["+漢", "字漢"]);
    }

    #[test]
    fn test_unknown_width_keeps_single_row() {
        assert_eq!(wrap_content(&"y".repeat(300), 0).len(), 1);
    }
}
