//! Flattening sections into renderable rows.

use super::{wrap_content, LineClass};
use crate::state::{Expansion, FileSection};
use commit_client::DiffLine;

/// One row of the file section list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow<'a> {
    /// Path line with the toggle icon.
    File {
        index: usize,
        path: &'a str,
        expansion: Expansion,
    },
    /// Hunk header text.
    HunkHeader { file: usize, header: &'a str },
    /// One wrapped row of a diff line. Only the first row of a line carries
    /// the line numbers.
    Line {
        file: usize,
        line: &'a DiffLine,
        class: LineClass,
        line_no_width: usize,
        /// Tab-expanded slice of the content shown on this row.
        text: String,
        continuation: bool,
    },
}

/// Flatten sections top to bottom; collapsed sections contribute their path only.
///
/// Lines longer than the content area of a `list_width`-column list are
/// wrapped into continuation rows.
pub fn display_rows(sections: &[FileSection], list_width: usize) -> Vec<DisplayRow<'_>> {
    let mut rows = Vec::new();
    for (index, section) in sections.iter().enumerate() {
        rows.push(DisplayRow::File {
            index,
            path: section.path(),
            expansion: section.expansion(),
        });
        if !section.is_expanded() {
            continue;
        }
        let content_width = section.content_width(list_width);
        for hunk in &section.file().hunks {
            rows.push(DisplayRow::HunkHeader {
                file: index,
                header: &hunk.header,
            });
            for line in &hunk.lines {
                let class = LineClass::of(&line.content);
                for (part, text) in wrap_content(&line.content, content_width)
                    .into_iter()
                    .enumerate()
                {
                    rows.push(DisplayRow::Line {
                        file: index,
                        line,
                        class,
                        line_no_width: section.line_no_width(),
                        text,
                        continuation: part > 0,
                    });
                }
            }
        }
    }
    rows
}
