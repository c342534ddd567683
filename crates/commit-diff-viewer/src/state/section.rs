//! Per-file collapsible section.

use crate::model::wrap_content;
use commit_client::DiffFile;

/// Open/closed state of a file section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expansion {
    /// Only the path is shown.
    #[default]
    Collapsed,
    /// Hunks and lines are shown.
    Expanded,
}

impl Expansion {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Expansion::Expanded
    }

    /// Icon shown in front of the path.
    pub fn icon(self) -> &'static str {
        match self {
            Expansion::Collapsed => "▸",
            Expansion::Expanded => "▾",
        }
    }
}

/// One changed file plus its local toggle.
#[derive(Debug, Clone)]
pub struct FileSection {
    file: DiffFile,
    expansion: Expansion,
    /// Width of each line-number column.
    line_no_width: usize,
}

impl FileSection {
    /// Wrap a file; sections always start collapsed.
    pub fn new(file: DiffFile) -> Self {
        let max = file
            .hunks
            .iter()
            .flat_map(|h| h.lines.iter())
            .flat_map(|l| [l.base_line_number, l.head_line_number])
            .flatten()
            .max()
            .unwrap_or(1);

        Self {
            file,
            expansion: Expansion::default(),
            line_no_width: max.to_string().len().max(4),
        }
    }

    pub fn file(&self) -> &DiffFile {
        &self.file
    }

    pub fn path(&self) -> &str {
        self.file.path()
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    pub fn is_expanded(&self) -> bool {
        self.expansion.is_expanded()
    }

    pub fn toggle(&mut self) {
        self.expansion = self.expansion.toggled();
    }

    pub fn set_expansion(&mut self, expansion: Expansion) {
        self.expansion = expansion;
    }

    pub fn line_no_width(&self) -> usize {
        self.line_no_width
    }

    /// Columns left for line content in a list `list_width` columns wide,
    /// after the indent and both line-number columns.
    ///
    /// Zero when the width is unknown or too narrow, which disables wrapping.
    pub fn content_width(&self, list_width: usize) -> usize {
        list_width.saturating_sub(2 * self.line_no_width + 4)
    }

    /// Rows this section occupies in a list `list_width` columns wide: the
    /// path row, plus hunk headers and wrapped lines when expanded.
    pub fn row_count(&self, list_width: usize) -> usize {
        if !self.is_expanded() {
            return 1;
        }
        let content_width = self.content_width(list_width);
        1 + self
            .file
            .hunks
            .iter()
            .map(|h| {
                1 + h
                    .lines
                    .iter()
                    .map(|l| wrap_content(&l.content, content_width).len())
                    .sum::<usize>()
            })
            .sum::<usize>()
    }
}
