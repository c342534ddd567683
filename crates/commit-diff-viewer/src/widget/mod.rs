//! Ratatui widgets for the commit view.

mod commit_header;
mod file_sections;
mod loading;

pub use commit_header::CommitHeaderWidget;
pub use file_sections::FileSectionsWidget;
pub use loading::LoadingIndicator;

#[cfg(test)]
pub(crate) fn row_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
    (buf.area.x..buf.area.x + buf.area.width)
        .map(|x| buf[(x, y)].symbol())
        .collect::<String>()
}
