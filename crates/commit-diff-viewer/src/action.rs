//! Viewer Actions
//!
//! Tagged actions that the viewer state can process. The orchestrating
//! application transforms key events into these and dispatches them.

/// Actions that can be performed on the file section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffAction {
    // === Navigation ===
    /// Select the next file section
    NextFile,
    /// Select the previous file section
    PrevFile,
    /// Select the first file section
    FirstFile,
    /// Select the last file section
    LastFile,

    // === Expansion ===
    /// Flip the selected section between collapsed and expanded
    Toggle,
    /// Expand every section
    ExpandAll,
    /// Collapse every section
    CollapseAll,

    // === Scrolling ===
    /// Scroll down half page
    ScrollHalfDown,
    /// Scroll up half page
    ScrollHalfUp,
    /// Scroll down full page
    ScrollPageDown,
    /// Scroll up full page
    ScrollPageUp,

    // === Viewport ===
    /// Rows and columns available inside the section list border
    SetViewport { height: usize, width: usize },
}
