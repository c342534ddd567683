//! Trait for providing theme configuration to the viewer.

use ratatui::style::Color;

/// Provides theme colors for the commit header and file sections.
///
/// Implement this trait to integrate the viewer with your application's
/// theme system. The theme instance should be injected from the orchestrator.
///
/// # Example
///
/// ```ignore
/// use commit_diff_viewer::ThemeProvider;
/// use ratatui::style::Color;
///
/// struct MyAppTheme;
///
/// impl ThemeProvider for MyAppTheme {
///     fn added_background(&self) -> Color {
///         Color::Rgb(30, 60, 30)
///     }
///
///     fn removed_background(&self) -> Color {
///         Color::Rgb(60, 30, 30)
///     }
/// }
/// ```
pub trait ThemeProvider: Send + Sync {
    /// Background color for added lines.
    fn added_background(&self) -> Color;

    /// Background color for removed lines.
    fn removed_background(&self) -> Color;

    /// Background color for unchanged lines.
    fn unchanged_background(&self) -> Color {
        Color::Reset
    }

    /// Foreground color for line content.
    fn code_foreground(&self) -> Color {
        Color::Reset
    }

    /// Background color for hunk header lines.
    fn hunk_header_background(&self) -> Color {
        Color::Rgb(40, 40, 60)
    }

    /// Foreground color for hunk header text.
    fn hunk_header_foreground(&self) -> Color {
        Color::Rgb(109, 132, 176)
    }

    /// Foreground color for line numbers.
    fn line_number_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for file paths.
    fn file_path_foreground(&self) -> Color {
        Color::Rgb(28, 124, 214)
    }

    /// Foreground color for the expand/collapse icon.
    fn toggle_icon_foreground(&self) -> Color {
        Color::Rgb(96, 120, 169)
    }

    /// Background color for the selected file row.
    fn selected_background(&self) -> Color {
        Color::Rgb(50, 50, 80)
    }

    /// Foreground color for secondary text ("Authored by", times).
    fn muted_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for names and the summary line.
    fn emphasis_foreground(&self) -> Color {
        Color::White
    }

    /// Foreground color for commit identifiers that can be navigated to.
    fn link_foreground(&self) -> Color {
        Color::Blue
    }

    /// Border color for panes.
    fn border(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for the loading spinner.
    fn spinner_foreground(&self) -> Color {
        Color::Rgb(96, 165, 250)
    }
}

/// Default theme with sensible dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {
    fn added_background(&self) -> Color {
        Color::Rgb(30, 60, 30) // dark green
    }

    fn removed_background(&self) -> Color {
        Color::Rgb(60, 30, 30) // dark red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = DefaultTheme;
        assert_eq!(theme.added_background(), Color::Rgb(30, 60, 30));
        assert_eq!(theme.removed_background(), Color::Rgb(60, 30, 30));
        assert_eq!(theme.unchanged_background(), Color::Reset);
    }
}
