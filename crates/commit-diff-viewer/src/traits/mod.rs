//! Extension traits for customizing viewer behavior.

mod theme_provider;

pub use theme_provider::{DefaultTheme, ThemeProvider};
