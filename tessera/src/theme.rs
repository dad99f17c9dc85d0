//! The default color theme.
//!
//! Components only refer to colors by variable name
//! (`Color::var("table.header_bg")`). Variables may point at other variables,
//! so component colors are defined in terms of a small base palette.

use std::collections::HashMap;

use tessera_dom::{Color, Theme};

/// Base palette plus every variable the components use.
///
/// ```
/// use tessera::theme::DefaultTheme;
/// use tessera_dom::{Color, Theme};
///
/// let theme = DefaultTheme::new().with("primary", Color::rgb(255, 0, 128));
/// assert_eq!(theme.resolve("primary"), Some(&Color::rgb(255, 0, 128)));
/// ```
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    colors: HashMap<String, Color>,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultTheme {
    pub fn new() -> Self {
        let mut theme = Self {
            colors: HashMap::new(),
        };

        // Base palette
        theme.set("background", Color::rgb(24, 24, 32));
        theme.set("foreground", Color::rgb(220, 220, 230));
        theme.set("surface", Color::rgb(36, 36, 48));
        theme.set("border", Color::rgb(88, 88, 110));
        theme.set("primary", Color::oklch(0.65, 0.15, 250.0));
        theme.set("muted", Color::rgb(130, 130, 150));
        theme.set("error", Color::oklch(0.62, 0.2, 25.0));

        // Table
        theme.set("table.header_bg", Color::var("surface"));
        theme.set("table.header_fg", Color::var("foreground"));
        theme.set("table.row_alt", Color::rgb(30, 30, 40));
        theme.set("table.row_selected", Color::var("primary"));
        theme.set("table.row_selected_fg", Color::var("background"));
        theme.set("table.border", Color::var("border"));

        // Input
        theme.set("input.bg", Color::var("surface"));
        theme.set("input.border", Color::var("border"));
        theme.set("input.error", Color::var("error"));
        theme.set("input.label", Color::var("foreground"));
        theme.set("input.helper", Color::var("muted"));
        theme.set("input.placeholder", Color::var("muted"));
        theme.set("input.disabled", Color::var("muted"));

        theme
    }

    /// Define or override a variable.
    pub fn set(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn with(mut self, name: impl Into<String>, color: Color) -> Self {
        self.set(name, color);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }
}
