use std::collections::HashSet;

use super::{Color, Rgb};

/// A theme provides named color variables.
pub trait Theme {
    /// Resolve a color variable name to a color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Theme that resolves nothing. Variables fall back to the renderer defaults.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<&Color> {
        None
    }
}

/// Resolves colors (including variables that point at other variables)
/// against a theme.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    /// Resolve to a concrete color, or None for an undefined variable.
    pub fn resolve(&self, color: &Color) -> Option<Rgb> {
        let mut seen = HashSet::new();
        let mut current = color;
        loop {
            match current {
                Color::Var(name) => {
                    if !seen.insert(name.as_str()) {
                        log::debug!("[theme] cyclic color variable {name}");
                        return None;
                    }
                    current = self.theme.resolve(name)?;
                }
                concrete => return concrete.to_rgb(),
            }
        }
    }
}
