/// A color as written in a style.
///
/// `Var` colors are names looked up in a [`Theme`](super::Theme) at draw
/// time, so the same element tree can be drawn under different themes.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
    Var(String),
}

/// A concrete 24-bit color stored in buffer cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// Convert a concrete color. Variables need a `ColorContext` and come
    /// back as `None` here.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Var(_) => None,
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
