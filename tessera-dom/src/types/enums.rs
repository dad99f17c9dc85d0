#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    /// Take all remaining space along the parent's main axis.
    #[default]
    Fill,
    /// Share remaining space by weight with other flex/fill siblings.
    Flex(u16),
    /// Size to content.
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Double,
    Rounded,
    Thick,
}

impl Border {
    /// Width of the border on each side.
    pub const fn size(&self) -> u16 {
        match self {
            Border::None => 0,
            _ => 1,
        }
    }

    /// Corner and edge glyphs: (top-left, top-right, bottom-left, bottom-right, horizontal, vertical).
    pub const fn glyphs(&self) -> Option<(char, char, char, char, char, char)> {
        match self {
            Border::None => None,
            Border::Single => Some(('┌', '┐', '└', '┘', '─', '│')),
            Border::Double => Some(('╔', '╗', '╚', '╝', '═', '║')),
            Border::Rounded => Some(('╭', '╮', '╰', '╯', '─', '│')),
            Border::Thick => Some(('┏', '┓', '┗', '┛', '━', '┃')),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub strikethrough: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
            strikethrough: false,
        }
    }

    /// Overlay `other` on top of `self`. Flags set in either survive.
    pub const fn merge(self, other: TextStyle) -> Self {
        Self {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            dim: self.dim || other.dim,
            strikethrough: self.strikethrough || other.strikethrough,
        }
    }
}
