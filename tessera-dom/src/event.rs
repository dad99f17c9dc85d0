/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at the focused element
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse click event, targeted at the clicked element
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Key press aimed at `target` with no modifiers.
    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: Some(target.into()),
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Left click on `target`. Coordinates are left at the origin.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key { target, .. } | Self::Click { target, .. } => target.as_deref(),
            Self::Resize { .. } => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// A key crossterm reports that has no meaning here (media keys, etc.)
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Build a targeted key event from a crossterm key press.
/// Key releases and repeats come back as `None`.
pub fn from_key_event(target: Option<String>, event: crossterm::event::KeyEvent) -> Option<Event> {
    use crossterm::event::KeyEventKind;
    if event.kind != KeyEventKind::Press {
        return None;
    }
    Some(Event::Key {
        target,
        key: event.code.into(),
        modifiers: event.modifiers.into(),
    })
}
