use tessera_dom::Edges;

/// Callback receiving the text the field wants to hold next.
pub type ChangeCallback<'a> = &'a dyn Fn(&str);

/// Frame style of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    /// Surface background with a single border.
    Filled,
    /// Rounded border, no background.
    #[default]
    Outlined,
    /// No frame. The text is underlined.
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    /// Padding inside the field frame.
    pub fn padding(self) -> Edges {
        match self {
            InputSize::Small => Edges::symmetric(0, 1),
            InputSize::Medium => Edges::symmetric(0, 2),
            InputSize::Large => Edges::symmetric(1, 3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Password,
}

/// Whether a password field shows its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

impl Visibility {
    pub fn toggle(self) -> Self {
        match self {
            Visibility::Masked => Visibility::Revealed,
            Visibility::Revealed => Visibility::Masked,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Masked => "masked",
            Visibility::Revealed => "revealed",
        }
    }
}

/// Props for [`InputField`](super::InputField).
///
/// The field is fully controlled: `value` is whatever the caller holds, and
/// every edit is reported through `on_change` instead of being stored.
///
/// ```
/// use tessera::widgets::input::{InputProps, InputType};
///
/// let props = InputProps::new("hunter2")
///     .label("Password")
///     .input_type(InputType::Password)
///     .clearable(true);
/// assert_eq!(props.label, Some("Password"));
/// ```
pub struct InputProps<'a> {
    pub value: &'a str,
    pub on_change: Option<ChangeCallback<'a>>,
    pub label: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub helper_text: Option<&'a str>,
    /// Shown in place of the helper text while `invalid` is set.
    pub error_message: Option<&'a str>,
    pub disabled: bool,
    pub invalid: bool,
    pub variant: InputVariant,
    pub size: InputSize,
    pub input_type: InputType,
    pub clearable: bool,
    /// Prefix for every element id in the view.
    pub id: &'a str,
}

impl<'a> InputProps<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            on_change: None,
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            disabled: false,
            invalid: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            input_type: InputType::default(),
            clearable: false,
            id: "input",
        }
    }

    pub fn on_change(mut self, callback: ChangeCallback<'a>) -> Self {
        self.on_change = Some(callback);
        self
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn helper_text(mut self, text: &'a str) -> Self {
        self.helper_text = Some(text);
        self
    }

    pub fn error_message(mut self, message: &'a str) -> Self {
        self.error_message = Some(message);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = id;
        self
    }

    pub(crate) fn is_password(&self) -> bool {
        self.input_type == InputType::Password
    }

    /// The clear affordance is shown (and usable) right now.
    pub(crate) fn shows_clear(&self) -> bool {
        self.clearable && !self.disabled && !self.value.is_empty()
    }

    pub(crate) fn shows_toggle(&self) -> bool {
        self.is_password() && !self.disabled
    }
}

/// View state local to one field instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub visibility: Visibility,
    /// Cursor as a char index. `None` means the end of the text.
    pub cursor: Option<usize>,
}

/// A labeled text or password field.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    state: InputState,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility
    }

    /// Cursor position clamped to the current value.
    pub fn cursor(&self, props: &InputProps<'_>) -> usize {
        let len = props.value.chars().count();
        self.state.cursor.map_or(len, |c| c.min(len))
    }

    /// Text as drawn: one `•` per character while a password is masked.
    pub fn display_text(&self, props: &InputProps<'_>) -> String {
        if props.is_password() && self.state.visibility == Visibility::Masked {
            tessera_dom::text::mask(props.value, '•')
        } else {
            props.value.to_string()
        }
    }

    /// Flip password masking. The value is left alone.
    ///
    /// Returns false for text fields and disabled fields.
    pub fn toggle_visibility(&mut self, props: &InputProps<'_>) -> bool {
        if !props.shows_toggle() {
            return false;
        }
        self.state.visibility = self.state.visibility.toggle();
        log::debug!("[{}] visibility {}", props.id, self.state.visibility.as_str());
        true
    }

    /// Report an empty value. Requires `clearable` and an enabled field.
    pub fn clear(&mut self, props: &InputProps<'_>) -> bool {
        if !props.clearable || props.disabled {
            return false;
        }
        self.state.cursor = Some(0);
        self.emit(props, String::new());
        true
    }

    // -------------------------------------------------------------------------
    // Editing. Each computes the next text from `props.value` and reports it.
    // -------------------------------------------------------------------------

    pub fn insert_char(&mut self, props: &InputProps<'_>, c: char) {
        let cursor = self.cursor(props);
        let mut next = props.value.to_string();
        next.insert(byte_offset(props.value, cursor), c);
        self.state.cursor = Some(cursor + 1);
        self.emit(props, next);
    }

    /// Backspace. Returns false at the start of the text.
    pub fn delete_before(&mut self, props: &InputProps<'_>) -> bool {
        let cursor = self.cursor(props);
        if cursor == 0 {
            return false;
        }
        let mut next = props.value.to_string();
        next.remove(byte_offset(props.value, cursor - 1));
        self.state.cursor = Some(cursor - 1);
        self.emit(props, next);
        true
    }

    /// Delete key. Returns false at the end of the text.
    pub fn delete_at(&mut self, props: &InputProps<'_>) -> bool {
        let cursor = self.cursor(props);
        if cursor >= props.value.chars().count() {
            return false;
        }
        let mut next = props.value.to_string();
        next.remove(byte_offset(props.value, cursor));
        self.state.cursor = Some(cursor);
        self.emit(props, next);
        true
    }

    pub fn move_left(&mut self, props: &InputProps<'_>) {
        self.state.cursor = Some(self.cursor(props).saturating_sub(1));
    }

    pub fn move_right(&mut self, props: &InputProps<'_>) {
        let len = props.value.chars().count();
        self.state.cursor = Some((self.cursor(props) + 1).min(len));
    }

    pub fn move_home(&mut self) {
        self.state.cursor = Some(0);
    }

    pub fn move_end(&mut self) {
        self.state.cursor = None;
    }

    fn emit(&self, props: &InputProps<'_>, next: String) {
        log::debug!("[{}] change, {} chars", props.id, next.chars().count());
        if let Some(on_change) = props.on_change {
            on_change(&next);
        }
    }
}

/// Byte offset of char index `cursor`, or the end of the string.
fn byte_offset(s: &str, cursor: usize) -> usize {
    s.char_indices().nth(cursor).map_or(s.len(), |(i, _)| i)
}
