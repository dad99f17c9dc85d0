//! Event handling for the input field.

use tessera_dom::{find_element, Event, Key, MouseButton};

use super::render::{ACTION_CLEAR, ACTION_EDIT, ACTION_TOGGLE};
use super::state::{InputField, InputProps};
use crate::widgets::events::EventResult;

impl InputField {
    /// Handle a targeted event.
    ///
    /// Keys aimed at the field edit the text. The clear and visibility
    /// buttons respond to click, Enter or Space. A disabled field ignores
    /// everything.
    pub fn handle_event(&mut self, props: &InputProps<'_>, event: &Event) -> EventResult {
        if props.disabled {
            return EventResult::Ignored;
        }
        let Some(target) = event.target() else {
            return EventResult::Ignored;
        };

        let view = self.view(props);
        let Some(action) = find_element(&view, target).and_then(|el| el.get_data("action")) else {
            return EventResult::Ignored;
        };
        log::trace!("[{}] {} on '{}'", props.id, action, target);

        match (action, event) {
            (ACTION_EDIT, Event::Key { key, modifiers, .. }) => {
                // Leave shortcuts to the caller.
                if modifiers.ctrl || modifiers.alt {
                    return EventResult::Ignored;
                }
                self.on_key(props, *key)
            }
            (ACTION_EDIT, Event::Click { button: MouseButton::Left, .. }) => EventResult::Consumed,
            (ACTION_CLEAR, event) if is_press(event) => consumed(self.clear(props)),
            (ACTION_TOGGLE, event) if is_press(event) => consumed(self.toggle_visibility(props)),
            _ => EventResult::Ignored,
        }
    }

    fn on_key(&mut self, props: &InputProps<'_>, key: Key) -> EventResult {
        match key {
            Key::Char(c) => self.insert_char(props, c),
            Key::Backspace => {
                self.delete_before(props);
            }
            Key::Delete => {
                self.delete_at(props);
            }
            Key::Left => self.move_left(props),
            Key::Right => self.move_right(props),
            Key::Home => self.move_home(),
            Key::End => self.move_end(),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }
}

/// Left click, Enter, or Space.
fn is_press(event: &Event) -> bool {
    match event {
        Event::Click { button, .. } => *button == MouseButton::Left,
        Event::Key { key, modifiers, .. } => {
            modifiers.none() && matches!(key, Key::Enter | Key::Char(' '))
        }
        Event::Resize { .. } => false,
    }
}

fn consumed(handled: bool) -> EventResult {
    if handled {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}
