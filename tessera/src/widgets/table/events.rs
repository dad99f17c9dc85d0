//! Event handling for the table.

use tessera_dom::{find_element, Event, Key, MouseButton};

use super::render::{ACTION_SORT, ACTION_TOGGLE};
use super::row::TableRow;
use super::state::{DataTable, TableProps};
use super::value::RowId;
use crate::widgets::events::EventResult;

/// How the user activated an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activation {
    Click,
    Enter,
    Space,
}

impl DataTable {
    /// Handle a targeted event.
    ///
    /// Header cells sort on click, Enter or Space. Rows and their checkboxes
    /// toggle selection on click or Space. The target is looked up in a fresh
    /// view, so it has to be an id the current view contains.
    pub fn handle_event<R: TableRow>(&mut self, props: &TableProps<'_, R>, event: &Event) -> EventResult {
        let Some((target, activation)) = activation_of(event) else {
            return EventResult::Ignored;
        };

        let view = self.view(props);
        let Some(element) = find_element(&view, target) else {
            return EventResult::Ignored;
        };

        let handled = match element.get_data("action") {
            Some(ACTION_SORT) => {
                let Some(column) = element.get_data("column") else {
                    return EventResult::Ignored;
                };
                log::trace!("[{}] {:?} on header '{}'", props.id, activation, column);
                self.sort_by(props, column)
            }
            Some(ACTION_TOGGLE) if activation != Activation::Enter => {
                let Some(id) = element.get_data("row").and_then(RowId::from_data) else {
                    return EventResult::Ignored;
                };
                log::trace!("[{}] {:?} on row '{}'", props.id, activation, id);
                self.toggle_row(props, &id)
            }
            _ => false,
        };

        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

fn activation_of(event: &Event) -> Option<(&str, Activation)> {
    match event {
        Event::Click {
            target: Some(target),
            button: MouseButton::Left,
            ..
        } => Some((target.as_str(), Activation::Click)),
        Event::Key {
            target: Some(target),
            key,
            modifiers,
        } if modifiers.none() => match key {
            Key::Enter => Some((target.as_str(), Activation::Enter)),
            Key::Char(' ') => Some((target.as_str(), Activation::Space)),
            _ => None,
        },
        _ => None,
    }
}
