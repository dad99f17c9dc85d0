//! Element tree for the input field.

use tessera_dom::{Border, Color, Element, Size, Style};

use super::state::{InputField, InputProps, InputVariant, Visibility};

pub(crate) const ACTION_EDIT: &str = "edit";
pub(crate) const ACTION_CLEAR: &str = "clear";
pub(crate) const ACTION_TOGGLE: &str = "toggle";

impl InputField {
    /// Build the element tree for the current props and state.
    pub fn view(&self, props: &InputProps<'_>) -> Element {
        let id = props.id;
        let mut root = Element::col().id(id).width(Size::Fill);
        if props.is_password() {
            root = root.data("visibility", self.visibility().as_str());
        }

        let label = props.label.map(|label| {
            Element::text(label)
                .id(format!("{id}-label"))
                .style(Style::new().foreground(Color::var("input.label")).bold())
        });

        root.maybe_child(label)
            .child(self.build_field(props))
            .maybe_child(message(props))
    }

    fn build_field(&self, props: &InputProps<'_>) -> Element {
        let id = props.id;

        let text = if props.value.is_empty() {
            Element::text(props.placeholder.unwrap_or_default())
                .style(Style::new().foreground(Color::var("input.placeholder")).dim())
                .data("placeholder", "true")
        } else {
            let mut style = Style::new();
            if props.variant == InputVariant::Ghost {
                style = style.underline();
            }
            Element::text(self.display_text(props)).style(style)
        };
        let text = text
            .id(format!("{id}-text"))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .data("cursor", self.cursor(props).to_string());

        let clear = props.shows_clear().then(|| {
            Element::text("✕")
                .id(format!("{id}-clear"))
                .clickable(true)
                .data("action", ACTION_CLEAR)
        });

        let toggle = props.shows_toggle().then(|| {
            let label = match self.visibility() {
                Visibility::Masked => "[show]",
                Visibility::Revealed => "[hide]",
            };
            Element::text(label)
                .id(format!("{id}-toggle"))
                .clickable(true)
                .data("action", ACTION_TOGGLE)
        });

        Element::row()
            .id(format!("{id}-field"))
            .width(Size::Fill)
            .gap(1)
            .padding(props.size.padding())
            .style(frame_style(props))
            .focusable(!props.disabled)
            .clickable(!props.disabled)
            .disabled(props.disabled)
            .data("action", ACTION_EDIT)
            .child(text)
            .maybe_child(clear)
            .maybe_child(toggle)
    }
}

fn frame_style(props: &InputProps<'_>) -> Style {
    let style = match props.variant {
        InputVariant::Filled => Style::new()
            .background(Color::var("input.bg"))
            .border(Border::Single),
        InputVariant::Outlined => Style::new().border(Border::Rounded),
        InputVariant::Ghost => Style::new(),
    };

    let style = if props.invalid {
        style.border_color(Color::var("input.error"))
    } else {
        style.border_color(Color::var("input.border"))
    };

    if props.disabled {
        style.foreground(Color::var("input.disabled")).dim()
    } else {
        style
    }
}

/// Error text while invalid, helper text otherwise. Never both.
fn message(props: &InputProps<'_>) -> Option<Element> {
    let id = props.id;
    if props.invalid {
        props.error_message.map(|error| {
            Element::text(error)
                .id(format!("{id}-error"))
                .style(Style::new().foreground(Color::var("input.error")))
        })
    } else {
        props.helper_text.map(|helper| {
            Element::text(helper)
                .id(format!("{id}-helper"))
                .style(Style::new().foreground(Color::var("input.helper")))
        })
    }
}
