use crate::element::Element;
use crate::event::{Event, MouseButton};
use crate::layout::LayoutResult;

/// Find the deepest clickable, enabled element at the given coordinates.
/// Returns None if no such element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, true)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_element(layout, root, x, y, false)
}

/// Turn a raw click position into a targeted `Event::Click`.
pub fn click_at(layout: &LayoutResult, root: &Element, x: u16, y: u16, button: MouseButton) -> Event {
    Event::Click {
        target: hit_test(layout, root, x, y),
        x,
        y,
        button,
    }
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    clickable_only: bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.children().iter().rev() {
        if let Some(id) = hit_test_element(layout, child, x, y, clickable_only) {
            return Some(id);
        }
    }

    if !clickable_only || (element.clickable && !element.disabled) {
        Some(element.id.clone())
    } else {
        None
    }
}
