use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tessera_dom::{
    click_at, from_key_event, hit_test, hit_test_any, Element, Event, Key, LayoutResult,
    Modifiers, MouseButton, Rect,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = HashMap::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    assert_eq!(hit_test_any(&layout, &root, 15, 11), Some("text".to_string()));
}

#[test]
fn test_hit_test_skips_disabled() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("x").id("off").clickable(true).disabled(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 10)),
        ("off", Rect::new(0, 0, 5, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 1, 0), Some("root".to_string()));
}

#[test]
fn test_click_at_targets_hit_element() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("ok").id("ok").clickable(true));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 10, 10)),
        ("ok", Rect::new(2, 2, 2, 1)),
    ]);

    let event = click_at(&layout, &root, 3, 2, MouseButton::Left);

    assert_eq!(event.target(), Some("ok"));
    let miss = click_at(&layout, &root, 9, 9, MouseButton::Left);
    assert_eq!(miss.target(), None);
}

// ============================================================================
// Crossterm conversion
// ============================================================================

#[test]
fn test_key_code_conversion() {
    assert_eq!(Key::from(KeyCode::Char('x')), Key::Char('x'));
    assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    assert_eq!(Key::from(KeyCode::Backspace), Key::Backspace);
    assert_eq!(Key::from(KeyCode::Null), Key::Other);
}

#[test]
fn test_modifier_conversion() {
    let mods = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert!(mods.ctrl);
    assert!(mods.shift);
    assert!(!mods.alt);
    assert!(Modifiers::from(KeyModifiers::NONE).none());
}

#[test]
fn test_from_key_event_press_only() {
    let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(
        from_key_event(Some("field".into()), press),
        Some(Event::key("field", Key::Enter))
    );

    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(from_key_event(Some("field".into()), release), None);
}

#[test]
fn test_resize_has_no_target() {
    let event = Event::Resize {
        width: 80,
        height: 24,
    };
    assert_eq!(event.target(), None);
}
