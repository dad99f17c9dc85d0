use std::cell::RefCell;

use tessera::dom::layout::layout;
use tessera::dom::render::{render_to_buffer, render_to_buffer_themed};
use tessera::dom::{
    click_at, find_element, Buffer, Color, ColorContext, Element, Event, Key, MouseButton, Rect,
};
use tessera::prelude::*;
use tessera::widgets::table::SortState;

fn init_logger() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}

fn users() -> Vec<Record> {
    vec![
        Record::new(1)
            .set("name", "Charlie")
            .set("email", "charlie@example.com")
            .set("age", 35),
        Record::new(2)
            .set("name", "Alice")
            .set("email", "alice@example.com")
            .set("age", 28),
        Record::new(3)
            .set("name", "Bob")
            .set("email", "bob@example.com")
            .set("age", 42),
    ]
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("email", "Email"),
        Column::new("age", "Age").sortable(true).fixed(8),
    ]
}

fn order(table: &DataTable, props: &TableProps<'_, Record>) -> Vec<RowId> {
    table.sorted_rows(props).iter().map(|r| r.id()).collect()
}

fn ids(values: &[i64]) -> Vec<RowId> {
    values.iter().map(|&n| RowId::Int(n)).collect()
}

fn data<'a>(view: &'a Element, id: &str, key: &str) -> Option<&'a str> {
    find_element(view, id).and_then(|el| el.get_data(key))
}

fn text_of<'a>(view: &'a Element, id: &str) -> Option<&'a str> {
    find_element(view, id).and_then(|el| el.text_content())
}

fn body_order(view: &Element) -> Vec<String> {
    find_element(view, "table-body")
        .map(|body| body.children().iter().map(|row| row.id.clone()).collect())
        .unwrap_or_default()
}

fn draw(view: &Element, width: u16, height: u16) -> Buffer {
    let rects = layout(view, Rect::new(0, 0, width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(view, &rects, &mut buf);
    buf
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_header_clicks_cycle_ascending_descending() {
    init_logger();
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut table = DataTable::new();

    assert_eq!(data(&table.view(&props), "table-header-name", "sort"), Some("none"));

    let click = Event::click("table-header-name");
    assert_eq!(table.handle_event(&props, &click), EventResult::Consumed);
    assert_eq!(data(&table.view(&props), "table-header-name", "sort"), Some("asc"));
    assert_eq!(order(&table, &props), ids(&[2, 3, 1]));

    table.handle_event(&props, &click);
    assert_eq!(data(&table.view(&props), "table-header-name", "sort"), Some("desc"));
    assert_eq!(order(&table, &props), ids(&[1, 3, 2]));

    table.handle_event(&props, &click);
    assert_eq!(data(&table.view(&props), "table-header-name", "sort"), Some("asc"));
    assert_eq!(order(&table, &props), ids(&[2, 3, 1]));
}

#[test]
fn test_switching_columns_starts_ascending() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut table = DataTable::new();

    table.sort_by(&props, "name");
    table.sort_by(&props, "name");
    assert_eq!(table.sort_state().direction(), SortDirection::Descending);

    table.sort_by(&props, "age");
    assert_eq!(table.sort_state().column(), Some("age"));
    assert_eq!(table.sort_state().direction(), SortDirection::Ascending);
    assert_eq!(order(&table, &props), ids(&[2, 1, 3]));

    let view = table.view(&props);
    assert_eq!(data(&view, "table-header-name", "sort"), Some("none"));
    assert_eq!(data(&view, "table-header-age", "sort"), Some("asc"));
}

#[test]
fn test_sort_indicators() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut table = DataTable::new();

    let view = table.view(&props);
    assert_eq!(text_of(&view, "table-header-name"), Some("Name ↕"));
    assert_eq!(text_of(&view, "table-header-email"), Some("Email"));
    assert_eq!(data(&view, "table-header-email", "sort"), None);

    table.sort_by(&props, "name");
    assert_eq!(text_of(&table.view(&props), "table-header-name"), Some("Name ▲"));
    table.sort_by(&props, "name");
    assert_eq!(text_of(&table.view(&props), "table-header-name"), Some("Name ▼"));
}

#[test]
fn test_sorting_does_not_mutate_rows() {
    let rows = users();
    let before = rows.clone();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut table = DataTable::new();

    table.sort_by(&props, "name");
    let _ = table.view(&props);
    table.sort_by(&props, "name");
    let _ = table.view(&props);

    assert_eq!(rows, before);
}

#[test]
fn test_non_sortable_header_changes_nothing() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut table = DataTable::new();
    table.sort_by(&props, "age");
    let sort_before: SortState = table.sort_state().clone();
    let order_before = order(&table, &props);

    let result = table.handle_event(&props, &Event::click("table-header-email"));

    assert_eq!(result, EventResult::Ignored);
    assert_eq!(table.sort_state(), &sort_before);
    assert_eq!(order(&table, &props), order_before);
}

#[test]
fn test_sort_by_unknown_column_is_ignored() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut table = DataTable::new();

    assert!(!table.sort_by(&props, "missing"));
    assert_eq!(table.sort_state().column(), None);
}

#[test]
fn test_two_rows_by_name_from_json() {
    let rows = Record::list_from_json_str(r#"[{"id": 1, "name": "b"}, {"id": 2, "name": "a"}]"#)
        .unwrap();
    let columns = vec![Column::new("name", "Name").sortable(true)];
    let props = TableProps::new(&rows, &columns);
    let mut table = DataTable::new();

    table.sort_by(&props, "name");
    assert_eq!(order(&table, &props), ids(&[2, 1]));
    assert_eq!(body_order(&table.view(&props)), vec!["table-row-i:2", "table-row-i:1"]);

    table.sort_by(&props, "name");
    assert_eq!(order(&table, &props), ids(&[1, 2]));
}

#[test]
fn test_equal_keys_keep_input_order() {
    let rows = vec![
        Record::new(10).set("team", "red"),
        Record::new(11).set("team", "blue"),
        Record::new(12).set("team", "red"),
        Record::new(13).set("team", "blue"),
    ];
    let columns = vec![Column::new("team", "Team").sortable(true)];
    let props = TableProps::new(&rows, &columns);
    let mut table = DataTable::new();

    table.sort_by(&props, "team");
    assert_eq!(order(&table, &props), ids(&[11, 13, 10, 12]));
    table.sort_by(&props, "team");
    assert_eq!(order(&table, &props), ids(&[10, 12, 11, 13]));
}

#[test]
fn test_enter_and_space_on_header_sort() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let mut table = DataTable::new();

    let enter = Event::key("table-header-age", Key::Enter);
    assert!(table.handle_event(&props, &enter).is_consumed());
    assert_eq!(table.sort_state().direction_for("age"), Some(SortDirection::Ascending));

    let space = Event::key("table-header-age", Key::Char(' '));
    assert!(table.handle_event(&props, &space).is_consumed());
    assert_eq!(table.sort_state().direction_for("age"), Some(SortDirection::Descending));

    let other = Event::key("table-header-age", Key::Char('x'));
    assert_eq!(table.handle_event(&props, &other), EventResult::Ignored);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_selection_survives_sort() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns).selectable(true);
    let mut table = DataTable::new();

    assert_eq!(
        table.handle_event(&props, &Event::click("table-row-i:2")),
        EventResult::Consumed
    );
    assert_eq!(body_order(&table.view(&props))[1], "table-row-i:2");

    table.sort_by(&props, "name");
    assert!(table.is_selected(&RowId::Int(2)));

    let view = table.view(&props);
    assert_eq!(body_order(&view)[0], "table-row-i:2");
    assert_eq!(data(&view, "table-row-i:2", "selected"), Some("true"));
    assert_eq!(data(&view, "table-row-i:1", "selected"), Some("false"));
    let row = find_element(&view, "table-row-i:2").unwrap();
    assert_eq!(row.style.background, Some(Color::var("table.row_selected")));
    assert_eq!(text_of(&view, "table-row-i:2-select"), Some("[x]"));
    assert_eq!(text_of(&view, "table-row-i:1-select"), Some("[ ]"));
}

#[test]
fn test_callback_receives_rows_in_selection_order() {
    let rows = users();
    let columns = columns();
    let calls = RefCell::new(Vec::new());
    let on_change = |selected: &[&Record]| {
        calls
            .borrow_mut()
            .push(selected.iter().map(|r| r.id()).collect::<Vec<_>>());
    };
    let props = TableProps::new(&rows, &columns)
        .selectable(true)
        .on_selection_change(&on_change);
    let mut table = DataTable::new();

    table.handle_event(&props, &Event::click("table-row-i:3-select"));
    table.handle_event(&props, &Event::click("table-row-i:1"));
    table.handle_event(&props, &Event::key("table-row-i:3", Key::Char(' ')));

    assert_eq!(*calls.borrow(), vec![ids(&[3]), ids(&[3, 1]), ids(&[1])]);
    assert_eq!(table.selection().keys(), ids(&[1]).as_slice());
}

#[test]
fn test_enter_on_row_does_not_toggle() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns).selectable(true);
    let mut table = DataTable::new();

    let result = table.handle_event(&props, &Event::key("table-row-i:1", Key::Enter));
    assert_eq!(result, EventResult::Ignored);
    assert!(table.selection().is_empty());
}

#[test]
fn test_selection_requires_selectable() {
    let rows = users();
    let columns = columns();
    let calls = RefCell::new(0);
    let on_change = |_: &[&Record]| *calls.borrow_mut() += 1;
    let props = TableProps::new(&rows, &columns).on_selection_change(&on_change);
    let mut table = DataTable::new();

    let view = table.view(&props);
    assert!(find_element(&view, "table-header-select").is_none());
    assert!(find_element(&view, "table-row-i:1-select").is_none());

    assert_eq!(
        table.handle_event(&props, &Event::click("table-row-i:1")),
        EventResult::Ignored
    );
    assert!(!table.toggle_row(&props, &RowId::Int(1)));
    assert!(table.selection().is_empty());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_toggle_unknown_row_is_ignored() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns).selectable(true);
    let mut table = DataTable::new();

    assert!(!table.toggle_row(&props, &RowId::Int(99)));
    assert!(!table.toggle_row(&props, &RowId::from("1")));
    assert!(table.selection().is_empty());
}

#[test]
fn test_click_position_resolves_to_row() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns).selectable(true);
    let mut table = DataTable::new();

    let view = table.view(&props);
    let rects = layout(&view, Rect::new(0, 0, 60, 10));
    let row = rects["table-row-i:3"];
    let event = click_at(&rects, &view, row.right() - 1, row.y, MouseButton::Left);
    assert_eq!(event.target(), Some("table-row-i:3"));

    assert!(table.handle_event(&props, &event).is_consumed());
    assert!(table.is_selected(&RowId::Int(3)));
}

#[test]
fn test_integer_and_text_ids_with_same_display_stay_apart() {
    let rows = vec![
        Record::new(1).set("name", "int"),
        Record::new("1").set("name", "text"),
        Record::new("1-select").set("name", "dashed"),
    ];
    let columns = vec![Column::new("name", "Name")];
    let props = TableProps::new(&rows, &columns).selectable(true);
    let mut table = DataTable::new();
    assert_eq!(DataTable::validate(&props), Ok(()));

    let view = table.view(&props);
    assert_eq!(
        body_order(&view),
        vec!["table-row-i:1", "table-row-s:1", "table-row-s:1%2Dselect"]
    );
    assert!(find_element(&view, "table-row-i:1-select").is_some());
    assert!(find_element(&view, "table-row-s:1-select").is_some());

    let rects = layout(&view, Rect::new(0, 0, 40, 8));
    assert_ne!(rects["table-row-i:1"].y, rects["table-row-s:1"].y);
    let second = rects["table-row-s:1"];
    let event = click_at(&rects, &view, second.right() - 1, second.y, MouseButton::Left);
    assert_eq!(event.target(), Some("table-row-s:1"));

    assert!(table.handle_event(&props, &event).is_consumed());
    assert!(table.is_selected(&RowId::from("1")));
    assert!(!table.is_selected(&RowId::Int(1)));
    assert!(!table.is_selected(&RowId::from("1-select")));

    table.handle_event(&props, &Event::click("table-row-s:1%2Dselect-select"));
    assert!(table.is_selected(&RowId::from("1-select")));
    assert_eq!(table.selection().len(), 2);
}

// ============================================================================
// Placeholders and cells
// ============================================================================

#[test]
fn test_empty_rows_render_empty_state() {
    let rows: Vec<Record> = Vec::new();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let table = DataTable::new();

    let view = table.view(&props);
    assert_eq!(view.get_data("state"), Some("empty"));
    assert_eq!(text_of(&view, "table-empty"), Some("No records found"));
    assert!(find_element(&view, "table-header").is_none());
    assert!(find_element(&view, "table-body").is_none());

    let buf = draw(&view, 40, 5);
    assert!(buf.line(1).contains("No records found"));
}

#[test]
fn test_loading_wins_over_rows_and_empty_state() {
    let columns = columns();
    let table = DataTable::new();

    let rows = users();
    let view = table.view(&TableProps::new(&rows, &columns).loading(true));
    assert_eq!(text_of(&view, "table-loading"), Some("Loading..."));
    assert!(find_element(&view, "table-header").is_none());
    assert!(find_element(&view, "table-row-i:1").is_none());

    let empty: Vec<Record> = Vec::new();
    let view = table.view(&TableProps::new(&empty, &columns).loading(true));
    assert!(find_element(&view, "table-loading").is_some());
    assert!(find_element(&view, "table-empty").is_none());
}

#[test]
fn test_missing_field_renders_empty_cell() {
    init_logger();
    let rows = vec![
        Record::new(1).set("name", "Dana"),
        Record::new(2).set("name", "Eve").set("age", 2.5),
    ];
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let table = DataTable::new();

    let view = table.view(&props);
    assert_eq!(text_of(&view, "table-row-i:1-cell-name"), Some("Dana"));
    assert_eq!(text_of(&view, "table-row-i:1-cell-email"), Some(""));
    assert_eq!(text_of(&view, "table-row-i:1-cell-age"), Some(""));
    assert_eq!(text_of(&view, "table-row-i:2-cell-age"), Some("2.5"));
}

#[test]
fn test_custom_id_prefix() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns).id("people").selectable(true);
    let table = DataTable::new();

    let view = table.view(&props);
    assert_eq!(view.id, "people");
    assert!(find_element(&view, "people-header-name").is_some());
    assert!(find_element(&view, "people-header-select").is_some());
    assert!(find_element(&view, "people-row-i:2-select").is_some());
}

#[test]
fn test_rows_are_striped() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns);
    let table = DataTable::new();

    let view = table.view(&props);
    let alt = Some(Color::var("table.row_alt"));
    assert_eq!(find_element(&view, "table-row-i:1").unwrap().style.background, alt);
    assert_eq!(find_element(&view, "table-row-i:2").unwrap().style.background, None);
    assert_eq!(find_element(&view, "table-row-i:3").unwrap().style.background, alt);
}

#[test]
fn test_rendered_table_shows_header_and_rows() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns).selectable(true);
    let mut table = DataTable::new();
    table.sort_by(&props, "age");

    let buf = draw(&table.view(&props), 70, 8);
    let lines = buf.lines();
    assert!(lines[0].starts_with('╭'));
    assert!(lines[1].contains("Select"));
    assert!(lines[1].contains("Age ▲"));
    assert!(lines[2].contains("Alice"));
    assert!(lines[2].contains("[ ]"));
    assert!(lines[3].contains("Charlie"));
    assert!(lines[4].contains("Bob"));
    assert!(lines[5].starts_with('╰'));
}

#[test]
fn test_themed_render_uses_selected_color() {
    let rows = users();
    let columns = columns();
    let props = TableProps::new(&rows, &columns).selectable(true);
    let mut table = DataTable::new();
    table.toggle_row(&props, &RowId::Int(1));

    let theme = DefaultTheme::new();
    let view = table.view(&props);
    let rects = layout(&view, Rect::new(0, 0, 60, 8));
    let mut buf = Buffer::new(60, 8);
    render_to_buffer_themed(&view, &rects, &mut buf, &theme);

    let selected = ColorContext::new(&theme)
        .resolve(&Color::var("table.row_selected"))
        .unwrap();
    let row = rects["table-row-i:1"];
    assert_eq!(buf.get(row.x + 2, row.y).unwrap().bg, selected);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_reports_duplicates() {
    let rows = users();
    let columns = columns();
    assert_eq!(DataTable::validate(&TableProps::new(&rows, &columns)), Ok(()));

    let dup_columns = vec![Column::new("name", "Name"), Column::new("name", "Also name")];
    assert_eq!(
        DataTable::validate(&TableProps::new(&rows, &dup_columns)),
        Err(PropError::DuplicateColumnKey { key: "name".into() })
    );

    let dup_rows = vec![Record::new(1), Record::new(2), Record::new(1)];
    let err = DataTable::validate(&TableProps::new(&dup_rows, &columns)).unwrap_err();
    assert_eq!(err, PropError::DuplicateRowId { id: RowId::Int(1) });
    assert_eq!(err.to_string(), "Duplicate row id '1'");
}

#[test]
fn test_validate_reserves_select_key_when_selectable() {
    let rows = users();
    let columns = vec![Column::new("select", "Pick")];

    assert_eq!(DataTable::validate(&TableProps::new(&rows, &columns)), Ok(()));
    assert_eq!(
        DataTable::validate(&TableProps::new(&rows, &columns).selectable(true)),
        Err(PropError::ReservedColumnKey { key: "select".into() })
    );
}
