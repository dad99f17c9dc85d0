//! Element tree for the table.

use tessera_dom::{Border, Color, Edges, Element, Size, Style};

use super::column::Column;
use super::row::TableRow;
use super::sort::INACTIVE_INDICATOR;
use super::state::{DataTable, TableProps, SELECT_KEY};

/// Width of the leading checkbox column.
const SELECT_WIDTH: u16 = 8;

pub(crate) const ACTION_SORT: &str = "sort";
pub(crate) const ACTION_TOGGLE: &str = "toggle";

impl DataTable {
    /// Build the element tree for the current props and state.
    ///
    /// Loading wins over the empty state; neither renders a header.
    pub fn view<R: TableRow>(&self, props: &TableProps<'_, R>) -> Element {
        let id = props.id;
        let root = Element::col()
            .id(id)
            .width(Size::Fill)
            .style(
                Style::new()
                    .border(Border::Rounded)
                    .border_color(Color::var("table.border")),
            );

        if props.loading {
            return root
                .data("state", "loading")
                .child(placeholder(format!("{id}-loading"), "Loading..."));
        }
        if props.rows.is_empty() {
            return root
                .data("state", "empty")
                .child(placeholder(format!("{id}-empty"), "No records found"));
        }

        root.data("state", "ready")
            .child(self.build_header(props))
            .child(self.build_body(props))
    }

    fn build_header<R: TableRow>(&self, props: &TableProps<'_, R>) -> Element {
        let id = props.id;
        let select = props.selectable.then(|| {
            Element::text("Select")
                .id(format!("{id}-header-{SELECT_KEY}"))
                .width(Size::Fixed(SELECT_WIDTH))
                .padding(Edges::horizontal(1))
        });

        Element::row()
            .id(format!("{id}-header"))
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .style(
                Style::new()
                    .background(Color::var("table.header_bg"))
                    .foreground(Color::var("table.header_fg"))
                    .bold(),
            )
            .maybe_child(select)
            .children_from(props.columns.iter().map(|col| self.build_header_cell(id, col)))
    }

    fn build_header_cell(&self, table_id: &str, column: &Column) -> Element {
        let direction = column
            .sortable
            .then(|| self.sort_state().direction_for(&column.key));
        let title = match direction {
            Some(active) => {
                let indicator = active.map_or(INACTIVE_INDICATOR, |d| d.indicator());
                format!("{} {}", column.title, indicator)
            }
            None => column.title.clone(),
        };

        let cell = Element::text(title)
            .id(format!("{table_id}-header-{}", column.key))
            .width(column.width.to_size())
            .height(Size::Fixed(1))
            .padding(Edges::horizontal(1))
            .data("action", ACTION_SORT)
            .data("column", column.key.as_str());

        match direction {
            Some(active) => cell
                .data("sort", active.map_or("none", |d| d.as_str()))
                .clickable(true)
                .focusable(true),
            None => cell,
        }
    }

    fn build_body<R: TableRow>(&self, props: &TableProps<'_, R>) -> Element {
        let rows = self.sorted_rows(props);
        Element::col()
            .id(format!("{}-body", props.id))
            .width(Size::Fill)
            .children_from(
                rows.into_iter()
                    .enumerate()
                    .map(|(position, row)| self.build_row(props, row, position)),
            )
    }

    fn build_row<R: TableRow>(&self, props: &TableProps<'_, R>, row: &R, position: usize) -> Element {
        let row_id = row.id();
        let element_id = format!("{}-row-{}", props.id, row_id.element_key());
        let data = row_id.to_data();
        let is_selected = self.is_selected(&row_id);

        let style = if is_selected {
            Style::new()
                .background(Color::var("table.row_selected"))
                .foreground(Color::var("table.row_selected_fg"))
        } else if position % 2 == 0 {
            Style::new().background(Color::var("table.row_alt"))
        } else {
            Style::new()
        };

        let checkbox = props.selectable.then(|| {
            Element::text(if is_selected { "[x]" } else { "[ ]" })
                .id(format!("{element_id}-{SELECT_KEY}"))
                .width(Size::Fixed(SELECT_WIDTH))
                .padding(Edges::horizontal(1))
                .clickable(true)
                .data("action", ACTION_TOGGLE)
                .data("row", data.as_str())
        });

        let cells = props.columns.iter().map(|col| {
            let text = match row.field(&col.field) {
                Some(value) => value.to_string(),
                None => {
                    log::trace!("[{}] row '{}' has no field '{}'", props.id, row_id, col.field);
                    String::new()
                }
            };
            Element::text(text)
                .id(format!("{element_id}-cell-{}", col.key))
                .width(col.width.to_size())
                .height(Size::Fixed(1))
                .padding(Edges::horizontal(1))
        });

        Element::row()
            .id(element_id.as_str())
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .style(style)
            .clickable(props.selectable)
            .focusable(props.selectable)
            .data("action", ACTION_TOGGLE)
            .data("row", data)
            .data("selected", if is_selected { "true" } else { "false" })
            .maybe_child(checkbox)
            .children_from(cells)
    }
}

fn placeholder(id: String, text: &str) -> Element {
    Element::text(text)
        .id(id)
        .width(Size::Fill)
        .padding(Edges::horizontal(1))
        .style(Style::new().foreground(Color::var("muted")).italic())
}
