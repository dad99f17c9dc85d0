//! Table props, component state, and the sort/selection operations.

use std::collections::HashSet;

use super::column::Column;
use super::row::TableRow;
use super::sort::{sorted, SortState};
use super::value::RowId;
use crate::error::PropError;
use crate::widgets::selection::Selection;

/// Key of the checkbox column in a selectable table.
pub(crate) const SELECT_KEY: &str = "select";

/// Callback receiving the full selection, in the order rows were selected.
pub type SelectionCallback<'a, R> = &'a dyn Fn(&[&R]);

/// Everything the caller hands the table on each render.
///
/// ```
/// use tessera::widgets::table::{Column, Record, TableProps};
///
/// let rows = vec![Record::new(1).set("name", "Atharav")];
/// let columns = vec![Column::new("name", "Name").sortable(true)];
/// let props = TableProps::new(&rows, &columns).selectable(true).id("users");
/// assert_eq!(props.id, "users");
/// ```
pub struct TableProps<'a, R: TableRow> {
    pub rows: &'a [R],
    pub columns: &'a [Column],
    pub loading: bool,
    pub selectable: bool,
    pub on_selection_change: Option<SelectionCallback<'a, R>>,
    /// Prefix for every element id in the view.
    pub id: &'a str,
}

impl<'a, R: TableRow> TableProps<'a, R> {
    pub fn new(rows: &'a [R], columns: &'a [Column]) -> Self {
        Self {
            rows,
            columns,
            loading: false,
            selectable: false,
            on_selection_change: None,
            id: "table",
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn on_selection_change(mut self, callback: SelectionCallback<'a, R>) -> Self {
        self.on_selection_change = Some(callback);
        self
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = id;
        self
    }

    pub(crate) fn column(&self, key: &str) -> Option<&'a Column> {
        self.columns.iter().find(|c| c.key == key)
    }
}

/// Sort and selection. Starts unset and lives as long as the table does.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub sort: SortState,
    pub selection: Selection<RowId>,
}

/// A sortable, selectable data table.
///
/// The table owns only its [`TableState`]. Rows and columns come in through
/// [`TableProps`] on every call, and [`DataTable::view`] is a pure function of
/// the props and the state.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    state: TableState,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn sort_state(&self) -> &SortState {
        &self.state.sort
    }

    pub fn selection(&self) -> &Selection<RowId> {
        &self.state.selection
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.state.selection.is_selected(id)
    }

    /// Rows in display order. The caller's slice is left as it was.
    pub fn sorted_rows<'r, R: TableRow>(&self, props: &TableProps<'r, R>) -> Vec<&'r R> {
        sorted(props.rows, props.columns, &self.state.sort)
    }

    /// Selected rows in selection order. Ids missing from `rows` are skipped.
    pub fn selected_rows<'r, R: TableRow>(&self, props: &TableProps<'r, R>) -> Vec<&'r R> {
        self.state
            .selection
            .keys()
            .iter()
            .filter_map(|id| props.rows.iter().find(|row| &row.id() == id))
            .collect()
    }

    /// Handle a click on the header of column `key`.
    ///
    /// Returns false (and changes nothing) when the column doesn't exist or
    /// isn't sortable.
    pub fn sort_by<R: TableRow>(&mut self, props: &TableProps<'_, R>, key: &str) -> bool {
        let Some(column) = props.column(key) else {
            log::debug!("[{}] sort ignored, no column '{}'", props.id, key);
            return false;
        };
        if !self.state.sort.click(column) {
            return false;
        }
        log::debug!(
            "[{}] sorted by '{}' {}",
            props.id,
            key,
            self.state.sort.direction().as_str()
        );
        true
    }

    /// Toggle one row's membership in the selection, then report the whole
    /// selection to `on_selection_change`.
    ///
    /// Returns false when the table isn't selectable or no row has `id`.
    pub fn toggle_row<R: TableRow>(&mut self, props: &TableProps<'_, R>, id: &RowId) -> bool {
        if !props.selectable {
            return false;
        }
        if !props.rows.iter().any(|row| &row.id() == id) {
            log::debug!("[{}] toggle ignored, no row '{}'", props.id, id);
            return false;
        }

        let now_selected = self.state.selection.toggle(id.clone());
        log::debug!(
            "[{}] row '{}' {} ({} selected)",
            props.id,
            id,
            if now_selected { "selected" } else { "deselected" },
            self.state.selection.len()
        );

        if let Some(callback) = props.on_selection_change {
            let rows = self.selected_rows(props);
            callback(&rows);
        }
        true
    }

    /// Check props for duplicate column keys and duplicate row ids.
    ///
    /// A selectable table also reserves the column key `select`, whose
    /// header id would collide with the checkbox header. Rendering does not
    /// call this; it's for callers that want to catch bad input early.
    pub fn validate<R: TableRow>(props: &TableProps<'_, R>) -> Result<(), PropError> {
        let mut keys = HashSet::new();
        for column in props.columns {
            if props.selectable && column.key == SELECT_KEY {
                return Err(PropError::ReservedColumnKey {
                    key: column.key.clone(),
                });
            }
            if !keys.insert(column.key.as_str()) {
                return Err(PropError::DuplicateColumnKey {
                    key: column.key.clone(),
                });
            }
        }

        let mut ids = HashSet::new();
        for row in props.rows {
            let id = row.id();
            if ids.contains(&id) {
                return Err(PropError::DuplicateRowId { id });
            }
            ids.insert(id);
        }
        Ok(())
    }
}
