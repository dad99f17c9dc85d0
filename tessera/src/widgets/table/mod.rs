//! Sortable, selectable data table.
//!
//! # Example
//!
//! ```
//! use tessera::widgets::table::{Column, DataTable, Record, RowId, TableProps, TableRow};
//!
//! let rows = vec![
//!     Record::new(1).set("name", "b"),
//!     Record::new(2).set("name", "a"),
//! ];
//! let columns = vec![Column::new("name", "Name").sortable(true)];
//! let props = TableProps::new(&rows, &columns);
//!
//! let mut table = DataTable::new();
//! table.sort_by(&props, "name");
//! let order: Vec<_> = table.sorted_rows(&props).iter().map(|r| r.id()).collect();
//! assert_eq!(order, vec![RowId::Int(2), RowId::Int(1)]);
//! ```
//!
//! # Element ids
//!
//! With the default id `table`:
//!
//! - `table-loading` / `table-empty`: placeholders
//! - `table-header`, `table-header-{key}`, `table-header-select`
//! - `table-body`, `table-row-{row}`, `table-row-{row}-select`, `table-row-{row}-cell-{key}`
//!
//! where `{row}` is [`RowId::element_key`]: `i:7` for `RowId::Int(7)`, `s:ab`
//! for `RowId::Text("ab")`.

mod column;
mod events;
mod render;
mod row;
mod sort;
mod state;
mod value;

pub use column::{Column, ColumnWidth};
pub use row::{Record, TableRow};
pub use sort::{sorted, SortDirection, SortState, INACTIVE_INDICATOR};
pub use state::{DataTable, SelectionCallback, TableProps, TableState};
pub use value::{compare_fields, RowId, Value};
