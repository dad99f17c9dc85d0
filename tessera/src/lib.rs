//! Terminal UI components: a sortable, selectable data table and a
//! controlled text input.
//!
//! Components build [`tessera_dom`] element trees. Lay a tree out with
//! [`dom::layout::layout`] and draw it with
//! [`dom::render::render_to_buffer_themed`] against a
//! [`theme::DefaultTheme`].
//!
//! ```
//! use tessera::prelude::*;
//! use tessera::dom::{layout::layout, render::render_to_buffer, Buffer, Rect};
//!
//! let rows = vec![Record::new(1).set("name", "Atharav")];
//! let columns = vec![Column::new("name", "Name").sortable(true)];
//! let table = DataTable::new();
//! let view = table.view(&TableProps::new(&rows, &columns));
//!
//! let area = Rect::new(0, 0, 30, 5);
//! let rects = layout(&view, area);
//! let mut buf = Buffer::new(30, 5);
//! render_to_buffer(&view, &rects, &mut buf);
//! assert!(buf.line(2).contains("Atharav"));
//! ```

pub mod error;
pub mod theme;
pub mod widgets;

pub use tessera_dom as dom;

pub use error::{PropError, RowError};
pub use theme::DefaultTheme;
pub use widgets::{DataTable, EventResult, InputField, Selection};

/// Everything needed to build and drive the components.
pub mod prelude {
    pub use crate::error::{PropError, RowError};
    pub use crate::theme::DefaultTheme;
    pub use crate::widgets::input::{InputField, InputProps, InputSize, InputType, InputVariant};
    pub use crate::widgets::table::{
        Column, DataTable, Record, RowId, SortDirection, TableProps, TableRow, Value,
    };
    pub use crate::widgets::EventResult;
}
