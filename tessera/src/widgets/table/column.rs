//! Column descriptors.

use tessera_dom::Size;

/// Column width specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in characters.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

impl ColumnWidth {
    pub(crate) fn to_size(self) -> Size {
        match self {
            ColumnWidth::Fixed(w) => Size::Fixed(w),
            ColumnWidth::Flex(w) => Size::Flex(w),
        }
    }
}

/// A table column definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Unique identifier for this column.
    pub key: String,
    /// Header text displayed at the top.
    pub title: String,
    /// Row attribute shown in this column. Defaults to `key`.
    pub field: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Width specification.
    pub width: ColumnWidth,
}

impl Column {
    /// Create a new column with the given key and title.
    ///
    /// The column reads the row field named `key` and is not sortable.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            field: key.clone(),
            key,
            title: title.into(),
            sortable: false,
            width: ColumnWidth::default(),
        }
    }

    /// Read a different row field than the column key.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set a flex width for this column.
    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }
}
