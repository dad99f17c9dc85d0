//! Sort state and the stable client-side sort.

use super::column::Column;
use super::row::TableRow;
use super::value::compare_fields;

/// Direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Short name used in element data (`asc` / `desc`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Arrow shown next to the active column title.
    pub fn indicator(self) -> char {
        match self {
            SortDirection::Ascending => '▲',
            SortDirection::Descending => '▼',
        }
    }
}

/// Indicator for a sortable column that is not the active one.
pub const INACTIVE_INDICATOR: char = '↕';

/// The active sort column (if any) and its direction.
///
/// The direction is meaningless while no column is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the active column.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction for `key` if it is the active column.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match self.column.as_deref() {
            Some(active) if active == key => Some(self.direction),
            _ => None,
        }
    }

    /// Apply a header click. Returns false when the column isn't sortable.
    ///
    /// Clicking the active column flips its direction. Clicking any other
    /// column makes it active at ascending.
    pub fn click(&mut self, column: &Column) -> bool {
        if !column.sortable {
            return false;
        }
        if self.column.as_deref() == Some(column.key.as_str()) {
            self.direction = self.direction.toggle();
        } else {
            self.column = Some(column.key.clone());
            self.direction = SortDirection::Ascending;
        }
        true
    }

}

/// Rows in display order for the given sort state.
///
/// Never touches `rows`. Equal keys keep their input order, in both
/// directions. An active key that matches no column (or a non-sortable one)
/// leaves the input order.
pub fn sorted<'r, R: TableRow>(rows: &'r [R], columns: &[Column], state: &SortState) -> Vec<&'r R> {
    let active = state
        .column()
        .and_then(|key| columns.iter().find(|c| c.key == key))
        .filter(|c| c.sortable);

    let Some(column) = active else {
        return rows.iter().collect();
    };

    let mut keyed: Vec<_> = rows.iter().map(|row| (row.field(&column.field), row)).collect();
    let direction = state.direction();
    keyed.sort_by(|(a, _), (b, _)| {
        let ord = compare_fields(a.as_ref(), b.as_ref());
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    keyed.into_iter().map(|(_, row)| row).collect()
}
