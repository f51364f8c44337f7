//! Controlled table state: sorting, filters, pagination snapshots.

use serde::{Deserialize, Serialize};

use crate::selection::Selection;
use crate::value::CellValue;

/// One entry of the sort order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    /// Column being sorted.
    pub column_id: String,
    /// Descending instead of ascending.
    pub descending: bool,
}

impl ColumnSort {
    /// Ascending sort on a column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: false,
        }
    }

    /// Descending sort on a column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: true,
        }
    }
}

/// A per-column filter value.
///
/// Text values match case-insensitively as substrings, booleans and
/// numbers match exactly; `Null` matches everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    /// Column being filtered.
    pub column_id: String,
    /// Filter value.
    pub value: CellValue,
}

impl ColumnFilter {
    /// Create a filter for a column.
    pub fn new(column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self {
            column_id: column_id.into(),
            value: value.into(),
        }
    }
}

/// Pagination state: current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 10,
        }
    }
}

/// Serializable snapshot of the grid's controlled state.
///
/// Everything a caller needs to persist and restore a grid's sort,
/// filter, selection and pagination configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableState {
    pub sorting: Vec<ColumnSort>,
    pub column_filters: Vec<ColumnFilter>,
    pub global_filter: String,
    pub selection: Selection,
    pub pagination: Option<PaginationState>,
}
