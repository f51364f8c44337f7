//! Row-model engine seam.
//!
//! The grid treats row-model computation (filter, sort, paginate) as an
//! external collaborator: a pure function from the current state to the
//! visible row projection, recomputed on every state change. The bundled
//! [`BasicEngine`] is the default; callers substitute their own engine at
//! build time via [`GridBuilder::engine`](crate::grid::GridBuilder::engine).

mod basic;

pub use basic::BasicEngine;

use crate::column::Column;
use crate::row::GridRow;
use crate::selection::Selection;
use crate::table_state::{ColumnFilter, ColumnSort, PaginationState};

/// Everything a row-model engine sees: rows, columns and controlled state.
///
/// Disabled features arrive empty (`sorting`/`column_filters` empty,
/// `global_filter` blank, `pagination` `None`), so engines never need to
/// know about feature flags.
pub struct RowModelInput<'a, R: GridRow> {
    /// The full row collection, in caller order.
    pub rows: &'a [R],
    /// Column definitions.
    pub columns: &'a [Column],
    /// Sort order, highest priority first.
    pub sorting: &'a [ColumnSort],
    /// Per-column filters.
    pub column_filters: &'a [ColumnFilter],
    /// Global filter query.
    pub global_filter: &'a str,
    /// Pagination state; `None` when pagination is disabled.
    pub pagination: Option<PaginationState>,
    /// Current row selection.
    pub selection: &'a Selection,
}

/// The visible row projection derived from a [`RowModelInput`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowModel {
    /// Indices into the original row collection for the current page, in
    /// display order. Indices (not clones) so edits address original
    /// positions.
    pub visible_rows: Vec<usize>,
    /// Number of rows after filtering (all pages).
    pub row_count: usize,
    /// Number of pages.
    pub page_count: usize,
    /// Whether a previous page exists.
    pub can_previous_page: bool,
    /// Whether a next page exists.
    pub can_next_page: bool,
}

/// A row-model engine: pure projection from state to visible rows.
///
/// Implementations must be pure with respect to their input; the grid
/// recomputes the model on demand and never caches it.
pub trait RowModelEngine<R: GridRow>: Send + Sync {
    /// Compute the visible row projection.
    fn compute(&self, input: RowModelInput<'_, R>) -> RowModel;
}
