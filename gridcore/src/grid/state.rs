//! Grid store: controlled state, derived row model, facades.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::cell::CellRef;
use crate::column::Column;
use crate::engine::{BasicEngine, RowModel, RowModelEngine, RowModelInput};
use crate::error::ConfigError;
use crate::load::{LoadPhase, LoadState};
use crate::row::GridRow;
use crate::selection::Selection;
use crate::skip::SkipReset;
use crate::table_state::{ColumnFilter, ColumnSort, PaginationState, TableState};
use crate::validation::CellValidator;
use crate::value::CellValue;

/// Unique identifier for a DataGrid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// Which optional features this grid instance runs with.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FeatureFlags {
    pub sorting: bool,
    pub filtering: bool,
    pub row_selection: bool,
    pub pagination: bool,
}

pub(crate) type DataChangeFn<R> = Arc<dyn Fn(&[R]) + Send + Sync>;
pub(crate) type SelectionChangeFn = Arc<dyn Fn(&Selection) + Send + Sync>;
pub(crate) type ValidationErrorFn = Arc<dyn Fn(&str, &str) + Send + Sync>;
pub(crate) type GlobalFilterChangeFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Caller-facing callbacks, fired outside the state lock.
pub(crate) struct Callbacks<R> {
    pub on_data_change: Option<DataChangeFn<R>>,
    pub on_row_selection_change: Option<SelectionChangeFn>,
    pub on_validation_error: Option<ValidationErrorFn>,
    pub on_global_filter_change: Option<GlobalFilterChangeFn>,
}

impl<R> Default for Callbacks<R> {
    fn default() -> Self {
        Self {
            on_data_change: None,
            on_row_selection_change: None,
            on_validation_error: None,
            on_global_filter_change: None,
        }
    }
}

/// Internal state for a DataGrid.
pub(crate) struct GridInner<R: GridRow> {
    /// Column definitions.
    pub columns: Vec<Column>,
    /// The current row collection (caller-owned data, current proposal).
    pub rows: Vec<R>,
    /// Feature flags fixed at build time.
    pub flags: FeatureFlags,
    /// Whether inline editing is enabled grid-wide.
    pub edit_mode: bool,
    /// Sort order, highest priority first.
    pub sorting: Vec<ColumnSort>,
    /// Per-column filters.
    pub column_filters: Vec<ColumnFilter>,
    /// Global filter query.
    pub global_filter: String,
    /// Row selection, keyed by row id.
    pub selection: Selection,
    /// Pagination state.
    pub pagination: PaginationState,
    /// The single live error lock. While set, every other cell is blocked.
    pub cell_with_error: Option<CellRef>,
    /// Load lifecycle.
    pub load: LoadState,
}

/// A headless editable data grid.
///
/// `DataGrid<R>` layers sorting, filtering, pagination, row selection and
/// validated inline editing on top of a caller-owned row collection. The
/// visible projection is recomputed through a [`RowModelEngine`] on every
/// [`model`](DataGrid::model) call; committed edits are published upward
/// through `on_data_change`.
///
/// Cloning is cheap and shares state, so cell editors and application
/// code can hold their own handles.
///
/// # Example
///
/// ```
/// use gridcore::{CellValue, Column, DataGrid, EditorKind, GridRow};
///
/// #[derive(Debug, Clone)]
/// struct Item { id: String, name: String }
///
/// impl GridRow for Item {
///     fn id(&self) -> String { self.id.clone() }
///     fn field(&self, column_id: &str) -> CellValue {
///         match column_id {
///             "name" => self.name.clone().into(),
///             _ => CellValue::Null,
///         }
///     }
///     fn set_field(&mut self, column_id: &str, value: CellValue) {
///         if let ("name", CellValue::Text(s)) = (column_id, value) {
///             self.name = s;
///         }
///     }
/// }
///
/// let grid = DataGrid::builder(vec![
///     Column::new("name", "Name", 30).sortable().editor(EditorKind::Text),
/// ])
/// .rows(vec![Item { id: "1".into(), name: "Widget".into() }])
/// .build()
/// .unwrap();
///
/// assert_eq!(grid.model().row_count, 1);
/// ```
pub struct DataGrid<R: GridRow> {
    /// Unique identifier.
    id: GridId,
    /// Internal state.
    pub(crate) inner: Arc<RwLock<GridInner<R>>>,
    /// Row-model engine.
    pub(crate) engine: Arc<dyn RowModelEngine<R>>,
    /// Caller callbacks.
    pub(crate) callbacks: Arc<Callbacks<R>>,
    /// Skip-reset controller consulted by the auto-reset cycle.
    pub(crate) skip: SkipReset,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<R: GridRow> std::fmt::Debug for DataGrid<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGrid")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<R: GridRow> Clone for DataGrid<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            engine: Arc::clone(&self.engine),
            callbacks: Arc::clone(&self.callbacks),
            skip: self.skip.clone(),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<R: GridRow> DataGrid<R> {
    /// Start building a grid over the given columns.
    pub fn builder(columns: Vec<Column>) -> GridBuilder<R> {
        GridBuilder::new(columns)
    }

    /// Get the unique ID.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// The skip-reset controller for this grid.
    ///
    /// The mutation gateway arms it automatically; callers running their
    /// own mutation flows can arm it to keep the next auto-reset cycle
    /// from resetting the page.
    pub fn skip_reset(&self) -> &SkipReset {
        &self.skip
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Find a column by id.
    pub fn column(&self, column_id: &str) -> Option<Column> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.columns.iter().find(|c| c.id == column_id).cloned())
    }

    /// Get a column's validator, if any.
    pub(crate) fn column_validator(&self, column_id: &str) -> Option<CellValidator> {
        self.inner.read().ok().and_then(|g| {
            g.columns
                .iter()
                .find(|c| c.id == column_id)
                .and_then(|c| c.validate.clone())
        })
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Get the number of rows in the collection (unfiltered).
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by original index.
    pub fn row(&self, index: usize) -> Option<R> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    /// Get the current row collection.
    pub fn rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Read one cell's value.
    pub fn cell_value(&self, row_index: usize, column_id: &str) -> CellValue {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(row_index).map(|r| r.field(column_id)))
            .unwrap_or(CellValue::Null)
    }

    /// Replace the row collection.
    ///
    /// Selection is preserved for ids that still exist; ids with no
    /// surviving row are pruned. Runs one auto-reset cycle.
    pub fn set_rows(&self, rows: Vec<R>) {
        let selection_changed;
        let snapshot;
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            g.rows = rows;
            let live: HashSet<String> = g.rows.iter().map(|r| r.id()).collect();
            let before = g.selection.len();
            g.selection.retain_ids(&live);
            selection_changed = g.selection.len() != before;
            snapshot = selection_changed.then(|| g.selection.clone());
        }
        self.dirty.store(true, Ordering::SeqCst);
        if let (true, Some(selection)) = (selection_changed, snapshot)
            && let Some(cb) = &self.callbacks.on_row_selection_change
        {
            cb(&selection);
        }
        self.auto_reset_page_index();
    }

    // -------------------------------------------------------------------------
    // Edit mode & error lock
    // -------------------------------------------------------------------------

    /// Whether inline editing is enabled.
    pub fn edit_mode(&self) -> bool {
        self.inner.read().map(|g| g.edit_mode).unwrap_or(false)
    }

    /// Enable or disable inline editing grid-wide.
    ///
    /// Disabling editing also clears the error lock; read-only cells
    /// render the static projection.
    pub fn set_edit_mode(&self, on: bool) {
        if let Ok(mut g) = self.inner.write() {
            g.edit_mode = on;
            if !on {
                g.cell_with_error = None;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// The cell currently holding the error lock, if any.
    pub fn cell_with_error(&self) -> Option<CellRef> {
        self.inner.read().ok().and_then(|g| g.cell_with_error.clone())
    }

    /// Set or clear the error lock.
    pub fn set_cell_with_error(&self, cell: Option<CellRef>) {
        if let Ok(mut g) = self.inner.write() {
            g.cell_with_error = cell;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check whether a cell is blocked because *another* cell holds the
    /// error lock.
    pub fn is_blocked(&self, cell: &CellRef) -> bool {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.cell_with_error.as_ref().map(|c| c != cell))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort order.
    pub fn sorting(&self) -> Vec<ColumnSort> {
        self.inner
            .read()
            .map(|g| g.sorting.clone())
            .unwrap_or_default()
    }

    /// Replace the sort order. No-op when sorting is disabled; entries
    /// for unknown or unsortable columns are dropped.
    pub fn set_sorting(&self, sorting: Vec<ColumnSort>) {
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            if !g.flags.sorting {
                log::trace!("{}: sorting disabled, set_sorting ignored", self.id);
                return;
            }
            g.sorting = sorting
                .into_iter()
                .filter(|s| {
                    g.columns
                        .iter()
                        .any(|c| c.id == s.column_id && c.sortable)
                })
                .collect();
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.auto_reset_page_index();
    }

    /// Toggle sort for a column: unsorted -> ascending -> descending.
    ///
    /// Returns the new primary sort, or `None` if the column does not
    /// sort or sorting is disabled.
    pub fn toggle_sort(&self, column_id: &str) -> Option<ColumnSort> {
        let new_sort;
        {
            let Ok(mut g) = self.inner.write() else {
                return None;
            };
            if !g.flags.sorting
                || !g.columns.iter().any(|c| c.id == column_id && c.sortable)
            {
                return None;
            }
            new_sort = match g.sorting.first() {
                Some(s) if s.column_id == column_id => ColumnSort {
                    column_id: column_id.to_string(),
                    descending: !s.descending,
                },
                _ => ColumnSort::asc(column_id),
            };
            g.sorting = vec![new_sort.clone()];
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.auto_reset_page_index();
        Some(new_sort)
    }

    /// Clear the sort order.
    pub fn clear_sort(&self) {
        if let Ok(mut g) = self.inner.write() {
            g.sorting.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Get the current column filters.
    pub fn column_filters(&self) -> Vec<ColumnFilter> {
        self.inner
            .read()
            .map(|g| g.column_filters.clone())
            .unwrap_or_default()
    }

    /// Replace all column filters. No-op when filtering is disabled.
    pub fn set_column_filters(&self, filters: Vec<ColumnFilter>) {
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            if !g.flags.filtering {
                log::trace!("{}: filtering disabled, set_column_filters ignored", self.id);
                return;
            }
            g.column_filters = filters;
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.auto_reset_page_index();
    }

    /// Upsert one column filter; a `Null` value removes the filter.
    pub fn set_column_filter(&self, column_id: &str, value: impl Into<CellValue>) {
        let value = value.into();
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            if !g.flags.filtering {
                return;
            }
            g.column_filters.retain(|f| f.column_id != column_id);
            if !value.is_null() {
                g.column_filters.push(ColumnFilter {
                    column_id: column_id.to_string(),
                    value,
                });
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.auto_reset_page_index();
    }

    /// Get the global filter query.
    pub fn global_filter(&self) -> String {
        self.inner
            .read()
            .map(|g| g.global_filter.clone())
            .unwrap_or_default()
    }

    /// Set the global filter query. No-op when filtering is disabled.
    pub fn set_global_filter(&self, query: impl Into<String>) {
        let query = query.into();
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            if !g.flags.filtering {
                log::trace!("{}: filtering disabled, set_global_filter ignored", self.id);
                return;
            }
            g.global_filter = query.clone();
            self.dirty.store(true, Ordering::SeqCst);
        }
        if let Some(cb) = &self.callbacks.on_global_filter_change {
            cb(&query);
        }
        self.auto_reset_page_index();
    }

    // -------------------------------------------------------------------------
    // Selection facade
    // -------------------------------------------------------------------------

    /// Get the current selection state.
    pub fn selection(&self) -> Selection {
        self.inner
            .read()
            .map(|g| g.selection.clone())
            .unwrap_or_default()
    }

    /// Replace the selection state. No-op when selection is disabled.
    pub fn set_row_selection(&self, selection: Selection) {
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            if !g.flags.row_selection {
                return;
            }
            g.selection = selection;
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.notify_selection_changed();
    }

    /// Check if a row is selected by id.
    pub fn is_row_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Select or deselect a row by id. No-op when selection is disabled.
    pub fn set_row_selected(&self, id: &str, selected: bool) {
        let changed;
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            if !g.flags.row_selection {
                return;
            }
            changed = if selected {
                g.selection.insert(id)
            } else {
                g.selection.remove(id)
            };
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        if changed {
            self.notify_selection_changed();
        }
    }

    /// Toggle a row's selection. Returns `true` if the row is now
    /// selected; `false` when deselected or selection is disabled.
    pub fn toggle_row_selected(&self, id: &str) -> bool {
        let now_selected;
        {
            let Ok(mut g) = self.inner.write() else {
                return false;
            };
            if !g.flags.row_selection {
                return false;
            }
            now_selected = g.selection.toggle(id);
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.notify_selection_changed();
        now_selected
    }

    /// Select every row in the collection. No-op when selection is
    /// disabled.
    pub fn select_all(&self) {
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            if !g.flags.row_selection {
                return;
            }
            let ids: Vec<String> = g.rows.iter().map(|r| r.id()).collect();
            for id in ids {
                g.selection.insert(id);
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
        self.notify_selection_changed();
    }

    /// Reset the selection to empty.
    pub fn clear_selection(&self) {
        let changed;
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            changed = !g.selection.is_empty();
            g.selection.clear();
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        if changed {
            self.notify_selection_changed();
        }
    }

    /// Get the selected row objects from the current collection,
    /// independent of the current page.
    pub fn selected_rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| {
                g.rows
                    .iter()
                    .filter(|r| g.selection.is_selected(&r.id()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn notify_selection_changed(&self) {
        if let Some(cb) = &self.callbacks.on_row_selection_change {
            let selection = self.selection();
            cb(&selection);
        }
    }

    // -------------------------------------------------------------------------
    // Pagination facade
    // -------------------------------------------------------------------------

    /// Current zero-based page index.
    pub fn page_index(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.pagination.page_index)
            .unwrap_or(0)
    }

    /// Current page size.
    pub fn page_size(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.pagination.page_size)
            .unwrap_or(0)
    }

    /// Number of rows after filtering.
    pub fn row_count(&self) -> usize {
        self.model().row_count
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.model().page_count
    }

    /// Whether a previous page exists.
    pub fn can_previous_page(&self) -> bool {
        self.model().can_previous_page
    }

    /// Whether a next page exists.
    pub fn can_next_page(&self) -> bool {
        self.model().can_next_page
    }

    /// Replace the pagination state. No-op when pagination is disabled or
    /// the page size is zero.
    pub fn set_pagination(&self, pagination: PaginationState) {
        if pagination.page_size == 0 {
            log::debug!("{}: ignoring zero page size", self.id);
            return;
        }
        if let Ok(mut g) = self.inner.write() {
            if !g.flags.pagination {
                return;
            }
            g.pagination = pagination;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Go to the first page.
    pub fn first_page(&self) {
        self.go_to_page(0);
    }

    /// Go to the previous page; no-op on the first page.
    pub fn previous_page(&self) {
        let current = self.page_index();
        if current > 0 {
            self.go_to_page(current - 1);
        }
    }

    /// Go to the next page; no-op on the last page.
    pub fn next_page(&self) {
        if self.model().can_next_page {
            self.go_to_page(self.page_index() + 1);
        }
    }

    /// Go to the last page.
    pub fn last_page(&self) {
        let page_count = self.model().page_count;
        self.go_to_page(page_count.saturating_sub(1));
    }

    fn go_to_page(&self, index: usize) {
        if let Ok(mut g) = self.inner.write() {
            if !g.flags.pagination || g.pagination.page_index == index {
                return;
            }
            g.pagination.page_index = index;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Change the page size, clamping the page index so it stays within
    /// the recomputed page count. Zero is ignored.
    pub fn set_page_size(&self, page_size: usize) {
        if page_size == 0 {
            log::debug!("{}: ignoring zero page size", self.id);
            return;
        }
        let Ok(mut g) = self.inner.write() else {
            return;
        };
        if !g.flags.pagination {
            return;
        }
        g.pagination.page_size = page_size;
        let page_count = self.model_locked(&g).page_count;
        if g.pagination.page_index >= page_count {
            g.pagination.page_index = page_count.saturating_sub(1);
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Derived row model
    // -------------------------------------------------------------------------

    /// Compute the visible row projection from the current state.
    ///
    /// Pure and synchronous: the engine sees exactly the current rows and
    /// state, and nothing is cached between calls.
    pub fn model(&self) -> RowModel {
        self.inner
            .read()
            .map(|g| self.model_locked(&g))
            .unwrap_or_default()
    }

    fn model_locked(&self, g: &GridInner<R>) -> RowModel {
        static NO_SORT: Vec<ColumnSort> = Vec::new();
        static NO_FILTERS: Vec<ColumnFilter> = Vec::new();
        let input = RowModelInput {
            rows: &g.rows,
            columns: &g.columns,
            sorting: if g.flags.sorting { &g.sorting } else { &NO_SORT },
            column_filters: if g.flags.filtering {
                &g.column_filters
            } else {
                &NO_FILTERS
            },
            global_filter: if g.flags.filtering {
                &g.global_filter
            } else {
                ""
            },
            pagination: g.flags.pagination.then_some(g.pagination),
            selection: &g.selection,
        };
        self.engine.compute(input)
    }

    /// Clones of the rows on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| {
                self.model_locked(&g)
                    .visible_rows
                    .iter()
                    .filter_map(|&i| g.rows.get(i).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Serializable snapshot of the controlled state.
    pub fn state(&self) -> TableState {
        self.inner
            .read()
            .map(|g| TableState {
                sorting: g.sorting.clone(),
                column_filters: g.column_filters.clone(),
                global_filter: g.global_filter.clone(),
                selection: g.selection.clone(),
                pagination: g.flags.pagination.then_some(g.pagination),
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Auto-reset cycle
    // -------------------------------------------------------------------------

    /// Run one auto-reset cycle after a row-model-affecting change.
    ///
    /// If the skip controller is armed it is consumed and the page index
    /// is left untouched; otherwise the page index returns to zero.
    pub(crate) fn auto_reset_page_index(&self) {
        if self.skip.consume() {
            log::debug!("{}: page reset skipped for this cycle", self.id);
            return;
        }
        if let Ok(mut g) = self.inner.write() {
            if !g.flags.pagination || g.pagination.page_index == 0 {
                return;
            }
            log::debug!("{}: resetting page index to 0", self.id);
            g.pagination.page_index = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Load state
    // -------------------------------------------------------------------------

    /// Current load phase.
    pub fn load_phase(&self) -> LoadPhase {
        self.inner
            .read()
            .map(|g| g.load.phase())
            .unwrap_or_default()
    }

    /// Enter the loading phase.
    pub fn begin_loading(&self) {
        if let Ok(mut g) = self.inner.write() {
            g.load.begin_loading();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Leave the loading phase, arming the entrance one-shot and a
    /// highlight window.
    pub fn finish_loading(&self, highlight: Duration) {
        if let Ok(mut g) = self.inner.write() {
            g.load.finish_loading(highlight);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Observe the `Loading -> Loaded` transition exactly once.
    pub fn take_entrance(&self) -> bool {
        self.inner
            .write()
            .map(|mut g| g.load.take_entrance())
            .unwrap_or(false)
    }

    /// Whether the post-load highlight window is still open.
    pub fn is_highlighting(&self, now: Instant) -> bool {
        self.inner
            .write()
            .map(|mut g| g.load.is_highlighting(now))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the grid has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub(crate) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`DataGrid`].
///
/// Feature flags default to the original surface: sorting, filtering and
/// pagination on, row selection off, editing on, page size 10.
pub struct GridBuilder<R: GridRow> {
    columns: Vec<Column>,
    rows: Vec<R>,
    enable_sorting: bool,
    enable_filtering: bool,
    enable_row_selection: bool,
    enable_pagination: bool,
    edit_mode: bool,
    page_size: usize,
    page_index: usize,
    engine: Option<Arc<dyn RowModelEngine<R>>>,
    callbacks: Callbacks<R>,
}

impl<R: GridRow> GridBuilder<R> {
    fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            enable_sorting: true,
            enable_filtering: true,
            enable_row_selection: false,
            enable_pagination: true,
            edit_mode: true,
            page_size: 10,
            page_index: 0,
            engine: None,
            callbacks: Callbacks::default(),
        }
    }

    /// Set the initial row collection.
    pub fn rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self
    }

    /// Enable or disable sorting.
    pub fn enable_sorting(mut self, on: bool) -> Self {
        self.enable_sorting = on;
        self
    }

    /// Enable or disable column and global filtering.
    pub fn enable_filtering(mut self, on: bool) -> Self {
        self.enable_filtering = on;
        self
    }

    /// Enable or disable row selection.
    pub fn enable_row_selection(mut self, on: bool) -> Self {
        self.enable_row_selection = on;
        self
    }

    /// Enable or disable pagination.
    pub fn enable_pagination(mut self, on: bool) -> Self {
        self.enable_pagination = on;
        self
    }

    /// Enable or disable inline editing.
    pub fn edit_mode(mut self, on: bool) -> Self {
        self.edit_mode = on;
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the initial page index.
    pub fn page_index(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Substitute a custom row-model engine.
    pub fn engine(mut self, engine: impl RowModelEngine<R> + 'static) -> Self {
        self.engine = Some(Arc::new(engine));
        self
    }

    /// Called with the new row collection after every committed edit or
    /// removal.
    pub fn on_data_change(mut self, f: impl Fn(&[R]) + Send + Sync + 'static) -> Self {
        self.callbacks.on_data_change = Some(Arc::new(f));
        self
    }

    /// Called whenever the selection changes.
    pub fn on_row_selection_change(mut self, f: impl Fn(&Selection) + Send + Sync + 'static) -> Self {
        self.callbacks.on_row_selection_change = Some(Arc::new(f));
        self
    }

    /// Called with `(column_id, message)` when a gateway validation
    /// fails.
    pub fn on_validation_error(mut self, f: impl Fn(&str, &str) + Send + Sync + 'static) -> Self {
        self.callbacks.on_validation_error = Some(Arc::new(f));
        self
    }

    /// Called whenever the global filter query changes.
    pub fn on_global_filter_change(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.callbacks.on_global_filter_change = Some(Arc::new(f));
        self
    }

    /// Validate the configuration and build the grid.
    pub fn build(self) -> Result<DataGrid<R>, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.id.clone()) {
                return Err(ConfigError::DuplicateColumnId(column.id.clone()));
            }
            if column.editor == Some(crate::column::EditorKind::Select)
                && column.options.is_empty()
            {
                return Err(ConfigError::SelectWithoutOptions(column.id.clone()));
            }
        }

        let inner = GridInner {
            columns: self.columns,
            rows: self.rows,
            flags: FeatureFlags {
                sorting: self.enable_sorting,
                filtering: self.enable_filtering,
                row_selection: self.enable_row_selection,
                pagination: self.enable_pagination,
            },
            edit_mode: self.edit_mode,
            sorting: Vec::new(),
            column_filters: Vec::new(),
            global_filter: String::new(),
            selection: Selection::new(),
            pagination: PaginationState {
                page_index: self.page_index,
                page_size: self.page_size,
            },
            cell_with_error: None,
            load: LoadState::default(),
        };

        Ok(DataGrid {
            id: GridId::new(),
            inner: Arc::new(RwLock::new(inner)),
            engine: self
                .engine
                .unwrap_or_else(|| Arc::new(BasicEngine)),
            callbacks: Arc::new(self.callbacks),
            skip: SkipReset::new(),
            dirty: Arc::new(AtomicBool::new(false)),
        })
    }
}
