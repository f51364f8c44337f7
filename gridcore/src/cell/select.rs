//! Select cell editor.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{CellDisplay, CellRef};
use crate::column::SelectOption;
use crate::grid::DataGrid;
use crate::row::GridRow;
use crate::value::CellValue;

/// Controller for an editable select cell.
///
/// Select cells have no edit buffer: choosing an option short-circuits
/// straight from viewing to a gateway `validate_and_update` call. The
/// blocked-by-other-error rule still applies, and choosing the current
/// value is a no-op.
#[derive(Debug)]
pub struct SelectCellEditor<R: GridRow> {
    /// Handle to the owning grid.
    grid: DataGrid<R>,
    /// The cell this controller drives.
    cell: CellRef,
    /// Whether a validation is in flight (disables the control).
    validating: Arc<AtomicBool>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<R: GridRow> SelectCellEditor<R> {
    /// Create a controller for one cell.
    pub fn new(grid: &DataGrid<R>, row_index: usize, column_id: impl Into<String>) -> Self {
        Self {
            grid: grid.clone(),
            cell: CellRef::new(row_index, column_id),
            validating: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The cell this controller drives.
    pub fn cell(&self) -> &CellRef {
        &self.cell
    }

    /// The column's options.
    pub fn options(&self) -> Vec<SelectOption> {
        self.grid
            .column(&self.cell.column_id)
            .map(|c| c.options)
            .unwrap_or_default()
    }

    /// The currently stored option value.
    pub fn current(&self) -> String {
        self.grid
            .cell_value(self.cell.row_index, &self.cell.column_id)
            .as_text()
    }

    /// Whether another cell holds the error lock.
    pub fn is_blocked(&self) -> bool {
        self.grid.is_blocked(&self.cell)
    }

    /// Whether a validation is in flight.
    pub fn is_validating(&self) -> bool {
        self.validating.load(Ordering::SeqCst)
    }

    /// Choose an option by stored value.
    ///
    /// Choosing the current value is a no-op that reports success.
    /// Unknown or disabled options are refused. Otherwise the choice goes
    /// through the gateway: `true` when the value committed, `false` when
    /// the column validator rejected it (reported via
    /// `on_validation_error`).
    pub async fn choose(&self, value: &str) -> bool {
        if !self.grid.edit_mode() || self.is_blocked() || self.is_validating() {
            return false;
        }
        if value == self.current() {
            return true;
        }
        let known = self
            .grid
            .column(&self.cell.column_id)
            .and_then(|c| c.option(value).map(|o| !o.disabled))
            .unwrap_or(false);
        if !known {
            log::debug!(
                "select cell row {} column {}: option {:?} unknown or disabled",
                self.cell.row_index,
                self.cell.column_id,
                value
            );
            return false;
        }

        self.validating.store(true, Ordering::SeqCst);
        let committed = self
            .grid
            .validate_and_update(
                self.cell.row_index,
                &self.cell.column_id,
                CellValue::Text(value.to_string()),
            )
            .await;
        self.validating.store(false, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        committed
    }

    /// Static projection for read-only rendering: a badge when the
    /// current option declares an intent, its label otherwise.
    pub fn display(&self) -> CellDisplay {
        self.grid
            .cell_display(self.cell.row_index, &self.cell.column_id)
    }

    /// Check if the cell has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<R: GridRow> Clone for SelectCellEditor<R> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            cell: self.cell.clone(),
            validating: Arc::clone(&self.validating),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
