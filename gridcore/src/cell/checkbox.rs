//! Checkbox cell editor.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{CellRef, EventResult};
use crate::grid::DataGrid;
use crate::row::GridRow;
use crate::value::CellValue;

/// Controller for an editable checkbox cell.
///
/// Checkbox cells short-circuit from viewing straight to an unconditional
/// `update_data` call; there is no buffer and no validator involved.
/// The blocked-by-other-error rule still applies, and writing the value
/// the cell already holds is a no-op.
#[derive(Debug)]
pub struct CheckboxCellEditor<R: GridRow> {
    /// Handle to the owning grid.
    grid: DataGrid<R>,
    /// The cell this controller drives.
    cell: CellRef,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<R: GridRow> CheckboxCellEditor<R> {
    /// Create a controller for one cell.
    pub fn new(grid: &DataGrid<R>, row_index: usize, column_id: impl Into<String>) -> Self {
        Self {
            grid: grid.clone(),
            cell: CellRef::new(row_index, column_id),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The cell this controller drives.
    pub fn cell(&self) -> &CellRef {
        &self.cell
    }

    /// Whether the stored value is checked.
    pub fn is_checked(&self) -> bool {
        self.grid
            .cell_value(self.cell.row_index, &self.cell.column_id)
            .is_truthy()
    }

    /// Whether another cell holds the error lock.
    pub fn is_blocked(&self) -> bool {
        self.grid.is_blocked(&self.cell)
    }

    /// Write a checked state through the gateway.
    ///
    /// Refused while the grid is read-only or another cell holds the
    /// error lock; writing the current state is ignored.
    pub fn set_checked(&self, checked: bool) -> EventResult {
        if !self.grid.edit_mode() || self.is_blocked() {
            return EventResult::Ignored;
        }
        if checked == self.is_checked() {
            return EventResult::Ignored;
        }
        self.grid.update_data(
            self.cell.row_index,
            &self.cell.column_id,
            CellValue::Bool(checked),
        );
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    /// Flip the checked state.
    pub fn toggle(&self) -> EventResult {
        self.set_checked(!self.is_checked())
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

impl<R: GridRow> Clone for CheckboxCellEditor<R> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            cell: self.cell.clone(),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
