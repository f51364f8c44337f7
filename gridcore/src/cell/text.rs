//! Text cell editor.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::{CellDisplay, CellRef, EditPhase, EventResult};
use crate::grid::DataGrid;
use crate::row::GridRow;
use crate::value::CellValue;

/// Fallback message when a validator fails without one.
const INVALID_VALUE: &str = "Invalid value";

/// Internal state for a text cell editor.
#[derive(Debug, Default)]
struct TextCellInner {
    /// Lifecycle phase.
    phase: EditPhase,
    /// Local edit buffer.
    buffer: String,
    /// Value the buffer was seeded from; restored on cancel.
    original: String,
    /// Inline error message while rejected.
    error: Option<String>,
}

/// Controller for an editable text cell.
///
/// Implements the full edit lifecycle: activation seeds a local buffer,
/// commit runs the column validator, a failing validator puts the cell in
/// [`EditPhase::Rejected`] and takes the grid-wide error lock, and typing
/// again optimistically clears the error before revalidation.
///
/// # Example
///
/// ```ignore
/// let cell = grid.text_cell(1, "age");
/// cell.begin_edit();
/// cell.set_buffer("15");
/// if !cell.commit().await {
///     // rejected: cell.error() carries the message, other cells are
///     // blocked until this one resolves
/// }
/// ```
#[derive(Debug)]
pub struct TextCellEditor<R: GridRow> {
    /// Handle to the owning grid.
    grid: DataGrid<R>,
    /// The cell this controller drives.
    cell: CellRef,
    /// Internal state.
    inner: Arc<RwLock<TextCellInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
    /// Focus request flag (checked by the renderer).
    focus_requested: Arc<AtomicBool>,
    /// One-shot shake flag, armed on rejection.
    shake_requested: Arc<AtomicBool>,
    /// Edit session generation; stale validator resolutions are dropped
    /// when it no longer matches.
    generation: Arc<AtomicU64>,
}

impl<R: GridRow> TextCellEditor<R> {
    /// Create a controller for one cell.
    pub fn new(grid: &DataGrid<R>, row_index: usize, column_id: impl Into<String>) -> Self {
        Self {
            grid: grid.clone(),
            cell: CellRef::new(row_index, column_id),
            inner: Arc::new(RwLock::new(TextCellInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
            focus_requested: Arc::new(AtomicBool::new(false)),
            shake_requested: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The cell this controller drives.
    pub fn cell(&self) -> &CellRef {
        &self.cell
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> EditPhase {
        self.inner.read().map(|g| g.phase).unwrap_or_default()
    }

    /// Whether an edit buffer is open (editing, validating or rejected).
    pub fn is_editing(&self) -> bool {
        self.phase() != EditPhase::Viewing
    }

    /// Current inline error message.
    pub fn error(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.error.clone())
    }

    /// Current edit buffer contents.
    pub fn buffer(&self) -> String {
        self.inner.read().map(|g| g.buffer.clone()).unwrap_or_default()
    }

    /// The committed value this cell displays while viewing.
    pub fn current_text(&self) -> String {
        self.grid
            .cell_value(self.cell.row_index, &self.cell.column_id)
            .as_text()
    }

    /// Whether another cell holds the error lock.
    pub fn is_blocked(&self) -> bool {
        self.grid.is_blocked(&self.cell)
    }

    /// Open the edit buffer, seeding it with the current value.
    ///
    /// Refused while the grid is read-only, while another cell holds the
    /// error lock, or when the cell is not viewing.
    pub fn begin_edit(&self) -> EventResult {
        if !self.grid.edit_mode() || self.is_blocked() {
            return EventResult::Ignored;
        }
        let Ok(mut g) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if g.phase != EditPhase::Viewing {
            return EventResult::Ignored;
        }
        g.original = self.current_text();
        g.buffer = g.original.clone();
        g.phase = EditPhase::Editing;
        g.error = None;
        drop(g);
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.focus_requested.store(true, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    /// Replace the edit buffer (typing).
    ///
    /// Typing while rejected optimistically clears the error and the
    /// grid-wide lock before any revalidation happens.
    pub fn set_buffer(&self, text: impl Into<String>) {
        let release_lock;
        {
            let Ok(mut g) = self.inner.write() else {
                return;
            };
            match g.phase {
                EditPhase::Editing => {
                    g.buffer = text.into();
                    release_lock = false;
                }
                EditPhase::Rejected => {
                    g.buffer = text.into();
                    g.error = None;
                    g.phase = EditPhase::Editing;
                    release_lock = true;
                }
                _ => return,
            }
        }
        if release_lock {
            self.release_error_lock();
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Commit the edit buffer (blur / Enter).
    ///
    /// An unchanged buffer closes the editor without running the
    /// validator or publishing anything. Otherwise the column validator
    /// (if any) runs; on success the value commits through the mutation
    /// gateway, on failure the cell enters [`EditPhase::Rejected`], takes
    /// the error lock, and requests a shake plus refocus.
    ///
    /// Returns `true` when the editor closed cleanly (committed or
    /// unchanged), `false` on rejection or when there was nothing to
    /// commit.
    pub async fn commit(&self) -> bool {
        let (buffer, original) = {
            let Ok(g) = self.inner.read() else {
                return false;
            };
            if g.phase != EditPhase::Editing && g.phase != EditPhase::Rejected {
                return false;
            }
            (g.buffer.clone(), g.original.clone())
        };

        // Unchanged value: close without validator call or publish
        if buffer == original {
            if let Ok(mut g) = self.inner.write() {
                g.phase = EditPhase::Viewing;
                g.error = None;
            }
            self.release_error_lock();
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }

        let value = CellValue::Text(buffer);
        let generation = self.generation.load(Ordering::SeqCst);

        let Some(validator) = self.grid.column_validator(&self.cell.column_id) else {
            self.finish_commit(value);
            return true;
        };

        if let Ok(mut g) = self.inner.write() {
            g.phase = EditPhase::Validating;
        }
        self.dirty.store(true, Ordering::SeqCst);

        let result = validator
            .check(&value, &self.cell.column_id, self.cell.row_index)
            .await;

        // Stale resolution: the edit session moved on while the
        // validator was in flight
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!(
                "stale validation for row {} column {} ignored",
                self.cell.row_index,
                self.cell.column_id
            );
            return false;
        }
        {
            let Ok(g) = self.inner.read() else {
                return false;
            };
            if g.phase != EditPhase::Validating {
                return false;
            }
        }

        if result.is_valid() {
            self.finish_commit(value);
            return true;
        }

        if let Ok(mut g) = self.inner.write() {
            g.phase = EditPhase::Rejected;
            g.error = Some(result.message.unwrap_or_else(|| INVALID_VALUE.to_string()));
        }
        self.grid.set_cell_with_error(Some(self.cell.clone()));
        self.shake_requested.store(true, Ordering::SeqCst);
        self.focus_requested.store(true, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        false
    }

    /// Close the editor, reverting the buffer to the original value.
    ///
    /// Serves both the Escape key and the explicit dismiss affordance on
    /// the error box; clears the error and the grid-wide lock.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut g) = self.inner.write() {
            g.buffer = g.original.clone();
            g.phase = EditPhase::Viewing;
            g.error = None;
        }
        self.release_error_lock();
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Observe the one-shot shake request armed on rejection.
    pub fn take_shake(&self) -> bool {
        self.shake_requested.swap(false, Ordering::SeqCst)
    }

    /// Observe the one-shot focus request.
    pub fn take_focus_request(&self) -> bool {
        self.focus_requested.swap(false, Ordering::SeqCst)
    }

    /// Static projection for read-only rendering.
    pub fn display(&self) -> CellDisplay {
        self.grid
            .cell_display(self.cell.row_index, &self.cell.column_id)
    }

    /// Check if the grid has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Commit a validated (or validator-less) value and close the editor.
    fn finish_commit(&self, value: CellValue) {
        self.grid
            .update_data(self.cell.row_index, &self.cell.column_id, value);
        if let Ok(mut g) = self.inner.write() {
            g.phase = EditPhase::Viewing;
            g.error = None;
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.release_error_lock();
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Clear the grid-wide error lock if this cell holds it.
    fn release_error_lock(&self) {
        if self.grid.cell_with_error().as_ref() == Some(&self.cell) {
            self.grid.set_cell_with_error(None);
        }
    }
}

impl<R: GridRow> Clone for TextCellEditor<R> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid.clone(),
            cell: self.cell.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            focus_requested: Arc::clone(&self.focus_requested),
            shake_requested: Arc::clone(&self.shake_requested),
            generation: Arc::clone(&self.generation),
        }
    }
}
