//! Per-cell edit controllers.
//!
//! Each editable cell is driven by a controller implementing the
//! view -> edit -> (validating) -> (error | commit) lifecycle. Text cells
//! carry a local edit buffer and the full state machine; select and
//! checkbox cells short-circuit from viewing straight to a gateway call.
//!
//! All controllers share one grid-wide rule: while any cell holds the
//! error lock ([`DataGrid::cell_with_error`]), every *other* cell is
//! blocked from editing until that cell's error is resolved.

mod checkbox;
mod select;
mod text;

pub use checkbox::CheckboxCellEditor;
pub use select::SelectCellEditor;
pub use text::TextCellEditor;

use crate::column::{BadgeIntent, EditorKind};
use crate::grid::DataGrid;
use crate::row::GridRow;

/// Position of a cell: row index into the original collection plus
/// column id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row_index: usize,
    pub column_id: String,
}

impl CellRef {
    /// Create a cell reference.
    pub fn new(row_index: usize, column_id: impl Into<String>) -> Self {
        Self {
            row_index,
            column_id: column_id.into(),
        }
    }
}

/// Lifecycle phase of a cell edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    /// Showing the committed value.
    #[default]
    Viewing,
    /// A local edit buffer is open.
    Editing,
    /// The validator is running.
    Validating,
    /// Validation failed; the cell holds the error lock.
    Rejected,
}

/// Whether a controller acted on an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The interaction was handled.
    Consumed,
    /// The interaction was refused (read-only, blocked, wrong phase).
    Ignored,
}

/// Static projection of a cell for read-only rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellDisplay {
    /// Plain text.
    Text(String),
    /// Tagged badge, used when a select option declares an intent.
    Badge { label: String, intent: BadgeIntent },
}

impl<R: GridRow> DataGrid<R> {
    /// Create a text editor controller for one cell.
    pub fn text_cell(&self, row_index: usize, column_id: impl Into<String>) -> TextCellEditor<R> {
        TextCellEditor::new(self, row_index, column_id)
    }

    /// Create a select controller for one cell.
    pub fn select_cell(
        &self,
        row_index: usize,
        column_id: impl Into<String>,
    ) -> SelectCellEditor<R> {
        SelectCellEditor::new(self, row_index, column_id)
    }

    /// Create a checkbox controller for one cell.
    pub fn checkbox_cell(
        &self,
        row_index: usize,
        column_id: impl Into<String>,
    ) -> CheckboxCellEditor<R> {
        CheckboxCellEditor::new(self, row_index, column_id)
    }

    /// Static projection of a cell for read-only rendering.
    ///
    /// Select cells whose current option declares an intent render as a
    /// badge; everything else renders as plain text (select cells via
    /// their option label).
    pub fn cell_display(&self, row_index: usize, column_id: &str) -> CellDisplay {
        let value = self.cell_value(row_index, column_id);
        let text = value.as_text();
        if let Some(column) = self.column(column_id)
            && column.editor == Some(EditorKind::Select)
            && let Some(option) = column.option(&text)
        {
            return match option.intent {
                Some(intent) => CellDisplay::Badge {
                    label: option.label.clone(),
                    intent,
                },
                None => CellDisplay::Text(option.label.clone()),
            };
        }
        CellDisplay::Text(text)
    }
}
