//! Headless editable data grid core.
//!
//! `gridcore` layers sorting, filtering, pagination, row selection and
//! validated inline cell editing on top of a caller-owned row collection.
//! It renders nothing: the [`DataGrid`] store derives a visible row
//! projection through a substitutable [`engine::RowModelEngine`], the
//! [`cell`] controllers drive the per-cell edit lifecycle, and committed
//! edits are published upward through callbacks.
//!
//! Three invariants hold grid-wide:
//! - committing an edit never resets the page the user is on (the
//!   [`SkipReset`] controller suppresses the auto-reset for one cycle);
//! - at most one cell holds a validation error at a time, and while it
//!   does every other cell is blocked from editing;
//! - edits are optimistic but reversible: a failing validator leaves the
//!   row collection untouched.

pub mod cell;
pub mod column;
pub mod engine;
pub mod error;
pub mod grid;
pub mod load;
pub mod row;
pub mod selection;
pub mod skip;
pub mod table_state;
pub mod validation;
pub mod value;

pub use cell::{
    CellDisplay, CellRef, CheckboxCellEditor, EditPhase, EventResult, SelectCellEditor,
    TextCellEditor,
};
pub use column::{Alignment, BadgeIntent, Column, EditorKind, SelectOption};
pub use error::ConfigError;
pub use grid::{DataGrid, GridBuilder, GridId};
pub use row::GridRow;
pub use selection::Selection;
pub use skip::SkipReset;
pub use table_state::{ColumnFilter, ColumnSort, PaginationState, TableState};
pub use validation::{CellValidator, ValidationResult};
pub use value::CellValue;

pub mod prelude {
    pub use crate::cell::{
        CellDisplay, CellRef, CheckboxCellEditor, EditPhase, EventResult, SelectCellEditor,
        TextCellEditor,
    };
    pub use crate::column::{Alignment, BadgeIntent, Column, EditorKind, SelectOption};
    pub use crate::engine::{BasicEngine, RowModel, RowModelEngine, RowModelInput};
    pub use crate::error::ConfigError;
    pub use crate::grid::{DataGrid, GridBuilder, GridId};
    pub use crate::load::LoadPhase;
    pub use crate::row::GridRow;
    pub use crate::selection::Selection;
    pub use crate::skip::SkipReset;
    pub use crate::table_state::{ColumnFilter, ColumnSort, PaginationState, TableState};
    pub use crate::validation::{CellValidator, ValidationResult, rules};
    pub use crate::value::CellValue;
}
