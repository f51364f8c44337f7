//! The data grid store.
//!
//! [`DataGrid`] owns the controlled table state (sorting, filters, global
//! filter, selection, pagination), the feature flags, the single-slot
//! error lock shared by every cell editor, and the mutation gateway that
//! editable cells commit through.

mod mutation;
mod state;

pub use state::{DataGrid, GridBuilder, GridId};
