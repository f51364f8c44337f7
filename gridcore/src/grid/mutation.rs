//! Mutation gateway.
//!
//! The two entry points editable cells commit through: `update_data`
//! writes unconditionally, `validate_and_update` runs the column's
//! validator first. Every committed mutation arms the skip-reset
//! controller so the page the user is editing stays put, then publishes
//! the new row collection through `on_data_change`.

use crate::row::GridRow;
use crate::value::CellValue;

use super::state::DataGrid;

impl<R: GridRow> DataGrid<R> {
    /// Replace one field of one row and publish the new collection.
    ///
    /// Never fails: an out-of-bounds `row_index` leaves the collection
    /// unchanged and publishes nothing (rows may legitimately have
    /// changed while an edit was in flight).
    pub fn update_data(&self, row_index: usize, column_id: &str, value: CellValue) {
        self.skip.request_skip();

        let snapshot = {
            let Ok(mut g) = self.inner.write() else {
                self.skip.consume();
                return;
            };
            let Some(slot) = g.rows.get_mut(row_index) else {
                log::debug!(
                    "{}: update_data for row {} out of bounds, ignored",
                    self.id(),
                    row_index
                );
                drop(g);
                self.skip.consume();
                return;
            };
            let mut row = slot.clone();
            row.set_field(column_id, value);
            *slot = row;
            g.rows.clone()
        };

        log::trace!(
            "{}: committed edit at row {} column {}",
            self.id(),
            row_index,
            column_id
        );
        self.mark_dirty();
        if let Some(cb) = &self.callbacks.on_data_change {
            cb(&snapshot);
        }
        self.auto_reset_page_index();
    }

    /// Validate a value against the column's validator, then write it.
    ///
    /// A column without a validator is treated as always valid. Returns
    /// `true` and commits via [`update_data`](DataGrid::update_data) when
    /// the validator passes; returns `false`, leaves the data untouched,
    /// and reports through `on_validation_error` when it fails. Exactly
    /// one of the two happens per call.
    pub async fn validate_and_update(
        &self,
        row_index: usize,
        column_id: &str,
        value: CellValue,
    ) -> bool {
        let Some(validator) = self.column_validator(column_id) else {
            self.update_data(row_index, column_id, value);
            return true;
        };

        let result = validator.check(&value, column_id, row_index).await;
        if result.is_valid() {
            self.update_data(row_index, column_id, value);
            return true;
        }

        log::debug!(
            "{}: validation failed at row {} column {}",
            self.id(),
            row_index,
            column_id
        );
        if let (Some(cb), Some(message)) =
            (&self.callbacks.on_validation_error, &result.message)
        {
            cb(column_id, message);
        }
        false
    }

    /// Remove one row and publish the new collection.
    ///
    /// The removed row is dropped from the selection; an out-of-bounds
    /// index is ignored.
    pub fn remove_row(&self, row_index: usize) {
        self.skip.request_skip();

        let (snapshot, selection_changed) = {
            let Ok(mut g) = self.inner.write() else {
                self.skip.consume();
                return;
            };
            if row_index >= g.rows.len() {
                log::debug!(
                    "{}: remove_row for row {} out of bounds, ignored",
                    self.id(),
                    row_index
                );
                drop(g);
                self.skip.consume();
                return;
            }
            let removed = g.rows.remove(row_index);
            let selection_changed = g.selection.remove(&removed.id());
            (g.rows.clone(), selection_changed)
        };

        self.mark_dirty();
        if selection_changed {
            self.notify_selection_changed();
        }
        if let Some(cb) = &self.callbacks.on_data_change {
            cb(&snapshot);
        }
        self.auto_reset_page_index();
    }
}
