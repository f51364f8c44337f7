//! GridRow trait: row identity and field access.

use crate::value::CellValue;

/// Trait for items that can be displayed and edited as grid rows.
///
/// Rows are owned by the caller; the grid reads fields through this trait
/// and proposes replacements by cloning a row and writing one field back.
///
/// # Examples
///
/// ```
/// use gridcore::{CellValue, GridRow};
///
/// #[derive(Debug, Clone)]
/// struct Person {
///     id: String,
///     name: String,
///     age: f64,
///     active: bool,
/// }
///
/// impl GridRow for Person {
///     fn id(&self) -> String {
///         self.id.clone()
///     }
///
///     fn field(&self, column_id: &str) -> CellValue {
///         match column_id {
///             "name" => self.name.clone().into(),
///             "age" => self.age.into(),
///             "active" => self.active.into(),
///             _ => CellValue::Null,
///         }
///     }
///
///     fn set_field(&mut self, column_id: &str, value: CellValue) {
///         match (column_id, value) {
///             ("name", CellValue::Text(s)) => self.name = s,
///             ("age", CellValue::Number(n)) => self.age = n,
///             ("active", CellValue::Bool(b)) => self.active = b,
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait GridRow: Send + Sync + Clone + 'static {
    /// Unique identifier for this row.
    ///
    /// Used for stable selection across row mutations.
    fn id(&self) -> String;

    /// Read the field addressed by a column id.
    ///
    /// Unknown column ids should return [`CellValue::Null`].
    fn field(&self, column_id: &str) -> CellValue;

    /// Write the field addressed by a column id.
    ///
    /// Writes to unknown column ids or with mismatched value kinds should
    /// leave the row unchanged.
    fn set_field(&mut self, column_id: &str, value: CellValue);
}
