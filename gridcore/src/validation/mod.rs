//! Cell validation: result type, validator wrapper, built-in rules.
//!
//! Validators are caller-supplied `(value, column_id, row_index)` rules
//! attached to columns. Both synchronous and asynchronous rules are
//! supported; the grid awaits them before committing an edit.
//!
//! # Example
//!
//! ```
//! use gridcore::validation::{CellValidator, ValidationResult, rules};
//!
//! // Hand-written rule
//! let adult = CellValidator::sync(|value, _column_id, _row_index| {
//!     match value.as_text().parse::<i64>() {
//!         Ok(age) if age >= 18 => ValidationResult::valid(),
//!         _ => ValidationResult::invalid("Age must be at least 18"),
//!     }
//! });
//!
//! // Built-in rules, chained
//! let name = rules::all(vec![
//!     rules::required("Name is required"),
//!     rules::max_length(40, "Name must be at most 40 characters"),
//! ]);
//! # let _ = (adult, name);
//! ```

pub mod rules;

mod result;
mod validator;

pub use result::ValidationResult;
pub use validator::{BoxFuture, CellValidator};
