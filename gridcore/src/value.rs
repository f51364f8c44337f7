//! Dynamic cell value type.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A dynamic value held by a single grid cell.
///
/// Rows expose their fields as `CellValue` so the grid can read, compare,
/// filter and write them without knowing the row's concrete shape.
///
/// # Example
///
/// ```
/// use gridcore::CellValue;
///
/// let name = CellValue::from("Ada");
/// let age = CellValue::from(36.0);
/// let active = CellValue::from(true);
/// assert_eq!(name.as_text(), "Ada");
/// assert!(age < name); // numbers order before text
/// assert!(active.is_truthy());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Null/empty value.
    Null,
    /// Boolean value (checkbox cells).
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Text value (text and select cells).
    Text(String),
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the contained boolean, treating everything else as `false`.
    pub fn is_truthy(&self) -> bool {
        matches!(self, CellValue::Bool(true))
    }

    /// Display form of the value.
    ///
    /// `Null` renders empty, booleans render as `true`/`false`, numbers
    /// drop a trailing `.0` so integral values read naturally.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Total ordering used by sorting engines.
    ///
    /// Variants order `Null < Bool < Number < Text`; values inside a
    /// variant compare naturally. NaN sorts after every other number.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Bool(_), _) => Ordering::Less,
            (_, Bool(_)) => Ordering::Greater,
            (Number(a), Number(b)) => a.partial_cmp(b).unwrap_or_else(|| {
                // NaN handling: NaN sorts last among numbers
                match (a.is_nan(), b.is_nan()) {
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    _ => Ordering::Equal,
                }
            }),
            (Number(_), _) => Ordering::Less,
            (_, Number(_)) => Ordering::Greater,
            (Text(a), Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}
