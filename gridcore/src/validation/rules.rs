//! Built-in validator constructors.
//!
//! Each function returns a [`CellValidator`] enforcing one rule; compose
//! several with [`all`].

use crate::validation::{CellValidator, ValidationResult};

/// Require the value to be non-empty (after trimming).
pub fn required(msg: impl Into<String>) -> CellValidator {
    let msg = msg.into();
    CellValidator::sync(move |value, _, _| {
        if value.as_text().trim().is_empty() {
            ValidationResult::invalid(msg.clone())
        } else {
            ValidationResult::valid()
        }
    })
}

/// Require minimum length (in characters).
pub fn min_length(min: usize, msg: impl Into<String>) -> CellValidator {
    let msg = msg.into();
    CellValidator::sync(move |value, _, _| {
        if value.as_text().chars().count() >= min {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(msg.clone())
        }
    })
}

/// Require maximum length (in characters).
pub fn max_length(max: usize, msg: impl Into<String>) -> CellValidator {
    let msg = msg.into();
    CellValidator::sync(move |value, _, _| {
        if value.as_text().chars().count() <= max {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(msg.clone())
        }
    })
}

/// Require the value to match a regex pattern.
pub fn pattern(pattern: &str, msg: impl Into<String>) -> CellValidator {
    let msg = msg.into();
    let re = regex::Regex::new(pattern).expect("Invalid regex pattern");
    CellValidator::sync(move |value, _, _| {
        if re.is_match(&value.as_text()) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(msg.clone())
        }
    })
}

/// Require a valid email address. Empty values pass; combine with
/// [`required`] for non-empty.
pub fn email(msg: impl Into<String>) -> CellValidator {
    let msg = msg.into();
    CellValidator::sync(move |value, _, _| {
        let text = value.as_text();
        if text.is_empty() || email_address::EmailAddress::is_valid(&text) {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(msg.clone())
        }
    })
}

/// Require a numeric value within `[min, max]`. Non-numeric input fails.
pub fn range(min: f64, max: f64, msg: impl Into<String>) -> CellValidator {
    let msg = msg.into();
    CellValidator::sync(move |value, _, _| {
        let number = match value {
            crate::CellValue::Number(n) => Some(*n),
            other => other.as_text().trim().parse::<f64>().ok(),
        };
        match number {
            Some(n) if n >= min && n <= max => ValidationResult::valid(),
            _ => ValidationResult::invalid(msg.clone()),
        }
    })
}

/// Run rules in order; the first failure wins.
pub fn all(rules: Vec<CellValidator>) -> CellValidator {
    CellValidator::async_fn(move |value, column_id, row_index| {
        let rules = rules.clone();
        async move {
            for rule in &rules {
                let result = rule.check(&value, &column_id, row_index).await;
                if !result.is_valid() {
                    return result;
                }
            }
            ValidationResult::valid()
        }
    })
}
