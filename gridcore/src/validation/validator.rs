//! Validator wrapper over sync and async cell rules.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::Arc;

use futures::FutureExt;

use super::result::ValidationResult;
use crate::value::CellValue;

/// Type alias for boxed futures used in async validation.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type Rule =
    Arc<dyn Fn(CellValue, String, usize) -> BoxFuture<'static, ValidationResult> + Send + Sync>;

/// Message reported when a validator panics instead of resolving.
const PANIC_MESSAGE: &str = "Validation failed";

/// A column's cell validator.
///
/// Wraps a `(value, column_id, row_index)` rule. The rule may be
/// synchronous ([`CellValidator::sync`]) or asynchronous
/// ([`CellValidator::async_fn`]); either way the grid awaits
/// [`check`](CellValidator::check) before committing an edit.
///
/// A rule that panics is contained and reported as a validation failure
/// with a generic message rather than tearing down the grid.
#[derive(Clone)]
pub struct CellValidator {
    rule: Rule,
}

impl CellValidator {
    /// Wrap a synchronous rule.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&CellValue, &str, usize) -> ValidationResult + Send + Sync + 'static,
    {
        Self {
            rule: Arc::new(move |value, column_id, row_index| {
                let result = f(&value, &column_id, row_index);
                Box::pin(async move { result })
            }),
        }
    }

    /// Wrap an asynchronous rule.
    pub fn async_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(CellValue, String, usize) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ValidationResult> + Send + 'static,
    {
        Self {
            rule: Arc::new(move |value, column_id, row_index| {
                Box::pin(f(value, column_id, row_index))
            }),
        }
    }

    /// Run the rule against a value.
    pub async fn check(
        &self,
        value: &CellValue,
        column_id: &str,
        row_index: usize,
    ) -> ValidationResult {
        let rule = Arc::clone(&self.rule);
        let value = value.clone();
        let column_id = column_id.to_string();

        // A sync rule can panic while building the future, an async rule
        // while the future runs; both are contained.
        let fut =
            match std::panic::catch_unwind(AssertUnwindSafe(|| rule(value, column_id, row_index))) {
                Ok(fut) => fut,
                Err(_) => {
                    log::warn!("validator for column panicked");
                    return ValidationResult::invalid(PANIC_MESSAGE);
                }
            };

        match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("validator for column panicked");
                ValidationResult::invalid(PANIC_MESSAGE)
            }
        }
    }
}

impl std::fmt::Debug for CellValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CellValidator")
    }
}
