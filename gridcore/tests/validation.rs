//! Tests for validators and built-in rules.

use gridcore::prelude::*;
use gridcore::validation::rules;

async fn check(validator: &CellValidator, value: impl Into<CellValue>) -> ValidationResult {
    validator.check(&value.into(), "field", 0).await
}

#[tokio::test]
async fn test_required() {
    let rule = rules::required("Required");
    assert!(check(&rule, "hello").await.is_valid());
    assert!(!check(&rule, "").await.is_valid());
    assert!(!check(&rule, "   ").await.is_valid());
    assert_eq!(check(&rule, "").await.message.as_deref(), Some("Required"));
}

#[tokio::test]
async fn test_length_bounds() {
    let min = rules::min_length(3, "Too short");
    assert!(check(&min, "abc").await.is_valid());
    assert!(!check(&min, "ab").await.is_valid());

    let max = rules::max_length(5, "Too long");
    assert!(check(&max, "abcde").await.is_valid());
    assert!(!check(&max, "abcdef").await.is_valid());
}

#[tokio::test]
async fn test_pattern() {
    let rule = rules::pattern(r"^\d{4}$", "Must be four digits");
    assert!(check(&rule, "2026").await.is_valid());
    assert!(!check(&rule, "26").await.is_valid());
    assert!(!check(&rule, "year").await.is_valid());
}

#[tokio::test]
async fn test_email_allows_empty() {
    let rule = rules::email("Invalid email");
    assert!(check(&rule, "").await.is_valid());
    assert!(check(&rule, "ada@example.com").await.is_valid());
    assert!(!check(&rule, "not-an-email").await.is_valid());
}

#[tokio::test]
async fn test_range_accepts_numbers_and_numeric_text() {
    let rule = rules::range(18.0, 99.0, "Out of range");
    assert!(check(&rule, 18.0).await.is_valid());
    assert!(check(&rule, "42").await.is_valid());
    assert!(!check(&rule, "17").await.is_valid());
    assert!(!check(&rule, 100.0).await.is_valid());
    assert!(!check(&rule, "not a number").await.is_valid());
}

#[tokio::test]
async fn test_all_runs_rules_in_order() {
    let rule = rules::all(vec![
        rules::required("First"),
        rules::min_length(3, "Second"),
    ]);
    assert_eq!(check(&rule, "").await.message.as_deref(), Some("First"));
    assert_eq!(check(&rule, "ab").await.message.as_deref(), Some("Second"));
    assert!(check(&rule, "abc").await.is_valid());
}

#[tokio::test]
async fn test_sync_validator_sees_position() {
    let rule = CellValidator::sync(|value, column_id, row_index| {
        assert_eq!(column_id, "age");
        assert_eq!(row_index, 7);
        if value.as_text() == "ok" {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid("no")
        }
    });
    assert!(rule.check(&"ok".into(), "age", 7).await.is_valid());
    assert!(!rule.check(&"bad".into(), "age", 7).await.is_valid());
}

#[tokio::test]
async fn test_async_validator() {
    let rule = CellValidator::async_fn(|value, _, _| async move {
        tokio::task::yield_now().await;
        if value.as_text().len() > 2 {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid("Too short")
        }
    });
    assert!(check(&rule, "long enough").await.is_valid());
    assert!(!check(&rule, "no").await.is_valid());
}

#[tokio::test]
async fn test_panicking_rule_is_contained() {
    let sync_rule = CellValidator::sync(|_, _, _| panic!("boom"));
    let result = check(&sync_rule, "anything").await;
    assert!(!result.is_valid());
    assert_eq!(result.message.as_deref(), Some("Validation failed"));

    let async_rule = CellValidator::async_fn(|value, _, _| async move {
        if value.as_text() == "anything" {
            panic!("boom");
        }
        ValidationResult::valid()
    });
    let result = check(&async_rule, "anything").await;
    assert!(!result.is_valid());
    assert_eq!(result.message.as_deref(), Some("Validation failed"));
}

#[test]
fn test_validation_result_shape() {
    let ok = ValidationResult::valid();
    assert!(ok.is_valid());
    assert_eq!(ok.message, None);

    let bad = ValidationResult::invalid("reason");
    assert!(!bad.is_valid());
    assert_eq!(bad.message.as_deref(), Some("reason"));
}
