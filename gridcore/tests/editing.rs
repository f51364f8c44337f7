//! Tests for the text cell edit lifecycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use gridcore::prelude::*;
use gridcore::validation::rules;

#[derive(Debug, Clone)]
struct Person {
    id: String,
    name: String,
    age: String,
}

impl GridRow for Person {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column_id: &str) -> CellValue {
        match column_id {
            "name" => self.name.clone().into(),
            "age" => self.age.clone().into(),
            _ => CellValue::Null,
        }
    }

    fn set_field(&mut self, column_id: &str, value: CellValue) {
        match (column_id, value) {
            ("name", CellValue::Text(s)) => self.name = s,
            ("age", CellValue::Text(s)) => self.age = s,
            _ => {}
        }
    }
}

fn people() -> Vec<Person> {
    vec![
        Person {
            id: "p0".into(),
            name: "Ada".into(),
            age: "36".into(),
        },
        Person {
            id: "p1".into(),
            name: "Grace".into(),
            age: "30".into(),
        },
        Person {
            id: "p2".into(),
            name: "Edsger".into(),
            age: "42".into(),
        },
    ]
}

fn adult_validator() -> CellValidator {
    CellValidator::sync(|value, _, _| match value.as_text().parse::<i64>() {
        Ok(age) if age >= 18 => ValidationResult::valid(),
        _ => ValidationResult::invalid("Age must be at least 18"),
    })
}

fn grid_with_age_validator() -> DataGrid<Person> {
    DataGrid::builder(vec![
        Column::new("name", "Name", 20).editor(EditorKind::Text),
        Column::new("age", "Age", 6)
            .editor(EditorKind::Text)
            .validator(adult_validator()),
    ])
    .rows(people())
    .build()
    .unwrap()
}

#[tokio::test]
async fn test_invalid_edit_locks_grid() {
    let grid = grid_with_age_validator();
    let cell = grid.text_cell(1, "age");

    assert_eq!(cell.begin_edit(), EventResult::Consumed);
    cell.set_buffer("15");
    assert!(!cell.commit().await);

    assert_eq!(cell.phase(), EditPhase::Rejected);
    assert_eq!(cell.error().as_deref(), Some("Age must be at least 18"));
    assert_eq!(grid.cell_with_error(), Some(CellRef::new(1, "age")));
    assert!(cell.take_shake());
    assert!(cell.take_focus_request());

    // Data untouched
    assert_eq!(grid.row(1).unwrap().age, "30");

    // Every other cell is blocked
    let other = grid.text_cell(0, "age");
    assert!(other.is_blocked());
    assert_eq!(other.begin_edit(), EventResult::Ignored);
    let third = grid.text_cell(2, "name");
    assert!(third.is_blocked());
    assert_eq!(third.begin_edit(), EventResult::Ignored);

    // The rejected cell itself is not blocked
    assert!(!cell.is_blocked());
}

#[tokio::test]
async fn test_valid_edit_releases_lock() {
    let grid = grid_with_age_validator();
    let cell = grid.text_cell(1, "age");

    cell.begin_edit();
    cell.set_buffer("15");
    assert!(!cell.commit().await);

    // Typing again clears the error before revalidation
    cell.set_buffer("25");
    assert_eq!(cell.phase(), EditPhase::Editing);
    assert_eq!(cell.error(), None);
    assert_eq!(grid.cell_with_error(), None);

    assert!(cell.commit().await);
    assert_eq!(cell.phase(), EditPhase::Viewing);
    assert_eq!(grid.row(1).unwrap().age, "25");
    assert_eq!(grid.cell_with_error(), None);

    // Grid fully editable again
    assert_eq!(grid.text_cell(0, "age").begin_edit(), EventResult::Consumed);
}

#[tokio::test]
async fn test_unchanged_commit_skips_validator_and_publish() {
    let validations = Arc::new(AtomicUsize::new(0));
    let publishes = Arc::new(AtomicUsize::new(0));
    let v = Arc::clone(&validations);
    let p = Arc::clone(&publishes);

    let grid = DataGrid::builder(vec![
        Column::new("age", "Age", 6)
            .editor(EditorKind::Text)
            .validator(CellValidator::sync(move |_, _, _| {
                v.fetch_add(1, Ordering::SeqCst);
                ValidationResult::valid()
            })),
    ])
    .rows(people())
    .on_data_change(move |_| {
        p.fetch_add(1, Ordering::SeqCst);
    })
    .build()
    .unwrap();

    let cell = grid.text_cell(0, "age");
    cell.begin_edit();
    assert!(cell.commit().await);

    assert_eq!(cell.phase(), EditPhase::Viewing);
    assert_eq!(validations.load(Ordering::SeqCst), 0);
    assert_eq!(publishes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_cancel_reverts_buffer() {
    let grid = grid_with_age_validator();
    let cell = grid.text_cell(0, "name");

    cell.begin_edit();
    cell.set_buffer("Someone else");
    cell.cancel();

    assert_eq!(cell.phase(), EditPhase::Viewing);
    assert_eq!(cell.buffer(), "Ada");
    assert_eq!(grid.row(0).unwrap().name, "Ada");
}

#[tokio::test]
async fn test_escape_from_rejected_clears_lock() {
    let grid = grid_with_age_validator();
    let cell = grid.text_cell(1, "age");

    cell.begin_edit();
    cell.set_buffer("3");
    assert!(!cell.commit().await);
    assert!(grid.cell_with_error().is_some());

    cell.cancel();
    assert_eq!(cell.phase(), EditPhase::Viewing);
    assert_eq!(cell.error(), None);
    assert_eq!(grid.cell_with_error(), None);
    assert_eq!(grid.row(1).unwrap().age, "30");
}

#[tokio::test]
async fn test_commit_without_validator_publishes_once() {
    let publishes = Arc::new(AtomicUsize::new(0));
    let p = Arc::clone(&publishes);

    let grid = DataGrid::builder(vec![
        Column::new("name", "Name", 20).editor(EditorKind::Text),
    ])
    .rows(people())
    .on_data_change(move |_| {
        p.fetch_add(1, Ordering::SeqCst);
    })
    .build()
    .unwrap();

    let cell = grid.text_cell(2, "name");
    cell.begin_edit();
    cell.set_buffer("Tony");
    assert!(cell.commit().await);

    assert_eq!(grid.row(2).unwrap().name, "Tony");
    assert_eq!(publishes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_stale_validation_resolution_ignored() {
    let grid = DataGrid::builder(vec![
        Column::new("age", "Age", 6)
            .editor(EditorKind::Text)
            .validator(CellValidator::async_fn(|_, _, _| async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                ValidationResult::invalid("too slow to matter")
            })),
    ])
    .rows(people())
    .build()
    .unwrap();

    let cell = grid.text_cell(0, "age");
    cell.begin_edit();
    cell.set_buffer("7");

    let in_flight = {
        let cell = cell.clone();
        tokio::spawn(async move { cell.commit().await })
    };
    tokio::time::sleep(Duration::from_millis(10)).await;

    // User walks away mid-validation
    cell.cancel();

    assert!(!in_flight.await.unwrap());
    // The late rejection must not reopen a closed error state
    assert_eq!(cell.phase(), EditPhase::Viewing);
    assert_eq!(cell.error(), None);
    assert_eq!(grid.cell_with_error(), None);
    assert_eq!(grid.row(0).unwrap().age, "36");
}

#[tokio::test]
async fn test_panicking_validator_is_a_rejection() {
    let grid = DataGrid::builder(vec![
        Column::new("age", "Age", 6)
            .editor(EditorKind::Text)
            .validator(CellValidator::sync(|_, _, _| panic!("validator bug"))),
    ])
    .rows(people())
    .build()
    .unwrap();

    let cell = grid.text_cell(0, "age");
    cell.begin_edit();
    cell.set_buffer("50");
    assert!(!cell.commit().await);

    assert_eq!(cell.phase(), EditPhase::Rejected);
    assert_eq!(cell.error().as_deref(), Some("Validation failed"));
    assert_eq!(grid.row(0).unwrap().age, "36");
}

#[tokio::test]
async fn test_read_only_grid_keeps_cells_viewing() {
    let grid = DataGrid::builder(vec![
        Column::new("name", "Name", 20).editor(EditorKind::Text),
    ])
    .rows(people())
    .edit_mode(false)
    .build()
    .unwrap();

    let cell = grid.text_cell(0, "name");
    assert_eq!(cell.begin_edit(), EventResult::Ignored);
    assert_eq!(cell.phase(), EditPhase::Viewing);
    assert_eq!(cell.display(), CellDisplay::Text("Ada".into()));
}

#[tokio::test]
async fn test_chained_rules_report_first_failure() {
    let grid = DataGrid::builder(vec![
        Column::new("name", "Name", 20)
            .editor(EditorKind::Text)
            .validator(rules::all(vec![
                rules::required("Name is required"),
                rules::min_length(3, "Name must be at least 3 characters"),
            ])),
    ])
    .rows(people())
    .build()
    .unwrap();

    let cell = grid.text_cell(0, "name");
    cell.begin_edit();
    cell.set_buffer("  ");
    assert!(!cell.commit().await);
    assert_eq!(cell.error().as_deref(), Some("Name is required"));

    cell.set_buffer("Al");
    assert!(!cell.commit().await);
    assert_eq!(cell.error().as_deref(), Some("Name must be at least 3 characters"));

    cell.set_buffer("Alan");
    assert!(cell.commit().await);
    assert_eq!(grid.row(0).unwrap().name, "Alan");
}
