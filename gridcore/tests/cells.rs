//! Tests for select and checkbox cell controllers.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use gridcore::prelude::*;

#[derive(Debug, Clone)]
struct Task {
    id: String,
    title: String,
    status: String,
    done: bool,
}

impl GridRow for Task {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column_id: &str) -> CellValue {
        match column_id {
            "title" => self.title.clone().into(),
            "status" => self.status.clone().into(),
            "done" => self.done.into(),
            _ => CellValue::Null,
        }
    }

    fn set_field(&mut self, column_id: &str, value: CellValue) {
        match (column_id, value) {
            ("title", CellValue::Text(s)) => self.title = s,
            ("status", CellValue::Text(s)) => self.status = s,
            ("done", CellValue::Bool(b)) => self.done = b,
            _ => {}
        }
    }
}

fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "t0".into(),
            title: "Write docs".into(),
            status: "open".into(),
            done: false,
        },
        Task {
            id: "t1".into(),
            title: "Review".into(),
            status: "blocked".into(),
            done: false,
        },
    ]
}

fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("open").label("Open").intent(BadgeIntent::Primary),
        SelectOption::new("blocked").label("Blocked").intent(BadgeIntent::Danger),
        SelectOption::new("done").label("Done").intent(BadgeIntent::Success),
        SelectOption::new("archived").label("Archived").disabled(),
    ]
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("title", "Title", 24).editor(EditorKind::Text),
        Column::new("status", "Status", 12)
            .editor(EditorKind::Select)
            .options(status_options()),
        Column::new("done", "Done", 6).editor(EditorKind::Checkbox),
    ]
}

#[tokio::test]
async fn test_select_choose_commits() {
    let grid = DataGrid::builder(columns()).rows(tasks()).build().unwrap();
    let cell = grid.select_cell(0, "status");

    assert_eq!(cell.current(), "open");
    assert!(cell.choose("done").await);
    assert_eq!(grid.row(0).unwrap().status, "done");
}

#[tokio::test]
async fn test_select_unchanged_is_noop() {
    let publishes = Arc::new(AtomicUsize::new(0));
    let p = Arc::clone(&publishes);
    let grid = DataGrid::builder(columns())
        .rows(tasks())
        .on_data_change(move |_| {
            p.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    let cell = grid.select_cell(0, "status");
    assert!(cell.choose("open").await);
    assert_eq!(publishes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_select_refuses_unknown_and_disabled_options() {
    let grid = DataGrid::builder(columns()).rows(tasks()).build().unwrap();
    let cell = grid.select_cell(0, "status");

    assert!(!cell.choose("nonsense").await);
    assert!(!cell.choose("archived").await);
    assert_eq!(grid.row(0).unwrap().status, "open");
}

#[tokio::test]
async fn test_select_validation_failure_reports_and_leaves_data() {
    let reported: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reported);

    let mut cols = columns();
    cols[1] = Column::new("status", "Status", 12)
        .editor(EditorKind::Select)
        .options(status_options())
        .validator(CellValidator::sync(|value, _, _| {
            if value.as_text() == "done" {
                ValidationResult::invalid("Close the review first")
            } else {
                ValidationResult::valid()
            }
        }));

    let grid = DataGrid::builder(cols)
        .rows(tasks())
        .on_validation_error(move |column_id, message| {
            sink.lock().unwrap().push((column_id.into(), message.into()));
        })
        .build()
        .unwrap();

    let cell = grid.select_cell(1, "status");
    assert!(!cell.choose("done").await);

    assert_eq!(grid.row(1).unwrap().status, "blocked");
    let reported = reported.lock().unwrap();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].0, "status");
    assert_eq!(reported[0].1, "Close the review first");
    // Short-circuit cells never take the error lock
    assert_eq!(grid.cell_with_error(), None);
}

#[tokio::test]
async fn test_select_blocked_by_text_cell_error() {
    let mut cols = columns();
    cols[0] = Column::new("title", "Title", 24)
        .editor(EditorKind::Text)
        .validator(CellValidator::sync(|_, _, _| {
            ValidationResult::invalid("nope")
        }));
    let grid = DataGrid::builder(cols).rows(tasks()).build().unwrap();

    let text = grid.text_cell(0, "title");
    text.begin_edit();
    text.set_buffer("changed");
    assert!(!text.commit().await);

    let select = grid.select_cell(1, "status");
    assert!(select.is_blocked());
    assert!(!select.choose("done").await);
    assert_eq!(grid.row(1).unwrap().status, "blocked");

    let checkbox = grid.checkbox_cell(1, "done");
    assert!(checkbox.is_blocked());
    assert_eq!(checkbox.set_checked(true), EventResult::Ignored);
}

#[tokio::test]
async fn test_checkbox_toggle_writes_through() {
    let grid = DataGrid::builder(columns()).rows(tasks()).build().unwrap();
    let cell = grid.checkbox_cell(0, "done");

    assert!(!cell.is_checked());
    assert_eq!(cell.toggle(), EventResult::Consumed);
    assert!(cell.is_checked());
    assert!(grid.row(0).unwrap().done);
}

#[tokio::test]
async fn test_checkbox_unchanged_write_is_ignored() {
    let publishes = Arc::new(AtomicUsize::new(0));
    let p = Arc::clone(&publishes);
    let grid = DataGrid::builder(columns())
        .rows(tasks())
        .on_data_change(move |_| {
            p.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    let cell = grid.checkbox_cell(0, "done");
    assert_eq!(cell.set_checked(false), EventResult::Ignored);
    assert_eq!(publishes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_read_only_projection_uses_badges() {
    let grid = DataGrid::builder(columns())
        .rows(tasks())
        .edit_mode(false)
        .build()
        .unwrap();

    assert_eq!(
        grid.cell_display(0, "status"),
        CellDisplay::Badge {
            label: "Open".into(),
            intent: BadgeIntent::Primary,
        }
    );
    assert_eq!(grid.cell_display(0, "title"), CellDisplay::Text("Write docs".into()));

    let checkbox = grid.checkbox_cell(0, "done");
    assert_eq!(checkbox.set_checked(true), EventResult::Ignored);
    let select = grid.select_cell(0, "status");
    assert!(!select.choose("done").await);
}

#[test]
fn test_builder_rejects_select_without_options() {
    let result = DataGrid::<Task>::builder(vec![
        Column::new("status", "Status", 12).editor(EditorKind::Select),
    ])
    .build();
    assert!(matches!(result, Err(ConfigError::SelectWithoutOptions(c)) if c == "status"));
}

#[test]
fn test_builder_rejects_duplicate_columns() {
    let result = DataGrid::<Task>::builder(vec![
        Column::new("title", "Title", 24),
        Column::new("title", "Also title", 24),
    ])
    .build();
    assert!(matches!(result, Err(ConfigError::DuplicateColumnId(c)) if c == "title"));
}
