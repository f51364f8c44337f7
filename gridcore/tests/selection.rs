//! Tests for the selection facade.

use std::sync::{Arc, Mutex};

use gridcore::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: String,
    name: String,
}

impl GridRow for Item {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column_id: &str) -> CellValue {
        match column_id {
            "name" => self.name.clone().into(),
            _ => CellValue::Null,
        }
    }

    fn set_field(&mut self, column_id: &str, value: CellValue) {
        if let ("name", CellValue::Text(s)) = (column_id, value) {
            self.name = s;
        }
    }
}

fn items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            id: format!("i{i}"),
            name: format!("Item {i:02}"),
        })
        .collect()
}

fn selectable_grid(count: usize) -> DataGrid<Item> {
    DataGrid::builder(vec![Column::new("name", "Name", 20).editor(EditorKind::Text)])
        .rows(items(count))
        .enable_row_selection(true)
        .page_size(3)
        .build()
        .unwrap()
}

#[test]
fn test_selected_rows_returns_row_objects() {
    let grid = selectable_grid(6);

    grid.toggle_row_selected("i2");
    grid.toggle_row_selected("i4");

    let selected = grid.selected_rows();
    assert_eq!(selected.len(), 2);
    assert!(selected.iter().any(|r| r.id == "i2" && r.name == "Item 02"));
    assert!(selected.iter().any(|r| r.id == "i4" && r.name == "Item 04"));
}

#[test]
fn test_selected_rows_is_page_independent() {
    let grid = selectable_grid(9);

    grid.toggle_row_selected("i0");
    grid.toggle_row_selected("i8");
    grid.next_page();

    let selected = grid.selected_rows();
    assert_eq!(selected.len(), 2);
}

#[test]
fn test_clear_selection() {
    let grid = selectable_grid(6);
    grid.toggle_row_selected("i1");
    grid.toggle_row_selected("i3");
    assert_eq!(grid.selection().len(), 2);

    grid.clear_selection();
    assert!(grid.selection().is_empty());
    assert!(grid.selected_rows().is_empty());
}

#[test]
fn test_select_all() {
    let grid = selectable_grid(6);
    grid.select_all();
    assert_eq!(grid.selected_rows().len(), 6);
}

#[test]
fn test_selection_disabled_is_a_noop() {
    let grid = DataGrid::builder(vec![Column::new("name", "Name", 20)])
        .rows(items(4))
        .build()
        .unwrap();

    assert!(!grid.toggle_row_selected("i1"));
    grid.select_all();
    assert!(grid.selected_rows().is_empty());
}

#[test]
fn test_selection_change_callback_fires() {
    let events: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);

    let grid = DataGrid::builder(vec![Column::new("name", "Name", 20)])
        .rows(items(4))
        .enable_row_selection(true)
        .on_row_selection_change(move |selection| {
            sink.lock().unwrap().push(selection.len());
        })
        .build()
        .unwrap();

    grid.toggle_row_selected("i0");
    grid.toggle_row_selected("i1");
    grid.clear_selection();

    assert_eq!(*events.lock().unwrap(), vec![1, 2, 0]);
}

#[test]
fn test_remove_row_prunes_selection() {
    let grid = selectable_grid(4);
    grid.toggle_row_selected("i1");
    grid.toggle_row_selected("i2");

    grid.remove_row(1);
    let selected = grid.selected_rows();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, "i2");
}

#[test]
fn test_selection_survives_data_replacement() {
    let grid = selectable_grid(4);
    grid.toggle_row_selected("i1");
    grid.toggle_row_selected("i3");

    // i3 disappears in the replacement, i1 survives
    grid.set_rows(items(2));

    let selected = grid.selected_rows();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, "i1");
}

#[tokio::test]
async fn test_selected_rows_reflect_committed_edits() {
    let grid = selectable_grid(4);
    grid.toggle_row_selected("i1");

    let cell = grid.text_cell(1, "name");
    cell.begin_edit();
    cell.set_buffer("Edited");
    assert!(cell.commit().await);

    let selected = grid.selected_rows();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "Edited");
}
