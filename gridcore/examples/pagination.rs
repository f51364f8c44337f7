//! Pagination example - page navigation and the skip-reset in action.
//!
//! Builds a 12-row grid with a page size of 5, navigates to the second
//! page, commits an edit there, and shows that the page does not jump
//! back to the start; an external data replacement then does reset it.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use gridcore::prelude::*;

#[derive(Debug, Clone)]
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

fn print_page(grid: &DataGrid<Item>) {
    let model = grid.model();
    println!(
        "page {}/{} ({} rows total):",
        grid.page_index() + 1,
        model.page_count.max(1),
        model.row_count
    );
    for row in grid.visible_rows() {
        println!("  {}", row.name);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger");

    let grid = DataGrid::builder(vec![
        Column::new("name", "Name", 20).sortable().editor(EditorKind::Text),
    ])
    .rows(items(12))
    .page_size(5)
    .build()
    .expect("grid config");

    print_page(&grid);

    grid.next_page();
    println!("\nafter next_page:");
    print_page(&grid);

    // Committing an edit keeps us on this page
    let cell = grid.text_cell(6, "name");
    cell.begin_edit();
    cell.set_buffer("Item 06 (edited)");
    cell.commit().await;
    println!("\nafter committing an edit on this page:");
    print_page(&grid);

    // An external replacement resets to the first page
    grid.set_rows(items(12));
    println!("\nafter replacing the data from outside:");
    print_page(&grid);

    // Page size changes clamp the page index
    grid.last_page();
    grid.set_page_size(12);
    println!("\nafter set_page_size(12):");
    print_page(&grid);
}
