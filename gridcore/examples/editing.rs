//! Editing example - drives the cell edit lifecycle headlessly.
//!
//! Builds a small people grid with a validated age column, commits one
//! invalid edit (error lock, everything else blocked), then fixes it and
//! prints the grid after each step.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use uuid::Uuid;

use gridcore::prelude::*;

#[derive(Debug, Clone)]
struct Person {
    id: String,
    name: String,
    age: String,
    active: bool,
}

impl Person {
    fn new(name: &str, age: &str, active: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            age: age.to_string(),
            active,
        }
    }
}

impl GridRow for Person {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, column_id: &str) -> CellValue {
        match column_id {
            "name" => self.name.clone().into(),
            "age" => self.age.clone().into(),
            "active" => self.active.into(),
            _ => CellValue::Null,
        }
    }

    fn set_field(&mut self, column_id: &str, value: CellValue) {
        match (column_id, value) {
            ("name", CellValue::Text(s)) => self.name = s,
            ("age", CellValue::Text(s)) => self.age = s,
            ("active", CellValue::Bool(b)) => self.active = b,
            _ => {}
        }
    }
}

fn print_grid(grid: &DataGrid<Person>) {
    for row in grid.visible_rows() {
        println!("  {:<10} {:>4} {:>7}", row.name, row.age, row.active);
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
        Column::new("name", "Name", 20)
            .editor(EditorKind::Text)
            .validator(rules::required("Name is required")),
        Column::new("age", "Age", 6)
            .editor(EditorKind::Text)
            .validator(rules::range(18.0, 120.0, "Age must be between 18 and 120")),
        Column::new("active", "Active", 8).editor(EditorKind::Checkbox),
    ])
    .rows(vec![
        Person::new("Ada", "36", true),
        Person::new("Grace", "30", true),
        Person::new("Edsger", "42", false),
    ])
    .on_data_change(|rows| println!("-> data changed, {} rows published", rows.len()))
    .on_validation_error(|column, message| println!("-> validation error on {column}: {message}"))
    .build()
    .expect("grid config");

    println!("initial grid:");
    print_grid(&grid);

    // An invalid edit: rejected, error lock taken
    let age = grid.text_cell(1, "age");
    age.begin_edit();
    age.set_buffer("15");
    let committed = age.commit().await;
    println!(
        "\ncommit \"15\": committed={committed}, error={:?}",
        age.error()
    );

    let other = grid.text_cell(0, "name");
    println!(
        "other cells blocked while the error is live: {:?}",
        other.begin_edit()
    );

    // Typing again clears the error optimistically; the fix commits
    age.set_buffer("25");
    let committed = age.commit().await;
    println!("\ncommit \"25\": committed={committed}");
    print_grid(&grid);

    // Checkbox cells write straight through
    grid.checkbox_cell(2, "active").toggle();
    println!("\nafter toggling Edsger's active flag:");
    print_grid(&grid);
}
