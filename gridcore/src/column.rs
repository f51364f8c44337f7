//! Column configuration: editor kinds, options, display metadata.

use crate::validation::CellValidator;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Which inline editor a column uses.
///
/// Columns without an editor kind are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// Free-text editor with a local edit buffer.
    Text,
    /// Dropdown over the column's [`SelectOption`]s.
    Select,
    /// Boolean toggle.
    Checkbox,
}

/// Visual intent for the read-only badge projection of a select option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeIntent {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

/// An enumerated choice for a select column.
#[derive(Debug, Clone)]
pub struct SelectOption {
    /// Stored cell value.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Disabled options cannot be chosen.
    pub disabled: bool,
    /// Badge intent for the read-only projection.
    pub intent: Option<BadgeIntent>,
}

impl SelectOption {
    /// Create an option whose label equals its value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            disabled: false,
            intent: None,
        }
    }

    /// Set a display label distinct from the stored value.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Mark the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the badge intent used when the grid is read-only.
    pub fn intent(mut self, intent: BadgeIntent) -> Self {
        self.intent = Some(intent);
        self
    }
}

/// Column configuration.
///
/// Columns define the structure of the grid: id, header text, width,
/// alignment, whether the column sorts and filters, which editor (if any)
/// its cells use, and an optional validator run before edits commit.
///
/// # Examples
///
/// ```
/// use gridcore::{Column, EditorKind, SelectOption, BadgeIntent};
///
/// let columns = vec![
///     Column::new("name", "Name", 30).sortable().editor(EditorKind::Text),
///     Column::new("status", "Status", 15)
///         .editor(EditorKind::Select)
///         .options(vec![
///             SelectOption::new("active").label("Active").intent(BadgeIntent::Success),
///             SelectOption::new("retired").label("Retired"),
///         ]),
///     Column::new("admin", "Admin", 8).editor(EditorKind::Checkbox),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Column id, matched against [`GridRow`](crate::GridRow) field ids.
    pub id: String,
    /// Column header text.
    pub header: String,
    /// Column width in display columns (fixed).
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether this column participates in sorting.
    pub sortable: bool,
    /// Whether this column participates in column filters.
    pub filterable: bool,
    /// Editor kind; `None` makes the column read-only.
    pub editor: Option<EditorKind>,
    /// Enumerated choices for select columns.
    pub options: Vec<SelectOption>,
    /// Validator run before an edited value commits.
    pub validate: Option<CellValidator>,
}

impl Column {
    /// Create a new read-only column with explicit width.
    pub fn new(id: impl Into<String>, header: impl Into<String>, width: u16) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width,
            align: Alignment::Left,
            sortable: false,
            filterable: false,
            editor: None,
            options: Vec::new(),
            validate: None,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column filterable.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Set the editor kind, making the column editable.
    pub fn editor(mut self, kind: EditorKind) -> Self {
        self.editor = Some(kind);
        self
    }

    /// Set the enumerated choices for a select column.
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Attach a validator run before edited values commit.
    pub fn validator(mut self, validator: CellValidator) -> Self {
        self.validate = Some(validator);
        self
    }

    /// Find an option by stored value.
    pub fn option(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("editor", &self.editor)
            .field("options", &self.options.len())
            .field("validate", &self.validate.is_some())
            .finish()
    }
}
