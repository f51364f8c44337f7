//! Grid configuration errors.

/// Errors raised while building a [`DataGrid`](crate::DataGrid).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Two columns share the same id.
    #[error("duplicate column id: {0}")]
    DuplicateColumnId(String),

    /// A select column has no options to choose from.
    #[error("select column {0} has no options")]
    SelectWithoutOptions(String),

    /// Page size must be at least one row.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}
