//! Validation result type.

/// Outcome of validating a single cell value.
///
/// `message` is only meaningful when `valid` is `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the value passed validation.
    pub valid: bool,
    /// Error message for invalid values.
    pub message: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing result with a message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Check if the value passed validation.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
