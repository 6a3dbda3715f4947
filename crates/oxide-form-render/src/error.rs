//! Error types for form rendering.

use indexmap::IndexMap;
use thiserror::Error;

/// Key under which whole-form (non-field) errors are stored.
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Rendering errors.
///
/// Only template and configuration failures are errors. Unknown fieldsets and
/// fields without an id degrade to empty output instead.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template is registered under this name.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// A template was found but failed to render.
    #[error("template {name} failed to render: {message}")]
    Template { name: String, message: String },

    /// Error reported by the Tera engine.
    #[error("tera error: {0}")]
    Tera(#[from] tera::Error),

    /// Invalid JSON configuration or catalog.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Validation errors of a form, keyed by field name.
///
/// These are produced by whatever validated the form; rendering only reads
/// them. Keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty `ValidationErrors`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Adds a whole-form error.
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD_ERRORS, message);
    }

    /// Builder variant of [`ValidationErrors::add`].
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Returns the number of keys with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns the errors of one field, or an empty slice.
    pub fn for_field(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Returns the whole-form errors.
    pub fn non_field_errors(&self) -> &[String] {
        self.for_field(NON_FIELD_ERRORS)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
