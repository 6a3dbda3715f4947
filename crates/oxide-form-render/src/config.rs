//! Rendering configuration for one form type.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;
use crate::template::{ERRORLIST_TEMPLATE, FORM_TEMPLATE, LABEL_TEMPLATE, ROW_TEMPLATE};

/// Template names, fieldsets and CSS classes used when rendering a form.
///
/// Every setting has a default, so a config file only lists what it changes:
///
/// ```json
/// {
///     "row_template": "foundation_row.html",
///     "fieldset_definitions": { "f1": ["name"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormRenderConfig {
    /// Template rendering the whole form.
    pub form_template: String,
    /// Default template rendering one row.
    pub row_template: String,
    /// Template rendering an error list.
    pub errorlist_template: String,
    /// Template rendering a label tag.
    pub label_template: String,
    /// Row template overrides keyed by field name.
    pub custom_row_templates: HashMap<String, String>,
    /// Fieldset name to ordered field names.
    pub fieldset_definitions: IndexMap<String, Vec<String>>,
    /// Class added to rows of required fields.
    pub required_css_class: String,
    /// Class added to rows of fields with errors.
    pub error_css_class: Option<String>,
}

impl Default for FormRenderConfig {
    fn default() -> Self {
        Self {
            form_template: FORM_TEMPLATE.to_string(),
            row_template: ROW_TEMPLATE.to_string(),
            errorlist_template: ERRORLIST_TEMPLATE.to_string(),
            label_template: LABEL_TEMPLATE.to_string(),
            custom_row_templates: HashMap::new(),
            fieldset_definitions: IndexMap::new(),
            required_css_class: "required".to_string(),
            error_css_class: None,
        }
    }
}

impl FormRenderConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the form template.
    #[must_use]
    pub fn form_template(mut self, name: impl Into<String>) -> Self {
        self.form_template = name.into();
        self
    }

    /// Sets the default row template.
    #[must_use]
    pub fn row_template(mut self, name: impl Into<String>) -> Self {
        self.row_template = name.into();
        self
    }

    /// Sets the error list template.
    #[must_use]
    pub fn errorlist_template(mut self, name: impl Into<String>) -> Self {
        self.errorlist_template = name.into();
        self
    }

    /// Sets the label template.
    #[must_use]
    pub fn label_template(mut self, name: impl Into<String>) -> Self {
        self.label_template = name.into();
        self
    }

    /// Renders the row of `field` with a dedicated template.
    #[must_use]
    pub fn custom_row_template(
        mut self,
        field: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.custom_row_templates.insert(field.into(), template.into());
        self
    }

    /// Declares a fieldset.
    #[must_use]
    pub fn fieldset<I, S>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fieldset_definitions
            .insert(name.into(), fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the class of required rows.
    #[must_use]
    pub fn required_css_class(mut self, class: impl Into<String>) -> Self {
        self.required_css_class = class.into();
        self
    }

    /// Sets the class of rows with errors.
    #[must_use]
    pub fn error_css_class(mut self, class: impl Into<String>) -> Self {
        self.error_css_class = Some(class.into());
        self
    }

    /// Returns the row template for a field.
    pub fn row_template_for(&self, field_name: &str) -> &str {
        self.custom_row_templates
            .get(field_name)
            .unwrap_or(&self.row_template)
    }
}
