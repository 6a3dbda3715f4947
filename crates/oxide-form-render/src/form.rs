//! Field definitions and bound form instances.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::error::ValidationErrors;
use crate::widgets::{Widget, WidgetAttrs};

/// Default auto id format; `{}` is replaced by the field's HTML name.
pub const DEFAULT_AUTO_ID: &str = "id_{}";

/// Definition of a form field.
pub struct FormFieldDef {
    /// Field name.
    pub name: String,
    /// Field label. Empty means the field has no label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Help text.
    pub help_text: Option<String>,
    /// Initial value.
    pub initial: Option<String>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
    /// Whether the field is disabled.
    pub disabled: bool,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("help_text", &self.help_text)
            .field("initial", &self.initial)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            widget: Box::new(widget),
            help_text: None,
            initial: None,
            attrs: WidgetAttrs::new(),
            disabled: false,
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Sets initial value.
    #[must_use]
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Disables the field.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns whether the field's widget is hidden.
    pub fn is_hidden(&self) -> bool {
        self.widget.is_hidden()
    }

    /// Summary of the definition exposed to templates.
    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "label": self.label,
            "required": self.required,
            "help_text": self.help_text,
            "input_type": self.widget.input_type(),
            "is_hidden": self.is_hidden(),
            "disabled": self.disabled,
        })
    }
}

/// One instance of a form: its fields, the submitted data, and the errors
/// found while validating that data.
#[derive(Debug)]
pub struct Form {
    /// Field definitions keyed by name, in declaration order.
    pub fields: IndexMap<String, FormFieldDef>,
    /// Submitted data. `None` for an unbound form.
    pub data: Option<HashMap<String, String>>,
    /// Per-instance initial values, overriding field initials.
    pub initial: HashMap<String, String>,
    /// Validation errors, keyed by field name or [`crate::NON_FIELD_ERRORS`].
    pub errors: ValidationErrors,
    /// Prefix added to HTML names.
    pub prefix: Option<String>,
    /// Auto id format. `None` disables generated ids.
    pub auto_id: Option<String>,
}

impl Form {
    /// Creates an unbound form from field definitions.
    pub fn new(fields: impl IntoIterator<Item = FormFieldDef>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
            data: None,
            initial: HashMap::new(),
            errors: ValidationErrors::new(),
            prefix: None,
            auto_id: Some(DEFAULT_AUTO_ID.to_string()),
        }
    }

    /// Binds submitted data to the form.
    #[must_use]
    pub fn bind(mut self, data: HashMap<String, String>) -> Self {
        self.data = Some(data);
        self
    }

    /// Attaches validation errors.
    #[must_use]
    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = errors;
        self
    }

    /// Sets an initial value for one field.
    #[must_use]
    pub fn with_initial(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.initial.insert(field.into(), value.into());
        self
    }

    /// Sets the HTML name prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the auto id format, or disables auto ids with `None`.
    #[must_use]
    pub fn with_auto_id(mut self, auto_id: Option<&str>) -> Self {
        self.auto_id = auto_id.map(str::to_string);
        self
    }

    /// Returns whether data was submitted.
    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    /// Returns the HTML name of a field, including the prefix.
    pub fn add_prefix(&self, field_name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}-{field_name}"),
            None => field_name.to_string(),
        }
    }

    /// Summary of the form exposed to templates.
    pub fn to_value(&self) -> Value {
        json!({
            "is_bound": self.is_bound(),
            "prefix": self.prefix,
            "field_names": self.fields.keys().collect::<Vec<_>>(),
            "has_errors": !self.errors.is_empty(),
        })
    }
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Builds an unbound form.
    pub fn build(self) -> Form {
        Form::new(self.fields)
    }
}
