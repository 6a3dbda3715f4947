//! Bound fields: a field definition joined with its value and errors.

use serde_json::{json, Value};

use crate::form::{Form, FormFieldDef};
use crate::widgets::WidgetAttrs;

/// A field of one form instance, with its current value and errors.
#[derive(Debug, Clone)]
pub struct BoundField<'a> {
    form: &'a Form,
    field: &'a FormFieldDef,
    name: &'a str,
    html_name: String,
    auto_id: Option<String>,
}

impl<'a> BoundField<'a> {
    /// Binds `field` to `form`.
    pub fn new(form: &'a Form, name: &'a str, field: &'a FormFieldDef) -> Self {
        let html_name = form.add_prefix(name);
        let auto_id = match form.auto_id.as_deref() {
            None | Some("") => None,
            Some(format) if format.contains("{}") => Some(format.replace("{}", &html_name)),
            Some(_) => Some(html_name.clone()),
        };

        Self {
            form,
            field,
            name,
            html_name,
            auto_id,
        }
    }

    /// The field name as declared on the form.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The name used in the HTML `name` attribute.
    pub fn html_name(&self) -> &str {
        &self.html_name
    }

    /// The generated id, if the form generates ids.
    pub fn auto_id(&self) -> Option<&str> {
        self.auto_id.as_deref()
    }

    /// The id a label should point at: a non-empty widget id, else the auto id.
    pub fn id_for_label(&self) -> Option<&str> {
        self.field
            .attrs
            .get("id")
            .map(String::as_str)
            .filter(|id| !id.is_empty())
            .or(self.auto_id())
    }

    /// The field definition.
    pub fn field(&self) -> &'a FormFieldDef {
        self.field
    }

    /// The owning form.
    pub fn form(&self) -> &'a Form {
        self.form
    }

    /// The field's label as declared.
    pub fn label(&self) -> &'a str {
        &self.field.label
    }

    /// The field's help text, or an empty string.
    pub fn help_text(&self) -> &'a str {
        self.field.help_text.as_deref().unwrap_or("")
    }

    /// Whether the field is rendered as a hidden input.
    pub fn is_hidden(&self) -> bool {
        self.field.is_hidden()
    }

    /// The validation errors of this field, in their original order.
    pub fn errors(&self) -> &'a [String] {
        self.form.errors.for_field(self.name)
    }

    /// The value to display: submitted data for a bound form, else the
    /// initial value.
    pub fn value(&self) -> Option<&'a str> {
        let initial = || {
            self.form
                .initial
                .get(self.name)
                .or(self.field.initial.as_ref())
                .map(String::as_str)
        };

        match &self.form.data {
            Some(data) if !self.field.disabled => data.get(&self.html_name).map(String::as_str),
            _ => initial(),
        }
    }

    /// CSS classes for the row: the error class when the field has errors,
    /// then the required class when the field is required.
    pub fn css_classes(&self, required_css_class: &str, error_css_class: Option<&str>) -> String {
        let mut classes = Vec::new();
        if let Some(error_class) = error_css_class.filter(|c| !c.is_empty()) {
            if !self.errors().is_empty() {
                classes.push(error_class);
            }
        }
        if self.field.required && !required_css_class.is_empty() {
            classes.push(required_css_class);
        }
        classes.join(" ")
    }

    /// Attributes passed to the widget.
    pub fn widget_attrs(&self) -> WidgetAttrs {
        let mut attrs = self.field.attrs.clone();

        if let Some(id) = self.auto_id() {
            if !attrs.contains("id") {
                attrs.set("id", id);
            }
        }

        if self.field.required && !self.is_hidden() {
            attrs.set("required", "required");
        }

        if self.field.disabled {
            attrs.set("disabled", "disabled");
        }

        attrs
    }

    /// Renders the control through the field's widget.
    pub fn as_widget(&self) -> String {
        self.field
            .widget
            .render(&self.html_name, self.value(), &self.widget_attrs())
    }

    /// Renders the control with the label embedded by the widget.
    pub fn as_labeled_widget(&self, label: &str) -> String {
        self.field
            .widget
            .render_labeled(&self.html_name, self.value(), &self.widget_attrs(), label)
    }

    /// Summary of the bound field exposed to templates.
    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "html_name": self.html_name,
            "auto_id": self.auto_id,
            "value": self.value(),
            "is_hidden": self.is_hidden(),
            "errors": self.errors(),
            "field": self.field.to_value(),
        })
    }
}
