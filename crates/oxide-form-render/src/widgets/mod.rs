//! Form widgets for rendering HTML controls.

mod choice;

pub use choice::{CheckboxInput, Select};

use indexmap::IndexMap;

/// Attributes applied to a rendered control, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: IndexMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Returns whether an attribute is set.
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Renders the attributes, each preceded by a space.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Who renders the label of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelPlacement {
    /// The row template renders the label next to the control.
    #[default]
    Standard,
    /// The widget embeds its own label; the row must not render one.
    SelfLabeling,
}

/// Trait for form widgets that render HTML controls.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The current value (if any)
    /// * `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// Returns the HTML input type.
    fn input_type(&self) -> &str {
        "text"
    }

    /// Hidden widgets never get a row of their own.
    fn is_hidden(&self) -> bool {
        false
    }

    /// Returns who renders the label of fields using this widget.
    fn label_placement(&self) -> LabelPlacement {
        LabelPlacement::Standard
    }

    /// Renders the widget together with its label.
    ///
    /// Only called for [`LabelPlacement::SelfLabeling`] widgets.
    fn render_labeled(
        &self,
        name: &str,
        value: Option<&str>,
        attrs: &WidgetAttrs,
        _label: &str,
    ) -> String {
        self.render(name, value, attrs)
    }
}

/// A hidden input widget.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        format!(
            r#"<input type="hidden" name="{}"{}{}>"#,
            html_escape(name),
            value_attr(value),
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        "hidden"
    }

    fn is_hidden(&self) -> bool {
        true
    }
}

/// A single-line `<input>` widget.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The HTML input type (text, email, password, number).
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: None,
        }
    }
}

impl TextInput {
    /// Creates a text input.
    pub fn new() -> Self {
        Self::default()
    }

    fn typed(input_type: &str) -> Self {
        Self {
            input_type: input_type.to_string(),
            placeholder: None,
        }
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self::typed("email")
    }

    /// Creates a password input.
    pub fn password() -> Self {
        Self::typed("password")
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self::typed("number")
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for TextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        // Passwords are never echoed back.
        let value = if self.input_type == "password" {
            None
        } else {
            value
        };
        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        format!(
            r#"<input type="{}" name="{}"{}{placeholder_attr}{}>"#,
            self.input_type,
            html_escape(name),
            value_attr(value),
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// A multi-line `<textarea>` widget.
#[derive(Debug, Clone)]
pub struct Textarea {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Default for Textarea {
    fn default() -> Self {
        Self { rows: 10, cols: 40 }
    }
}

impl Textarea {
    /// Creates a textarea with the given number of rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }
}

impl Widget for Textarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let content = value.map(html_escape).unwrap_or_default();
        format!(
            r#"<textarea name="{}" rows="{}" cols="{}"{}>{content}</textarea>"#,
            html_escape(name),
            self.rows,
            self.cols,
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

fn value_attr(value: Option<&str>) -> String {
    value
        .map(|v| format!(r#" value="{}""#, html_escape(v)))
        .unwrap_or_default()
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
