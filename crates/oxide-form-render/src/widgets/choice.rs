//! Select and checkbox widgets.

use super::{html_escape, LabelPlacement, Widget, WidgetAttrs};

/// A `<select>` dropdown.
#[derive(Debug, Clone)]
pub struct Select {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
    /// Whether to include an empty option.
    pub include_blank: bool,
    /// Label for blank option.
    pub blank_label: String,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
            include_blank: true,
            blank_label: "---------".to_string(),
        }
    }
}

impl Select {
    /// Creates a new select with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            ..Default::default()
        }
    }

    /// Disables the blank option.
    #[must_use]
    pub fn no_blank(mut self) -> Self {
        self.include_blank = false;
        self
    }
}

impl Widget for Select {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut options = String::new();

        if self.include_blank {
            options.push_str(&format!(
                r#"<option value="">{}</option>"#,
                html_escape(&self.blank_label)
            ));
        }

        for (opt_value, label) in &self.choices {
            let selected_attr = if value == Some(opt_value.as_str()) {
                " selected"
            } else {
                ""
            };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(opt_value),
                html_escape(label)
            ));
        }

        format!(
            r#"<select name="{}"{}>{options}</select>"#,
            html_escape(name),
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

/// A checkbox that renders its own label around the input.
#[derive(Debug, Clone, Default)]
pub struct CheckboxInput;

impl CheckboxInput {
    fn is_checked(value: Option<&str>) -> bool {
        matches!(value, Some("true" | "on" | "1"))
    }
}

impl Widget for CheckboxInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let checked_attr = if Self::is_checked(value) { " checked" } else { "" };
        format!(
            r#"<input type="checkbox" name="{}" value="true"{checked_attr}{}>"#,
            html_escape(name),
            attrs.to_html()
        )
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }

    fn label_placement(&self) -> LabelPlacement {
        LabelPlacement::SelfLabeling
    }

    fn render_labeled(
        &self,
        name: &str,
        value: Option<&str>,
        attrs: &WidgetAttrs,
        label: &str,
    ) -> String {
        let input = self.render(name, value, attrs);
        if label.is_empty() {
            return input;
        }
        let for_attr = attrs
            .get("id")
            .map(|id| format!(r#" for="{}""#, html_escape(id)))
            .unwrap_or_default();
        format!("<label{for_attr}>{input} {}</label>", html_escape(label))
    }
}
