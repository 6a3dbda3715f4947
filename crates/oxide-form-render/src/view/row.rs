//! Row view-models: one renderable unit per visible field.

use std::rc::Rc;

use once_cell::unsync::OnceCell;
use serde_json::{json, Value};
use tracing::trace;

use super::errors::ErrorList;
use crate::bound::BoundField;
use crate::error::Result;
use crate::renderer::RenderEnv;
use crate::template::RenderContext;
use crate::widgets::LabelPlacement;

/// Adds project-specific values to every row context.
///
/// Returned entries are merged over the standard keys, so a hook may also
/// replace them.
pub trait RowContextHook: Send + Sync {
    /// Returns the values to merge into the row context of `field`.
    fn update_row_context(&self, field: &BoundField<'_>) -> RenderContext;
}

/// The view-model of one visible field.
///
/// The template context and the rendered markup are built on first use and
/// kept for the lifetime of the row.
pub struct RowView<'a> {
    bound_field: Rc<BoundField<'a>>,
    env: RenderEnv<'a>,
    errors: ErrorList,
    label_title: OnceCell<String>,
    label_tag: OnceCell<String>,
    field_html: OnceCell<String>,
    context: OnceCell<RenderContext>,
    html: OnceCell<String>,
}

impl std::fmt::Debug for RowView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowView")
            .field("name", &self.name())
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl<'a> RowView<'a> {
    pub(crate) fn new(bound_field: Rc<BoundField<'a>>, env: RenderEnv<'a>) -> Self {
        let errors = ErrorList::from(bound_field.errors());
        Self {
            bound_field,
            env,
            errors,
            label_title: OnceCell::new(),
            label_tag: OnceCell::new(),
            field_html: OnceCell::new(),
            context: OnceCell::new(),
            html: OnceCell::new(),
        }
    }

    /// The field name.
    pub fn name(&self) -> &'a str {
        self.bound_field.name()
    }

    /// The bound field behind this row.
    pub fn bound_field(&self) -> &BoundField<'a> {
        &self.bound_field
    }

    /// The field's own errors.
    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    /// The help text, or an empty string.
    pub fn help_text(&self) -> &'a str {
        self.bound_field.help_text()
    }

    /// CSS classes of the row.
    pub fn css_classes(&self) -> String {
        let config = self.env.config;
        self.bound_field
            .css_classes(&config.required_css_class, config.error_css_class.as_deref())
    }

    /// The translated label, or an empty string if the field has none.
    pub fn label_title(&self) -> &str {
        self.label_title.get_or_init(|| match self.bound_field.label() {
            "" => String::new(),
            label => self.env.translator.translate(label),
        })
    }

    /// Whether the row template must render the label; `false` when the
    /// widget embeds its own.
    pub fn must_render_label(&self) -> bool {
        self.bound_field.field().widget.label_placement() == LabelPlacement::Standard
    }

    /// The rendered control.
    pub fn field_html(&self) -> &str {
        self.field_html.get_or_init(|| {
            if self.must_render_label() {
                self.bound_field.as_widget()
            } else {
                self.bound_field.as_labeled_widget(self.label_title())
            }
        })
    }

    /// Renders the label template, or returns an empty string when the field
    /// has no id or no label.
    pub fn label_tag(&self) -> Result<&str> {
        self.label_tag
            .get_or_try_init(|| self.render_label_tag())
            .map(String::as_str)
    }

    fn render_label_tag(&self) -> Result<String> {
        let label = self.label_title();
        let Some(id) = self.bound_field.id_for_label() else {
            trace!(field = self.name(), "no id for label, skipping label tag");
            return Ok(String::new());
        };
        if label.is_empty() {
            return Ok(String::new());
        }

        let mut context = RenderContext::new();
        context.insert("id".to_string(), json!(id));
        context.insert("label".to_string(), json!(label));
        context.insert("field".to_string(), self.bound_field.field().to_value());
        self.env
            .render_template(&self.env.config.label_template, &context)
    }

    /// The template context of this row.
    pub fn context(&self) -> Result<&RenderContext> {
        self.context.get_or_try_init(|| self.build_context())
    }

    fn build_context(&self) -> Result<RenderContext> {
        let label_tag = self.label_tag()?;
        let errors = self.env.render_errors(&self.errors)?;
        let bound_field = &self.bound_field;

        let mut context = RenderContext::new();
        context.insert("label".to_string(), json!(label_tag));
        context.insert("label_title".to_string(), json!(self.label_title()));
        context.insert("field".to_string(), json!(self.field_html()));
        context.insert("name".to_string(), json!(self.name()));
        context.insert("css_classes".to_string(), Value::String(self.css_classes()));
        context.insert("help_text".to_string(), json!(self.help_text()));
        context.insert("errors".to_string(), Value::String(errors));
        context.insert("error_list".to_string(), json!(self.errors.messages()));
        context.insert("form".to_string(), bound_field.form().to_value());
        context.insert("bound_field".to_string(), bound_field.to_value());
        context.insert(
            "must_render_label".to_string(),
            Value::Bool(self.must_render_label()),
        );

        if let Some(hook) = self.env.row_hook {
            let extra = hook.update_row_context(bound_field);
            trace!(field = self.name(), keys = extra.len(), "merging row context hook values");
            context.extend(extra);
        }

        Ok(context)
    }

    /// The template this row renders with.
    pub fn template_name(&self) -> &'a str {
        self.env.config.row_template_for(self.name())
    }

    /// Renders the row.
    pub fn render(&self) -> Result<&str> {
        self.html
            .get_or_try_init(|| {
                let context = self.context()?;
                self.env.render_template(self.template_name(), context)
            })
            .map(String::as_str)
    }
}
