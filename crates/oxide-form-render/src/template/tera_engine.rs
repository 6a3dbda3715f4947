//! Tera-backed template engine.

use serde_json::Value;
use tera::{Context, ErrorKind, Tera};
use tracing::debug;

use super::{
    RenderContext, TemplateEngine, ERRORLIST_TEMPLATE, FORM_TEMPLATE, LABEL_TEMPLATE,
    ROW_TEMPLATE,
};
use crate::error::{RenderError, Result};

const FORM_SOURCE: &str =
    "{{ top_errors | safe }}{{ hidden_fields | safe }}{{ rows | safe }}";

const ROW_SOURCE: &str = concat!(
    r#"<div class="form-row{% if css_classes %} {{ css_classes }}{% endif %}" id="row-{{ name }}">"#,
    "{{ errors | safe }}",
    "{% if must_render_label %}{{ label | safe }}{% endif %}",
    "{{ field | safe }}",
    r#"{% if help_text %}<span class="helptext">{{ help_text }}</span>{% endif %}"#,
    "</div>",
);

const ERRORLIST_SOURCE: &str = concat!(
    r#"{% if errors %}<ul class="errorlist">"#,
    "{% for error in errors %}<li>{{ error }}</li>{% endfor %}",
    "</ul>{% endif %}",
);

const LABEL_SOURCE: &str = r#"<label for="{{ id }}">{{ label }}</label>"#;

/// Renders templates written in the Tera language.
///
/// Values holding markup (`field`, `label`, `errors`, `rows`, ...) must be
/// output with the `safe` filter, since `.html` templates are autoescaped.
#[derive(Debug, Default)]
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    /// Creates an engine without templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine holding the four default templates.
    pub fn with_defaults() -> Result<Self> {
        let mut engine = Self::new();
        engine.tera.add_raw_templates(vec![
            (FORM_TEMPLATE, FORM_SOURCE),
            (ROW_TEMPLATE, ROW_SOURCE),
            (ERRORLIST_TEMPLATE, ERRORLIST_SOURCE),
            (LABEL_TEMPLATE, LABEL_SOURCE),
        ])?;
        Ok(engine)
    }

    /// Loads every template matching a glob, e.g. `"templates/**/*.html"`.
    pub fn from_glob(pattern: &str) -> Result<Self> {
        Ok(Self {
            tera: Tera::new(pattern)?,
        })
    }

    /// Adds or replaces a template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.tera.add_raw_template(name, source)?;
        Ok(())
    }

    /// Builder variant of [`TeraEngine::add_template`].
    pub fn template(mut self, name: &str, source: &str) -> Result<Self> {
        self.add_template(name, source)?;
        Ok(self)
    }

    /// The wrapped Tera instance.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Mutable access to the wrapped Tera instance, e.g. to register filters.
    pub fn tera_mut(&mut self) -> &mut Tera {
        &mut self.tera
    }
}

impl From<Tera> for TeraEngine {
    fn from(tera: Tera) -> Self {
        Self { tera }
    }
}

impl TemplateEngine for TeraEngine {
    fn render(&self, name: &str, context: &RenderContext) -> Result<String> {
        let context = Context::from_value(Value::Object(context.clone()))?;
        debug!(template = name, engine = "tera", "rendering template");
        self.tera.render(name, &context).map_err(|err| {
            if matches!(err.kind, ErrorKind::TemplateNotFound(_)) {
                RenderError::TemplateNotFound(name.to_string())
            } else {
                RenderError::Tera(err)
            }
        })
    }
}
