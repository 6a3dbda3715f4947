//! Form renderer: configuration plus the collaborators used while rendering.

use serde_json::json;
use tracing::debug;

use crate::config::FormRenderConfig;
use crate::error::Result;
use crate::form::Form;
use crate::i18n::{PassThrough, Translator};
use crate::template::{RenderContext, TemplateEngine, TemplateRegistry};
use crate::view::{FormView, RowContextHook};

/// Renders forms of one kind.
///
/// Holds the template names, fieldset declarations and CSS classes of a
/// form type together with the template engine, the label translator and
/// an optional row-context hook. Each call to [`FormRenderer::view`] starts
/// a fresh render of one form instance.
pub struct FormRenderer {
    config: FormRenderConfig,
    engine: Box<dyn TemplateEngine>,
    translator: Box<dyn Translator>,
    row_hook: Option<Box<dyn RowContextHook>>,
}

impl std::fmt::Debug for FormRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRenderer")
            .field("config", &self.config)
            .field("row_hook", &self.row_hook.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for FormRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormRenderer {
    /// Creates a renderer with the default config and built-in templates.
    pub fn new() -> Self {
        Self {
            config: FormRenderConfig::default(),
            engine: Box::new(TemplateRegistry::with_defaults()),
            translator: Box::new(PassThrough),
            row_hook: None,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: FormRenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the template engine.
    #[must_use]
    pub fn with_engine(mut self, engine: impl TemplateEngine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// Replaces the label translator.
    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Installs a hook adding values to every row context.
    #[must_use]
    pub fn with_row_hook(mut self, hook: impl RowContextHook + 'static) -> Self {
        self.row_hook = Some(Box::new(hook));
        self
    }

    /// The configuration.
    pub fn config(&self) -> &FormRenderConfig {
        &self.config
    }

    /// Starts rendering `form`.
    pub fn view<'a>(&'a self, form: &'a Form) -> FormView<'a> {
        FormView::new(form, self.env())
    }

    /// Renders `form` through the form template.
    pub fn render(&self, form: &Form) -> Result<String> {
        self.view(form).render()
    }

    pub(crate) fn env(&self) -> RenderEnv<'_> {
        RenderEnv {
            config: &self.config,
            engine: self.engine.as_ref(),
            translator: self.translator.as_ref(),
            row_hook: self.row_hook.as_deref(),
        }
    }
}

/// Borrowed collaborators shared by a view and its rows.
#[derive(Clone, Copy)]
pub(crate) struct RenderEnv<'a> {
    pub(crate) config: &'a FormRenderConfig,
    pub(crate) engine: &'a dyn TemplateEngine,
    pub(crate) translator: &'a dyn Translator,
    pub(crate) row_hook: Option<&'a dyn RowContextHook>,
}

impl RenderEnv<'_> {
    pub(crate) fn render_template(&self, name: &str, context: &RenderContext) -> Result<String> {
        debug!(template = name, "rendering form template");
        self.engine.render(name, context)
    }

    pub(crate) fn render_errors(&self, errors: &[String]) -> Result<String> {
        let mut context = RenderContext::new();
        context.insert("errors".to_string(), json!(errors));
        self.render_template(&self.config.errorlist_template, &context)
    }
}
