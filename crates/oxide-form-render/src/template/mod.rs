//! Template engines.
//!
//! Rendering is always addressed by template name. Two engines are provided:
//! [`TemplateRegistry`], a map of names to Rust render functions whose
//! defaults are built with `ironhtml`, and [`TeraEngine`] for template text.

mod builtin;
mod tera_engine;

pub use tera_engine::TeraEngine;

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{RenderError, Result};

/// Default template rendering the whole form.
pub const FORM_TEMPLATE: &str = "forms/form.html";
/// Default template rendering one row.
pub const ROW_TEMPLATE: &str = "forms/row.html";
/// Default template rendering an error list.
pub const ERRORLIST_TEMPLATE: &str = "forms/errorlist.html";
/// Default template rendering a label tag.
pub const LABEL_TEMPLATE: &str = "forms/label.html";

/// Key/value context handed to a template.
pub type RenderContext = Map<String, Value>;

/// Renders named templates.
pub trait TemplateEngine: Send + Sync {
    /// Renders template `name` with `context`.
    ///
    /// Returns [`RenderError::TemplateNotFound`] if no such template exists.
    fn render(&self, name: &str, context: &RenderContext) -> Result<String>;
}

type RenderFn = Box<dyn Fn(&RenderContext) -> Result<String> + Send + Sync>;

/// Templates implemented as Rust functions.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, RenderFn>,
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.templates.keys().collect();
        names.sort();
        f.debug_struct("TemplateRegistry")
            .field("templates", &names)
            .finish()
    }
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the four default templates.
    pub fn with_defaults() -> Self {
        Self::new()
            .template(FORM_TEMPLATE, builtin::render_form)
            .template(ROW_TEMPLATE, builtin::render_row)
            .template(ERRORLIST_TEMPLATE, builtin::render_errorlist)
            .template(LABEL_TEMPLATE, builtin::render_label)
    }

    /// Registers a template, replacing any template of the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, render: F)
    where
        F: Fn(&RenderContext) -> Result<String> + Send + Sync + 'static,
    {
        self.templates.insert(name.into(), Box::new(render));
    }

    /// Builder variant of [`TemplateRegistry::register`].
    #[must_use]
    pub fn template<F>(mut self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&RenderContext) -> Result<String> + Send + Sync + 'static,
    {
        self.register(name, render);
        self
    }

    /// Returns whether a template is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

impl TemplateEngine for TemplateRegistry {
    fn render(&self, name: &str, context: &RenderContext) -> Result<String> {
        let render = self
            .templates
            .get(name)
            .ok_or_else(|| RenderError::TemplateNotFound(name.to_string()))?;
        debug!(template = name, engine = "registry", "rendering template");
        render(context)
    }
}

/// Returns a string value of the context, or `""`.
pub fn context_str<'c>(context: &'c RenderContext, key: &str) -> &'c str {
    context.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Returns the truthiness of a context value.
pub fn context_bool(context: &RenderContext, key: &str) -> bool {
    match context.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

/// Returns the string items of an array value.
pub fn context_strings(context: &RenderContext, key: &str) -> Vec<String> {
    context
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn context(value: Value) -> RenderContext {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_registry_renders_registered_template() {
        let registry = TemplateRegistry::new().template("hello.html", |ctx: &RenderContext| {
            Ok(format!("Hello {}", context_str(ctx, "name")))
        });

        let html = registry
            .render("hello.html", &context(json!({"name": "world"})))
            .unwrap_or_else(|e| panic!("render failed: {e}"));
        assert_eq!(html, "Hello world");
    }

    #[test]
    fn test_registry_missing_template() {
        let registry = TemplateRegistry::new();
        let err = registry
            .render("missing.html", &RenderContext::new())
            .expect_err("missing template must fail");
        assert!(matches!(err, RenderError::TemplateNotFound(name) if name == "missing.html"));
    }

    #[test]
    fn test_registry_template_errors_propagate() {
        let registry = TemplateRegistry::new().template("broken.html", |_: &RenderContext| {
            Err(RenderError::Template {
                name: "broken.html".to_string(),
                message: "unclosed tag".to_string(),
            })
        });
        let err = registry
            .render("broken.html", &RenderContext::new())
            .expect_err("template error must propagate");
        assert!(matches!(err, RenderError::Template { .. }));
    }

    #[test]
    fn test_defaults_registered() {
        let registry = TemplateRegistry::with_defaults();
        for name in [FORM_TEMPLATE, ROW_TEMPLATE, ERRORLIST_TEMPLATE, LABEL_TEMPLATE] {
            assert!(registry.contains(name), "{name} should be registered");
        }
    }

    #[test]
    fn test_context_helpers() {
        let ctx = context(json!({
            "name": "code",
            "flag": true,
            "empty": "",
            "errors": ["a", "b", 3],
        }));
        assert_eq!(context_str(&ctx, "name"), "code");
        assert_eq!(context_str(&ctx, "missing"), "");
        assert!(context_bool(&ctx, "flag"));
        assert!(!context_bool(&ctx, "empty"));
        assert!(context_bool(&ctx, "errors"));
        assert!(!context_bool(&ctx, "missing"));
        assert_eq!(context_strings(&ctx, "errors"), vec!["a", "b"]);
    }
}
