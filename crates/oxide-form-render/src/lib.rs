//! # oxide-form-render
//!
//! Template-driven rendering of forms.
//!
//! Given a form instance (field definitions, submitted data and validation
//! errors), a [`FormView`] derives everything a layout template needs:
//! - hidden fields, rendered together outside the normal row flow
//! - one row per visible field (label, control, errors, help text)
//! - top errors: whole-form errors plus the errors of hidden fields
//! - fieldsets: named, ordered subsets of the rows
//!
//! Markup comes from named templates, so a project restyles forms by
//! registering its own templates instead of changing this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_form_render::fields::{char_field, hidden_field, text_field};
//! use oxide_form_render::{FormBuilder, FormRenderConfig, FormRenderer, ValidationErrors};
//! use std::collections::HashMap;
//!
//! let form = FormBuilder::new()
//!     .field(char_field("name", "Name", 50, true).help_text("help text"))
//!     .field(text_field("description", "Description", 4, false))
//!     .field(hidden_field("code", true))
//!     .build()
//!     .bind(HashMap::new())
//!     .with_errors(
//!         ValidationErrors::new()
//!             .with("__all__", "Top message")
//!             .with("name", "This field is required.")
//!             .with("code", "This field is required."),
//!     );
//!
//! let renderer = FormRenderer::new()
//!     .with_config(FormRenderConfig::new().fieldset("f1", ["name"]));
//! let view = renderer.view(&form);
//!
//! assert_eq!(
//!     view.top_errors().messages(),
//!     ["Top message", "(Hidden field code) This field is required."]
//! );
//! assert_eq!(view.rows().keys().collect::<Vec<_>>(), ["name", "description"]);
//! assert_eq!(view.fieldset("f1").map(|f| f.len()), Some(1));
//!
//! let html = view.render().unwrap();
//! assert!(html.contains(r#"id="row-name""#));
//! ```
//!
//! ## Custom templates
//!
//! ```rust
//! use oxide_form_render::{FormRenderConfig, FormRenderer, TeraEngine};
//!
//! let engine = TeraEngine::with_defaults()
//!     .unwrap()
//!     .template("compact_row.html", "<p>{{ label | safe }}{{ field | safe }}</p>")
//!     .unwrap();
//!
//! let renderer = FormRenderer::new()
//!     .with_engine(engine)
//!     .with_config(FormRenderConfig::new().row_template("compact_row.html"));
//! # let _ = renderer;
//! ```

mod bound;
mod config;
mod error;
pub mod fields;
mod form;
pub mod i18n;
mod renderer;
pub mod template;
mod view;
pub mod widgets;

pub use bound::BoundField;
pub use config::FormRenderConfig;
pub use error::{RenderError, Result, ValidationErrors, NON_FIELD_ERRORS};
pub use form::{Form, FormBuilder, FormFieldDef, DEFAULT_AUTO_ID};
pub use i18n::{Catalog, PassThrough, Translator};
pub use renderer::FormRenderer;
pub use template::{RenderContext, TemplateEngine, TemplateRegistry, TeraEngine};
pub use view::{ErrorList, FieldMap, Fieldset, Fieldsets, FormView, RowContextHook, RowMap, RowView};
