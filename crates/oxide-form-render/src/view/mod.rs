//! View-model builder for one form render.

mod errors;
mod row;

pub use errors::ErrorList;
pub use row::{RowContextHook, RowView};

use std::rc::Rc;

use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use serde_json::{json, Map, Value};
use tracing::trace;

use crate::bound::BoundField;
use crate::error::Result;
use crate::form::Form;
use crate::renderer::RenderEnv;
use crate::template::RenderContext;

/// Bound fields keyed by field name, in declaration order.
pub type FieldMap<'a> = IndexMap<String, Rc<BoundField<'a>>>;

/// Rows keyed by field name, in declaration order.
pub type RowMap<'a> = IndexMap<String, RowView<'a>>;

/// Derived values of one form render.
///
/// Every accessor computes its value on first use and returns the cached
/// value afterwards. A view belongs to a single render and is not shared.
pub struct FormView<'a> {
    form: &'a Form,
    env: RenderEnv<'a>,
    bound_fields: OnceCell<FieldMap<'a>>,
    hidden_fields: OnceCell<FieldMap<'a>>,
    visible_fields: OnceCell<FieldMap<'a>>,
    rows: OnceCell<RowMap<'a>>,
    top_errors: OnceCell<ErrorList>,
    context: OnceCell<RenderContext>,
}

impl std::fmt::Debug for FormView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormView")
            .field("form", &self.form)
            .finish_non_exhaustive()
    }
}

impl<'a> FormView<'a> {
    pub(crate) fn new(form: &'a Form, env: RenderEnv<'a>) -> Self {
        Self {
            form,
            env,
            bound_fields: OnceCell::new(),
            hidden_fields: OnceCell::new(),
            visible_fields: OnceCell::new(),
            rows: OnceCell::new(),
            top_errors: OnceCell::new(),
            context: OnceCell::new(),
        }
    }

    /// The form being rendered.
    pub fn form(&self) -> &'a Form {
        self.form
    }

    /// Every field, bound to this form.
    pub fn bound_fields(&self) -> &FieldMap<'a> {
        self.bound_fields.get_or_init(|| {
            let form = self.form;
            form.fields
                .iter()
                .map(|(name, field)| (name.clone(), Rc::new(BoundField::new(form, name, field))))
                .collect()
        })
    }

    fn partition(&self, hidden: bool) -> FieldMap<'a> {
        self.bound_fields()
            .iter()
            .filter(|(_, field)| field.is_hidden() == hidden)
            .map(|(name, field)| (name.clone(), Rc::clone(field)))
            .collect()
    }

    /// Fields rendered as hidden inputs.
    pub fn hidden_fields(&self) -> &FieldMap<'a> {
        self.hidden_fields.get_or_init(|| self.partition(true))
    }

    /// Fields that get a row.
    pub fn visible_fields(&self) -> &FieldMap<'a> {
        self.visible_fields.get_or_init(|| self.partition(false))
    }

    /// One row per visible field.
    pub fn rows(&self) -> &RowMap<'a> {
        self.rows.get_or_init(|| {
            self.visible_fields()
                .iter()
                .map(|(name, field)| (name.clone(), RowView::new(Rc::clone(field), self.env)))
                .collect()
        })
    }

    /// Whole-form errors followed by the errors of hidden fields.
    ///
    /// Hidden fields have no row to show their errors in, so each of their
    /// errors is prefixed with the field name.
    pub fn top_errors(&self) -> &ErrorList {
        self.top_errors.get_or_init(|| {
            let mut errors = self.form.errors.non_field_errors().to_vec();
            for field in self.hidden_fields().values() {
                errors.extend(
                    field
                        .errors()
                        .iter()
                        .map(|error| format!("(Hidden field {}) {error}", field.name())),
                );
            }
            ErrorList::new(errors)
        })
    }

    /// Fieldset lookup.
    pub fn fieldsets(&self) -> Fieldsets<'_, 'a> {
        Fieldsets {
            definitions: &self.env.config.fieldset_definitions,
            rows: self.rows(),
        }
    }

    /// Rows of a declared fieldset; `None` if undeclared or declared empty.
    pub fn fieldset(&self, name: &str) -> Option<Fieldset<'_, 'a>> {
        self.fieldsets().get(name)
    }

    /// Markup of every hidden input.
    pub fn render_hidden_fields(&self) -> String {
        self.hidden_fields()
            .values()
            .map(|field| field.as_widget())
            .collect()
    }

    /// Markup of every row.
    pub fn render_rows(&self) -> Result<String> {
        self.rows().values().map(RowView::render).collect()
    }

    /// Markup of the top error list.
    pub fn render_top_errors(&self) -> Result<String> {
        self.env.render_errors(self.top_errors())
    }

    /// Context of the form template.
    pub fn context(&self) -> Result<&RenderContext> {
        self.context.get_or_try_init(|| self.build_context())
    }

    fn build_context(&self) -> Result<RenderContext> {
        let fieldsets = self.fieldsets();
        let mut rendered_fieldsets = Map::new();
        for name in fieldsets.names() {
            if let Some(fieldset) = fieldsets.get(name) {
                rendered_fieldsets.insert(name.to_string(), Value::String(fieldset.render()?));
            }
        }

        let mut row_html = Map::new();
        for (name, row) in self.rows() {
            row_html.insert(name.clone(), json!(row.render()?));
        }
        let hidden_field_html: Map<String, Value> = self
            .hidden_fields()
            .iter()
            .map(|(name, field)| (name.clone(), Value::String(field.as_widget())))
            .collect();
        let fields: Vec<Value> = self
            .bound_fields()
            .values()
            .map(|field| field.to_value())
            .collect();

        let mut context = RenderContext::new();
        context.insert("hidden_fields".to_string(), Value::String(self.render_hidden_fields()));
        context.insert("hidden_field_html".to_string(), Value::Object(hidden_field_html));
        context.insert("rows".to_string(), Value::String(self.render_rows()?));
        context.insert("row_html".to_string(), Value::Object(row_html));
        context.insert("fields".to_string(), Value::Array(fields));
        context.insert("top_errors".to_string(), Value::String(self.render_top_errors()?));
        context.insert("top_error_list".to_string(), json!(self.top_errors().messages()));
        context.insert("fieldsets".to_string(), Value::Object(rendered_fieldsets));
        context.insert(
            "field_names".to_string(),
            json!(self.rows().keys().collect::<Vec<_>>()),
        );
        context.insert("form".to_string(), self.form.to_value());
        Ok(context)
    }

    /// Renders the whole form through the form template.
    pub fn render(&self) -> Result<String> {
        let context = self.context()?;
        self.env
            .render_template(&self.env.config.form_template, context)
    }
}

/// Lookup of declared fieldsets against the rows of one render.
#[derive(Debug, Clone, Copy)]
pub struct Fieldsets<'r, 'a> {
    definitions: &'r IndexMap<String, Vec<String>>,
    rows: &'r RowMap<'a>,
}

impl<'r, 'a> Fieldsets<'r, 'a> {
    /// Declared fieldset names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'r str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Rows of fieldset `name`, in declared order.
    ///
    /// Names that are not visible rows are skipped. Returns `None` when the
    /// fieldset is undeclared or declared without fields.
    pub fn get(&self, name: &str) -> Option<Fieldset<'r, 'a>> {
        let Some((name, field_names)) = self
            .definitions
            .get_key_value(name)
            .filter(|(_, field_names)| !field_names.is_empty())
        else {
            trace!(fieldset = name, "fieldset not declared");
            return None;
        };

        let rows = field_names
            .iter()
            .filter_map(|field_name| self.rows.get_key_value(field_name.as_str()))
            .map(|(field_name, row)| (field_name.as_str(), row))
            .collect();

        Some(Fieldset { name, rows })
    }
}

/// Rows of one fieldset.
#[derive(Debug)]
pub struct Fieldset<'r, 'a> {
    name: &'r str,
    rows: IndexMap<&'r str, &'r RowView<'a>>,
}

impl<'r, 'a> Fieldset<'r, 'a> {
    /// The fieldset name.
    pub fn name(&self) -> &'r str {
        self.name
    }

    /// Field names of the rows, in order.
    pub fn keys(&self) -> Vec<&'r str> {
        self.rows.keys().copied().collect()
    }

    /// The row of one field.
    pub fn get(&self, field_name: &str) -> Option<&'r RowView<'a>> {
        self.rows.get(field_name).copied()
    }

    /// The rows, in order.
    pub fn rows(&self) -> impl Iterator<Item = &'r RowView<'a>> + '_ {
        self.rows.values().copied()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no declared field is a visible row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Markup of every row of the fieldset.
    pub fn render(&self) -> Result<String> {
        self.rows().map(RowView::render).collect()
    }
}
