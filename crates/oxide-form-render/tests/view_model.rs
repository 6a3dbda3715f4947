//! Tests for the derived values of a form view.

mod common;
use common::*;

use oxide_form_render::fields::{boolean_field, char_field, hidden_field};
use oxide_form_render::{
    BoundField, Catalog, FormBuilder, FormRenderConfig, FormRenderer, RenderContext,
    RowContextHook, ValidationErrors,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn keys<V>(map: &indexmap::IndexMap<String, V>) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

#[test]
fn hidden_and_visible_fields_partition_the_form() {
    let form = example_form();
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    assert_eq!(keys(view.hidden_fields()), ["code"]);
    assert_eq!(keys(view.visible_fields()), ["name", "description", "type"]);

    let mut all: Vec<&str> = keys(view.hidden_fields());
    all.extend(keys(view.visible_fields()));
    all.sort_unstable();
    let mut declared: Vec<&str> = form.fields.keys().map(String::as_str).collect();
    declared.sort_unstable();
    assert_eq!(all, declared);

    for name in view.hidden_fields().keys() {
        assert!(!view.visible_fields().contains_key(name));
    }
}

#[test]
fn rows_follow_visible_fields() {
    let form = example_form();
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    assert_eq!(keys(view.rows()), keys(view.visible_fields()));
    assert!(!view.rows().contains_key("code"));
}

#[test]
fn unbound_form_has_no_top_errors() {
    let form = example_form();
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    assert!(view.top_errors().is_empty());
}

#[test]
fn top_errors_list_form_errors_then_hidden_field_errors() {
    let form = posted_example_form();
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    assert_eq!(
        view.top_errors().messages(),
        [
            TOP_MESSAGE.to_string(),
            format!("(Hidden field code) {REQUIRED}"),
        ]
    );
    assert_eq!(view.rows()["name"].errors().messages(), [REQUIRED]);
    assert!(view.rows()["description"].errors().is_empty());
}

#[test]
fn top_errors_count_every_hidden_field_error() {
    let form = FormBuilder::new()
        .field(hidden_field("a", true))
        .field(char_field("visible", "Visible", 10, true))
        .field(hidden_field("b", false))
        .build()
        .with_errors(
            ValidationErrors::new()
                .with("b", "b1")
                .with("a", "a1")
                .with("visible", "not counted")
                .with("a", "a2")
                .with("__all__", "form1")
                .with("__all__", "form2"),
        );
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    assert_eq!(
        view.top_errors().messages(),
        [
            "form1",
            "form2",
            "(Hidden field a) a1",
            "(Hidden field a) a2",
            "(Hidden field b) b1",
        ]
    );
}

#[test]
fn fieldset_holds_declared_visible_rows() {
    let form = example_form();
    let renderer = FormRenderer::new().with_config(example_config());
    let view = renderer.view(&form);

    let f1 = view
        .fieldset("f1")
        .unwrap_or_else(|| panic!("f1 is declared"));
    assert_eq!(f1.name(), "f1");
    assert_eq!(f1.keys(), ["name"]);
    assert_eq!(f1.get("name").map(|row| row.name()), Some("name"));

    let f2 = view
        .fieldset("f2")
        .unwrap_or_else(|| panic!("f2 is declared"));
    assert_eq!(f2.keys(), ["type", "description"]);
}

#[test]
fn fieldset_skips_unknown_and_hidden_fields() {
    let form = example_form();
    let config = FormRenderConfig::new()
        .fieldset("hidden_only", ["code"])
        .fieldset("mixed", ["missing", "description", "code", "name"]);
    let renderer = FormRenderer::new().with_config(config);
    let view = renderer.view(&form);

    let hidden_only = view
        .fieldset("hidden_only")
        .unwrap_or_else(|| panic!("hidden_only is declared"));
    assert!(hidden_only.is_empty());

    let mixed = view
        .fieldset("mixed")
        .unwrap_or_else(|| panic!("mixed is declared"));
    assert_eq!(mixed.keys(), ["description", "name"]);
}

#[test]
fn undeclared_or_empty_fieldset_is_absent() {
    let form = example_form();
    let config = example_config().fieldset("empty", Vec::<String>::new());
    let renderer = FormRenderer::new().with_config(config);
    let view = renderer.view(&form);

    assert!(view.fieldset("aa").is_none());
    assert!(view.fieldset("empty").is_none());
    assert_eq!(view.fieldsets().names().collect::<Vec<_>>(), ["f1", "f2", "empty"]);
}

#[test]
fn repeated_access_returns_cached_values() {
    let form = posted_example_form();
    let renderer = FormRenderer::new().with_config(example_config());
    let view = renderer.view(&form);

    assert!(std::ptr::eq(view.rows(), view.rows()));
    assert!(std::ptr::eq(view.hidden_fields(), view.hidden_fields()));
    assert!(std::ptr::eq(view.top_errors(), view.top_errors()));

    let row = &view.rows()["name"];
    let first = row.context().unwrap_or_else(|e| panic!("context failed: {e}"));
    let second = row.context().unwrap_or_else(|e| panic!("context failed: {e}"));
    assert!(std::ptr::eq(first, second));

    let first = view.context().unwrap_or_else(|e| panic!("context failed: {e}"));
    let second = view.context().unwrap_or_else(|e| panic!("context failed: {e}"));
    assert!(std::ptr::eq(first, second));

    let f1 = view.fieldset("f1").unwrap_or_else(|| panic!("f1 is declared"));
    let row_in_fieldset = f1.get("name").unwrap_or_else(|| panic!("name row"));
    assert!(std::ptr::eq(row_in_fieldset, row));
}

#[test]
fn row_context_holds_view_model_values() {
    let form = posted_example_form();
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    let context = view.rows()["name"]
        .context()
        .unwrap_or_else(|e| panic!("context failed: {e}"));
    assert_eq!(context["name"], json!("name"));
    assert_eq!(context["label_title"], json!("Name"));
    assert_eq!(context["css_classes"], json!("required"));
    assert_eq!(context["help_text"], json!("help text"));
    assert_eq!(context["error_list"], json!([REQUIRED]));
    assert_eq!(context["must_render_label"], json!(true));
    assert_eq!(context["bound_field"]["html_name"], json!("name"));
    assert_eq!(context["form"]["is_bound"], json!(true));

    let label = context["label"].as_str().unwrap_or_default();
    assert!(label.contains(r#"for="id_name""#));
    let errors = context["errors"].as_str().unwrap_or_default();
    assert!(errors.contains(REQUIRED));
    let field = context["field"].as_str().unwrap_or_default();
    assert!(field.contains(r#"maxlength="50""#));
}

#[test]
fn error_css_class_marks_rows_with_errors() {
    let form = posted_example_form();
    let renderer =
        FormRenderer::new().with_config(FormRenderConfig::new().error_css_class("error"));
    let view = renderer.view(&form);

    assert_eq!(view.rows()["name"].css_classes(), "error required");
    assert_eq!(view.rows()["description"].css_classes(), "");
}

struct Placeholders;

impl RowContextHook for Placeholders {
    fn update_row_context(&self, field: &BoundField<'_>) -> RenderContext {
        let mut extra = RenderContext::new();
        extra.insert("placeholder".to_string(), json!(format!("Enter {}", field.name())));
        extra.insert("help_text".to_string(), json!("overridden"));
        extra
    }
}

#[test]
fn row_hook_values_are_merged() {
    let form = example_form();
    let renderer = FormRenderer::new().with_row_hook(Placeholders);
    let view = renderer.view(&form);

    let context = view.rows()["description"]
        .context()
        .unwrap_or_else(|e| panic!("context failed: {e}"));
    assert_eq!(context["placeholder"], json!("Enter description"));
    assert_eq!(context["help_text"], json!("overridden"));
}

#[test]
fn labels_are_translated() {
    let form = example_form();
    let renderer = FormRenderer::new().with_translator(Catalog::new().message("Name", "Naam"));
    let view = renderer.view(&form);

    let row = &view.rows()["name"];
    assert_eq!(row.label_title(), "Naam");
    let label_tag = row.label_tag().unwrap_or_else(|e| panic!("label failed: {e}"));
    assert!(label_tag.contains("Naam"));
    assert_eq!(view.rows()["type"].label_title(), "Type");
}

#[test]
fn empty_label_gives_empty_label_tag() {
    let mut form = example_form();
    if let Some(field) = form.fields.get_mut("name") {
        field.label.clear();
    }
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    let row = &view.rows()["name"];
    assert_eq!(row.label_title(), "");
    assert_eq!(row.label_tag().unwrap_or_else(|e| panic!("label failed: {e}")), "");
}

#[test]
fn missing_id_gives_empty_label_tag() {
    let form = example_form().with_auto_id(None);
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    let row = &view.rows()["name"];
    assert_eq!(row.label_title(), "Name");
    assert_eq!(row.label_tag().unwrap_or_else(|e| panic!("label failed: {e}")), "");
}

#[test]
fn self_labeling_widget_renders_its_own_label() {
    let form = FormBuilder::new()
        .field(boolean_field("agree", "I agree"))
        .build();
    let renderer = FormRenderer::new().with_translator(Catalog::new().message("I agree", "Akkoord"));
    let view = renderer.view(&form);

    let row = &view.rows()["agree"];
    assert!(!row.must_render_label());
    assert_eq!(
        row.field_html(),
        r#"<label for="id_agree"><input type="checkbox" name="agree" value="true" id="id_agree"> Akkoord</label>"#
    );

    let context = row.context().unwrap_or_else(|e| panic!("context failed: {e}"));
    assert_eq!(context["must_render_label"], json!(false));
}

#[test]
fn self_labeling_widget_without_label_renders_bare_input() {
    let form = FormBuilder::new().field(boolean_field("agree", "")).build();
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    let row = &view.rows()["agree"];
    assert_eq!(
        row.field_html(),
        r#"<input type="checkbox" name="agree" value="true" id="id_agree">"#
    );
    let html = row.render().unwrap_or_else(|e| panic!("row failed: {e}"));
    assert!(!html.contains("<label"));
}

#[test]
fn label_is_translated_and_rendered_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let translator = move |text: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
        text.to_uppercase()
    };
    let form = FormBuilder::new()
        .field(boolean_field("agree", "I agree"))
        .field(char_field("title", "Title", 20, false))
        .build();
    let renderer = FormRenderer::new().with_translator(translator);
    let view = renderer.view(&form);

    let agree = &view.rows()["agree"];
    agree.field_html();
    agree.context().unwrap_or_else(|e| panic!("context failed: {e}"));
    agree.render().unwrap_or_else(|e| panic!("row failed: {e}"));
    assert_eq!(agree.label_title(), "I AGREE");
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let title = &view.rows()["title"];
    let first = title.label_tag().unwrap_or_else(|e| panic!("label failed: {e}"));
    let second = title.label_tag().unwrap_or_else(|e| panic!("label failed: {e}"));
    assert!(std::ptr::eq(first, second));
    assert!(first.contains("TITLE"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn empty_widget_id_falls_back_to_auto_id_for_label() {
    let form = FormBuilder::new()
        .field(char_field("title", "Title", 20, false).attr("id", ""))
        .build();
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    let label_tag = view.rows()["title"]
        .label_tag()
        .unwrap_or_else(|e| panic!("label failed: {e}"));
    assert!(label_tag.contains(r#"for="id_title""#));
}

#[test]
fn prefixed_form_uses_prefixed_names_but_plain_keys() {
    let form = example_form().with_prefix("person");
    let renderer = FormRenderer::new();
    let view = renderer.view(&form);

    assert_eq!(keys(view.rows()), ["name", "description", "type"]);
    assert!(view.rows()["name"].field_html().contains(r#"name="person-name""#));
    assert!(view.rows()["name"].field_html().contains(r#"id="id_person-name""#));
}
