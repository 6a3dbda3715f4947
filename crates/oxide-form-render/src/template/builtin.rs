//! Default templates written with `ironhtml`.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Li, Span};

use super::{context_bool, context_str, context_strings, RenderContext};
use crate::error::Result;

/// Top errors, hidden inputs, then the rows.
pub(super) fn render_form(ctx: &RenderContext) -> Result<String> {
    Ok(format!(
        "{}{}{}",
        context_str(ctx, "top_errors"),
        context_str(ctx, "hidden_fields"),
        context_str(ctx, "rows"),
    ))
}

/// `<div class="form-row ..." id="row-{name}">` holding errors, label,
/// control and help text.
pub(super) fn render_row(ctx: &RenderContext) -> Result<String> {
    let css_classes = context_str(ctx, "css_classes");
    let class = if css_classes.is_empty() {
        "form-row".to_string()
    } else {
        format!("form-row {css_classes}")
    };
    let row_id = format!("row-{}", context_str(ctx, "name"));
    let help_text = context_str(ctx, "help_text");

    Ok(html! { div.class(#class) }
        .attr("id", &row_id)
        .raw(context_str(ctx, "errors"))
        .when(context_bool(ctx, "must_render_label"), |d| {
            d.raw(context_str(ctx, "label"))
        })
        .raw(context_str(ctx, "field"))
        .when(!help_text.is_empty(), |d| {
            d.child::<Span, _>(|s| s.class("helptext").text(help_text))
        })
        .render())
}

/// `<ul class="errorlist">`, or nothing when there are no errors.
pub(super) fn render_errorlist(ctx: &RenderContext) -> Result<String> {
    let errors = context_strings(ctx, "errors");
    if errors.is_empty() {
        return Ok(String::new());
    }

    Ok(html! { ul.class("errorlist") }
        .children(errors.iter(), |error, li: Element<Li>| li.text(error))
        .render())
}

/// `<label for="{id}">{label}</label>`.
pub(super) fn render_label(ctx: &RenderContext) -> Result<String> {
    let id = context_str(ctx, "id");
    let text = context_str(ctx, "label");

    Ok(html! {
        label.for_(#id) { #text }
    }
    .render())
}
