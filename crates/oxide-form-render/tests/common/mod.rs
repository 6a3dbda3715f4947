#![allow(dead_code)]

use std::collections::HashMap;

use oxide_form_render::fields::{char_field, choice_field, hidden_field, text_field};
use oxide_form_render::{Form, FormBuilder, FormRenderConfig, ValidationErrors, NON_FIELD_ERRORS};

pub const REQUIRED: &str = "This field is required.";
pub const TOP_MESSAGE: &str = "Top message";

/// Visible `name`, `description` and `type`, hidden `code`.
pub fn example_form() -> Form {
    FormBuilder::new()
        .field(char_field("name", "Name", 50, true).help_text("help text"))
        .field(
            text_field("description", "Description", 4, false)
                .help_text("please fill in a description"),
        )
        .field(hidden_field("code", true))
        .field(choice_field("type", "Type", vec![("1", "abc"), ("2", "def")], true))
        .build()
}

/// The example form submitted empty: every required field fails and the
/// form-level check fails too.
pub fn posted_example_form() -> Form {
    example_form().bind(HashMap::new()).with_errors(
        ValidationErrors::new()
            .with(NON_FIELD_ERRORS, TOP_MESSAGE)
            .with("name", REQUIRED)
            .with("code", REQUIRED)
            .with("type", REQUIRED),
    )
}

pub fn example_config() -> FormRenderConfig {
    FormRenderConfig::new()
        .fieldset("f1", ["name"])
        .fieldset("f2", ["type", "description"])
}

/// Positions of `needle` occurrences, for asserting document order.
pub fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("{needle} not found in {html}"))
        })
        .collect()
}

pub fn is_sorted(values: &[usize]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

/// The markup of one row, from its opening `<div` to the next row.
pub fn row_markup<'h>(html: &'h str, name: &str) -> &'h str {
    let marker = format!(r#"id="row-{name}""#);
    let found = html
        .find(&marker)
        .unwrap_or_else(|| panic!("row {name} not found in {html}"));
    let start = html[..found].rfind("<div").unwrap_or(found);
    let after = found + marker.len();
    let end = html[after..].find(r#"id="row-"#).map_or(html.len(), |offset| {
        html[..after + offset].rfind("<div").unwrap_or(after + offset)
    });
    &html[start..end]
}
