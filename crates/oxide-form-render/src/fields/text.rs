//! Text field types.

use crate::form::FormFieldDef;
use crate::widgets::{TextInput, Textarea};

fn with_required(field: FormFieldDef, required: bool) -> FormFieldDef {
    if required {
        field.required()
    } else {
        field
    }
}

/// Creates a character field (text input with max length).
pub fn char_field(name: &str, label: &str, max_length: usize, required: bool) -> FormFieldDef {
    let field = FormFieldDef::new(name, label, TextInput::new())
        .attr("maxlength", max_length.to_string());
    with_required(field, required)
}

/// Creates a text field (textarea).
pub fn text_field(name: &str, label: &str, rows: usize, required: bool) -> FormFieldDef {
    with_required(FormFieldDef::new(name, label, Textarea::new(rows)), required)
}

/// Creates an email field.
pub fn email_field(name: &str, label: &str, required: bool) -> FormFieldDef {
    with_required(FormFieldDef::new(name, label, TextInput::email()), required)
}

/// Creates a password field. Passwords are always required.
pub fn password_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, TextInput::password()).required()
}
