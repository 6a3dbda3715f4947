//! Hidden field type.

use crate::form::FormFieldDef;
use crate::widgets::HiddenInput;

/// Creates a hidden field. Hidden fields carry no label.
pub fn hidden_field(name: &str, required: bool) -> FormFieldDef {
    let field = FormFieldDef::new(name, "", HiddenInput);

    if required {
        field.required()
    } else {
        field
    }
}
