//! Select field types.

use crate::form::FormFieldDef;
use crate::widgets::Select;

/// Creates a choice field (select/dropdown).
pub fn choice_field(
    name: &str,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> FormFieldDef {
    let field = FormFieldDef::new(name, label, Select::new(choices));

    if required {
        field.required()
    } else {
        field
    }
}
