//! Checkbox field types.

use crate::form::FormFieldDef;
use crate::widgets::CheckboxInput;

/// Creates a boolean field. The checkbox renders its own label.
pub fn boolean_field(name: &str, label: &str) -> FormFieldDef {
    FormFieldDef::new(name, label, CheckboxInput)
}
