//! Error lists handed to the error-list template.

use std::ops::Deref;

/// An ordered list of error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<String>);

impl ErrorList {
    /// Creates a list from messages.
    pub fn new(errors: Vec<String>) -> Self {
        Self(errors)
    }

    /// The messages, in order.
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for ErrorList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<&[String]> for ErrorList {
    fn from(errors: &[String]) -> Self {
        Self(errors.to_vec())
    }
}

impl<'l> IntoIterator for &'l ErrorList {
    type Item = &'l String;
    type IntoIter = std::slice::Iter<'l, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
