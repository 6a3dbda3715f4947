//! Label translation.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::Result;

/// Translates label text before it is rendered.
pub trait Translator: Send + Sync {
    /// Returns the translation of `text`.
    fn translate(&self, text: &str) -> String;
}

/// Returns text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Translator for PassThrough {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// A message catalog mapping message ids to translations.
///
/// Missing ids translate to themselves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation.
    #[must_use]
    pub fn message(mut self, id: impl Into<String>, translation: impl Into<String>) -> Self {
        self.messages.insert(id.into(), translation.into());
        self
    }

    /// Loads a catalog from a JSON object of `id: translation` pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the number of translations.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Catalog {
    fn translate(&self, text: &str) -> String {
        self.messages
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

impl<F> Translator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, text: &str) -> String {
        self(text)
    }
}
