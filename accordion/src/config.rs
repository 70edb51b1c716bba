//! Accordion configuration.

use serde::Deserialize;

use crate::error::Result;

/// Suffix appended to the first item's class when no modifier is given.
pub const DEFAULT_MODIFIER: &str = "--open";

/// Options recognised when initializing an accordion.
///
/// Unknown JSON keys are ignored and missing ones take their defaults, so
/// `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    /// Appended to the first item's primary class to form the active class.
    /// An empty modifier falls back to [`DEFAULT_MODIFIER`].
    pub modifier: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            modifier: DEFAULT_MODIFIER.to_string(),
        }
    }
}

impl AccordionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active-class modifier.
    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = modifier.into();
        self
    }

    /// Parse options from a JSON object such as `{"modifier": "--active"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The modifier actually applied.
    pub fn effective_modifier(&self) -> &str {
        if self.modifier.is_empty() {
            DEFAULT_MODIFIER
        } else {
            &self.modifier
        }
    }
}
