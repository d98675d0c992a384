//! Named report formats
//!
//! A finished [`Context`] can be rendered as the golden text report or as a json / yaml
//! document of every span. Callers pick one by the name stored in `report.format`; extra
//! [`Formatter`]s can be registered next to the built-in three.

use super::report::TextFormatter;
use super::serialized::{JsonFormatter, YamlFormatter};
use crate::tokpat::config::ReportConfig;
use crate::tokpat::context::Context;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;

static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter is registered under this name
    FormatNotFound(String),
    /// The json / yaml writer failed
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders the spans recorded in a [`Context`]
pub trait Formatter: Send + Sync {
    /// Registry key, matched against `report.format`
    fn name(&self) -> &str;

    fn serialize(&self, ctx: &Context) -> Result<String, FormatError>;

    /// One line for format listings
    fn description(&self) -> &str {
        ""
    }
}

/// Report formatters keyed by the name `report.format` refers to
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// `text`, `json` and `yaml` with the default report options
    pub fn global() -> &'static FormatRegistry {
        &DEFAULT_REGISTRY
    }

    /// `text`, `json` and `yaml`, with the text report honoring `report.include_empty`
    pub fn from_config(config: &ReportConfig) -> Self {
        let mut registry = Self::new();
        registry.register(TextFormatter {
            include_empty: config.include_empty,
        });
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry
    }

    pub fn with_defaults() -> Self {
        Self::from_config(&ReportConfig::default())
    }

    /// Add a formatter, returning the one it displaced under the same name
    pub fn register<F>(&mut self, formatter: F) -> Option<Box<dyn Formatter>>
    where
        F: Formatter + 'static,
    {
        self.formatters
            .insert(formatter.name().to_owned(), Box::new(formatter))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(Box::as_ref)
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Names of the registered formats, in alphabetical order
    pub fn list_formats(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    /// The formatter `report.format` names
    pub fn format_for(&self, config: &ReportConfig) -> Result<&dyn Formatter, FormatError> {
        self.get(&config.format)
            .ok_or_else(|| FormatError::FormatNotFound(config.format.clone()))
    }

    /// Render a finished context in the named format
    pub fn serialize(&self, ctx: &Context, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_owned()))?;
        tracing::debug!(format, spans = ctx.matches().len(), "rendering report");
        formatter.serialize(ctx)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
