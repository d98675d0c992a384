//! Report formats for match results
//!
//! This module contains the ways a finished [`Context`] can be turned into text:
//! - `text`: the line-per-span report other tooling compares against golden output
//! - `json` / `yaml`: the token sequence and every recorded span, zero-length included

pub mod registry;
pub mod report;
pub mod serialized;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use report::{render, render_with, TextFormatter};
pub use serialized::{JsonFormatter, YamlFormatter};

use super::config::ReportConfig;
use super::context::Context;

/// Render a context with the format and options a [`ReportConfig`] names
pub fn render_report(ctx: &Context, config: &ReportConfig) -> Result<String, FormatError> {
    let registry = FormatRegistry::from_config(config);
    registry.format_for(config)?.serialize(ctx)
}
