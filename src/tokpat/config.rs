//! Configuration loading
//!
//! Two sections: `matching` picks the repetition guard handed to every
//! [`Pattern`](super::pattern::Pattern), `report` picks the output format and whether
//! zero-length spans are shown. The defaults ship inside the crate as
//! `defaults/tokpat.default.toml`; [`Loader`] stacks files, environment and overrides on top.

use super::interpreter::RepetitionGuard;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/tokpat.default.toml");
const ENV_PREFIX: &str = "TOKPAT";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokpatConfig {
    pub matching: MatchingConfig,
    pub report: ReportConfig,
}

/// Evaluation knobs handed to [`Pattern`](super::pattern::Pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct MatchingConfig {
    pub repetition_guard: RepetitionGuard,
}

/// Report rendering knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    pub include_empty: bool,
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_empty: false,
            format: "text".to_string(),
        }
    }
}

/// Builds a [`TokpatConfig`] from the embedded defaults plus whatever layers are added.
///
/// Later layers win: a project file over the defaults, `TOKPAT_*` environment variables over
/// files, explicit overrides over everything.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a TOML file that must exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Layer a TOML file, skipped when absent (e.g. `./tokpat.toml`)
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Layer `TOKPAT_<SECTION>__<KEY>` environment variables,
    /// e.g. `TOKPAT_MATCHING__REPETITION_GUARD=visited`
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__");
        self.builder = self.builder.add_source(source);
        self
    }

    /// Force a single dotted key, e.g. `("report.include_empty", true)`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TokpatConfig, ConfigError> {
        let config: TokpatConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(
            repetition_guard = ?config.matching.repetition_guard,
            format = %config.report.format,
            "configuration loaded"
        );
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with no other layer
pub fn load_defaults() -> Result<TokpatConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.matching, MatchingConfig::default());
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("matching.repetition_guard", "visited")
            .expect("override to apply")
            .set_override("report.include_empty", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.matching.repetition_guard, RepetitionGuard::Visited);
        assert!(config.report.include_empty);
        assert_eq!(config.report.format, "text");
    }

    #[test]
    fn environment_layer_sets_report_format() {
        std::env::set_var("TOKPAT_REPORT__FORMAT", "yaml");
        let config = Loader::new().with_env().build().expect("config to build");
        std::env::remove_var("TOKPAT_REPORT__FORMAT");

        assert_eq!(config.report.format, "yaml");
        assert_eq!(config.matching.repetition_guard, RepetitionGuard::Auto);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist/tokpat.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.report.format, "text");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("does/not/exist/tokpat.toml")
            .build();
        assert!(result.is_err());
    }
}
