//! Loading trees and token sequences
//!
//! Expression trees and token sequences can be stored as json or yaml documents using their
//! serde shapes:
//!
//! ```text
//! and:
//!   - literal: raining
//!   - zero_or_many:
//!       or:
//!         - literal: dogs
//!         - literal: cats
//! ```
//!
//! Yaml has no native notion of an externally tagged enum, so nodes are read and written as
//! single-key maps at every depth. [`dump_expr`] writes the same shape [`load_expr`] reads.
//!
//! This reads already-structured trees. There is no parser for the operator notation.

use super::expr::Expr;
use super::tokens::TokenSeq;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Document format of a stored tree or token sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Json,
    Yaml,
}

impl TreeFormat {
    /// Infer the format from a file extension (`json`, `yaml`, `yml`)
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(TreeFormat::Json),
            "yaml" | "yml" => Some(TreeFormat::Yaml),
            _ => None,
        }
    }
}

/// Error loading or dumping a stored document
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
    UnknownFormat(PathBuf),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            LoadError::Json(e) => write!(f, "Invalid json document: {e}"),
            LoadError::Yaml(e) => write!(f, "Invalid yaml document: {e}"),
            LoadError::UnknownFormat(path) => {
                write!(f, "Cannot tell the format of {}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json(e) => Some(e),
            LoadError::Yaml(e) => Some(e),
            LoadError::UnknownFormat(_) => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        LoadError::Yaml(e)
    }
}

fn load<T: DeserializeOwned>(source: &str, format: TreeFormat) -> Result<T, LoadError> {
    Ok(match format {
        TreeFormat::Json => serde_json::from_str(source)?,
        TreeFormat::Yaml => serde_yaml::with::singleton_map_recursive::deserialize(
            serde_yaml::Deserializer::from_str(source),
        )?,
    })
}

fn dump<T: Serialize>(value: &T, format: TreeFormat) -> Result<String, LoadError> {
    match format {
        TreeFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        TreeFormat::Yaml => {
            let mut out = Vec::new();
            {
                let mut serializer = serde_yaml::Serializer::new(&mut out);
                serde_yaml::with::singleton_map_recursive::serialize(value, &mut serializer)?;
            }
            Ok(String::from_utf8_lossy(&out).into_owned())
        }
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format =
        TreeFormat::from_path(path).ok_or_else(|| LoadError::UnknownFormat(path.to_path_buf()))?;
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(&source, format)
}

pub fn load_expr(source: &str, format: TreeFormat) -> Result<Expr, LoadError> {
    let expr: Expr = load(source, format)?;
    tracing::debug!(pattern = %expr, depth = expr.depth(), "loaded expression tree");
    Ok(expr)
}

pub fn load_tokens(source: &str, format: TreeFormat) -> Result<TokenSeq, LoadError> {
    load(source, format)
}

/// Write a tree in the shape [`load_expr`] reads back
pub fn dump_expr(expr: &Expr, format: TreeFormat) -> Result<String, LoadError> {
    dump(expr, format)
}

/// Write a token sequence as a plain list
pub fn dump_tokens(tokens: &TokenSeq, format: TreeFormat) -> Result<String, LoadError> {
    dump(tokens, format)
}

/// Load a tree from a `.json`, `.yaml` or `.yml` file
pub fn load_expr_file(path: impl AsRef<Path>) -> Result<Expr, LoadError> {
    let expr: Expr = load_file(path.as_ref())?;
    tracing::debug!(path = %path.as_ref().display(), pattern = %expr, "loaded expression tree");
    Ok(expr)
}

/// Load a token sequence from a `.json`, `.yaml` or `.yml` file
pub fn load_tokens_file(path: impl AsRef<Path>) -> Result<TokenSeq, LoadError> {
    load_file(path.as_ref())
}
