//! Token sequences
//!
//! The input a pattern is matched against: an ordered list of opaque strings. The storage is
//! shared behind an `Arc`, so every context and report built from one sequence sees the same
//! tokens and nothing can mutate them after construction.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// An immutable, cheaply clonable sequence of tokens.
///
/// Tokens are compared by plain string equality; no normalization happens here.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TokenSeq {
    tokens: Arc<[String]>,
}

impl TokenSeq {
    /// Create a new token sequence from anything yielding strings
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(|t| t.into()).collect();
        Self::from(tokens)
    }

    /// Get the token at a given index, `None` when out of range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|s| s.as_str())
    }

    /// Get the number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in sequence order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }

    /// Tokens in `[start, end)`, with both bounds clamped to the sequence
    pub fn slice(&self, start: usize, end: usize) -> &[String] {
        let end = end.min(self.len());
        let start = start.min(end);
        &self.tokens[start..end]
    }

    /// Whether two handles share the same storage
    pub fn ptr_eq(&self, other: &TokenSeq) -> bool {
        Arc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl fmt::Debug for TokenSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSeq {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TokenSeq::new(iter)
    }
}

impl From<Vec<String>> for TokenSeq {
    fn from(tokens: Vec<String>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }
}

impl From<&[&str]> for TokenSeq {
    fn from(tokens: &[&str]) -> Self {
        TokenSeq::new(tokens.iter().copied())
    }
}

impl Serialize for TokenSeq {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tokens.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TokenSeq {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(TokenSeq::from)
    }
}
