//! Match context
//!
//! A [`Context`] belongs to one matching run: it holds the token sequence being scanned and
//! the list of spans the [`Pattern`](super::pattern::Pattern) driver records, in the order the
//! scan produced them. Expression nodes only ever read it. Spans are not sorted or
//! deduplicated, and zero-length spans are kept; reports decide what to show.

use super::tokens::TokenSeq;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tokens `[start, end)` consumed by one successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens consumed, zero for empty or inverted spans
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the span consumes no token (`end <= start`)
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for MatchSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<(usize, usize)> for MatchSpan {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// Token sequence plus the spans found in it by one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    tokens: TokenSeq,
    matches: Vec<MatchSpan>,
}

impl Context {
    pub fn new(tokens: TokenSeq) -> Self {
        Self {
            tokens,
            matches: Vec::new(),
        }
    }

    pub fn tokens(&self) -> &TokenSeq {
        &self.tokens
    }

    /// Every recorded span, in scan order
    pub fn matches(&self) -> &[MatchSpan] {
        &self.matches
    }

    /// Recorded spans consuming at least one token
    pub fn non_empty_matches(&self) -> impl Iterator<Item = &MatchSpan> {
        self.matches.iter().filter(|span| !span.is_empty())
    }

    /// The tokens a span covers, clamped to the sequence
    pub fn span_tokens(&self, span: MatchSpan) -> &[String] {
        self.tokens.slice(span.start, span.end)
    }

    pub(crate) fn record(&mut self, span: MatchSpan) {
        self.matches.push(span);
    }
}

impl From<TokenSeq> for Context {
    fn from(tokens: TokenSeq) -> Self {
        Context::new(tokens)
    }
}
