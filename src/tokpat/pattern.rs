//! Pattern driver
//!
//! A [`Pattern`] owns the root of an expression tree and scans a context: every start index
//! from `0` to `len - 1` is tried, whether or not an earlier one matched, and every end index
//! the root yields is recorded as a span. Matches may overlap.

use super::config::MatchingConfig;
use super::context::{Context, MatchSpan};
use super::expr::Expr;
use super::interpreter::RepetitionGuard;
use super::tokens::TokenSeq;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    root: Expr,
    guard: RepetitionGuard,
}

impl Pattern {
    /// Wrap a tree using the default [`RepetitionGuard::Auto`]
    pub fn new(root: Expr) -> Self {
        Self::with_guard(root, RepetitionGuard::default())
    }

    /// Wrap a tree with an explicit repetition guard
    pub fn with_guard(root: Expr, guard: RepetitionGuard) -> Self {
        Self { root, guard }
    }

    /// Wrap a tree with the guard named in `matching.repetition_guard`
    pub fn from_config(root: Expr, config: &MatchingConfig) -> Self {
        Self::with_guard(root, config.repetition_guard)
    }

    /// The expression tree evaluated at every start index
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// The guard applied to every repetition in the tree
    pub fn guard(&self) -> RepetitionGuard {
        self.guard
    }

    /// Scan every start index of the context and record each match found.
    ///
    /// Spans are appended in scan order: increasing start index, then the order the tree
    /// produced the end indices. Whatever the context already held is left in place.
    pub fn match_tokens(&self, ctx: &mut Context) {
        let span = tracing::debug_span!(
            "match_tokens",
            pattern = %self.root,
            tokens = ctx.tokens().len()
        );
        let _enter = span.enter();

        let before = ctx.matches().len();
        for start in 0..ctx.tokens().len() {
            let ends = self.root.eval(ctx.tokens(), start, self.guard);
            tracing::trace!(start, ?ends, "interpreted");
            for end in ends {
                ctx.record(MatchSpan::new(start, end));
            }
        }

        tracing::debug!(recorded = ctx.matches().len() - before, "scan complete");
    }

    /// End indices of matches beginning at `start`, without recording anything
    pub fn matches_at(&self, ctx: &Context, start: usize) -> Vec<usize> {
        self.root.interpret_with(ctx, start, self.guard)
    }

    /// Run the pattern over a fresh context
    pub fn find_all(&self, tokens: TokenSeq) -> Context {
        let mut ctx = Context::new(tokens);
        self.match_tokens(&mut ctx);
        ctx
    }

    /// Whether any match consumes at least one token
    pub fn is_match(&self, tokens: &TokenSeq) -> bool {
        (0..tokens.len()).any(|start| {
            self.root
                .eval(tokens, start, self.guard)
                .into_iter()
                .any(|end| end > start)
        })
    }
}

impl From<Expr> for Pattern {
    fn from(root: Expr) -> Self {
        Pattern::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokpat::expr::{and, lit, many, or};

    fn spans(pairs: &[(usize, usize)]) -> Vec<MatchSpan> {
        pairs.iter().copied().map(MatchSpan::from).collect()
    }

    #[test]
    fn test_scan_tries_every_start() {
        let pattern = Pattern::new(and(lit("raining"), many(or(lit("dogs"), lit("cats")))));
        let ctx = pattern.find_all(TokenSeq::new(["raining", "dogs", "raining", "cats"]));

        assert_eq!(ctx.matches(), spans(&[(0, 1), (0, 2), (2, 3), (2, 4)]).as_slice());
    }

    #[test]
    fn test_zero_length_spans_are_recorded() {
        let pattern = Pattern::new(many(lit("a")));
        let ctx = pattern.find_all(TokenSeq::new(["b", "a"]));

        assert_eq!(ctx.matches(), spans(&[(0, 0), (1, 1), (1, 2)]).as_slice());
    }

    #[test]
    fn test_empty_sequence_records_nothing() {
        let pattern = Pattern::new(many(lit("a")));
        let ctx = pattern.find_all(TokenSeq::new(Vec::<String>::new()));
        assert!(ctx.matches().is_empty());
    }

    #[test]
    fn test_match_tokens_appends() {
        let pattern = Pattern::new(lit("a"));
        let mut ctx = Context::new(TokenSeq::new(["a"]));
        pattern.match_tokens(&mut ctx);
        pattern.match_tokens(&mut ctx);
        assert_eq!(ctx.matches(), spans(&[(0, 1), (0, 1)]).as_slice());
    }

    #[test]
    fn test_matches_at_does_not_record() {
        let pattern = Pattern::new(many(and(lit("cats"), lit("dogs"))));
        let ctx = Context::new(TokenSeq::new(["cats", "dogs", "cats"]));
        assert_eq!(pattern.matches_at(&ctx, 0), vec![0, 2]);
        assert!(ctx.matches().is_empty());
    }

    #[test]
    fn test_is_match_ignores_zero_length() {
        let pattern = Pattern::new(many(lit("a")));
        assert!(!pattern.is_match(&TokenSeq::new(["b", "c"])));
        assert!(pattern.is_match(&TokenSeq::new(["b", "a"])));
    }

    #[test]
    fn test_from_config_uses_guard() {
        let config = MatchingConfig {
            repetition_guard: RepetitionGuard::Visited,
        };
        let pattern = Pattern::from_config(lit("a"), &config);
        assert_eq!(pattern.guard(), RepetitionGuard::Visited);
        assert_eq!(Pattern::from(lit("a")).guard(), RepetitionGuard::Auto);
    }
}
