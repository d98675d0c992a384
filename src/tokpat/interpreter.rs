//! Expression evaluation
//!
//! Evaluating a node from a start index yields every end index a match beginning there can
//! reach, in derivation order. Nothing is sorted and nothing is deduplicated: two derivations
//! reaching the same end both show up. Evaluation is total over any start index, including
//! ones past the end of the sequence, and has no side effects.
//!
//! Repetition
//!
//!     `ZeroOrMany` keeps a frontier of the positions reached by the latest repetition,
//!     starting at `{start}`, and feeds every frontier position back into the inner
//!     expression until a step produces nothing. That only terminates if the inner expression
//!     always consumes a token, so a [`RepetitionGuard`] decides what happens otherwise.

use super::context::Context;
use super::expr::Expr;
use super::tokens::TokenSeq;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Termination policy for `ZeroOrMany`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepetitionGuard {
    /// Plain frontier iteration when the inner expression always consumes a token, the
    /// visited-set rule when it can match empty.
    #[default]
    Auto,
    /// Stop as soon as a step reaches no position that was not already reached from this start.
    Visited,
}

impl Expr {
    /// End positions of every match of this node starting at `start`.
    pub fn interpret(&self, ctx: &Context, start: usize) -> Vec<usize> {
        self.interpret_with(ctx, start, RepetitionGuard::Auto)
    }

    /// [`interpret`](Self::interpret) with an explicit guard for every repetition below this node
    pub fn interpret_with(
        &self,
        ctx: &Context,
        start: usize,
        guard: RepetitionGuard,
    ) -> Vec<usize> {
        self.eval(ctx.tokens(), start, guard)
    }

    pub(crate) fn eval(
        &self,
        tokens: &TokenSeq,
        start: usize,
        guard: RepetitionGuard,
    ) -> Vec<usize> {
        match self {
            Expr::Literal(text) => match tokens.get(start) {
                Some(token) if token == text => vec![start + 1],
                _ => Vec::new(),
            },
            Expr::And(left, right) => {
                let mut ends = Vec::new();
                for mid in left.eval(tokens, start, guard) {
                    ends.extend(right.eval(tokens, mid, guard));
                }
                ends
            }
            Expr::Or(left, right) => {
                let mut ends = left.eval(tokens, start, guard);
                ends.extend(right.eval(tokens, start, guard));
                ends
            }
            Expr::ZeroOrMany(inner) => {
                let track_visited = match guard {
                    RepetitionGuard::Auto => inner.is_nullable(),
                    RepetitionGuard::Visited => true,
                };
                repeat(inner, tokens, start, guard, track_visited)
            }
        }
    }
}

fn repeat(
    inner: &Expr,
    tokens: &TokenSeq,
    start: usize,
    guard: RepetitionGuard,
    track_visited: bool,
) -> Vec<usize> {
    let mut ends = vec![start];
    let mut frontier = vec![start];
    let mut visited: HashSet<usize> = HashSet::from([start]);

    loop {
        let next: Vec<usize> = frontier
            .iter()
            .flat_map(|&pos| inner.eval(tokens, pos, guard))
            .collect();
        if next.is_empty() {
            break;
        }
        if track_visited {
            let mut progressed = false;
            for &pos in &next {
                progressed |= visited.insert(pos);
            }
            if !progressed {
                tracing::trace!(start, inner = %inner, "repetition reached no new position");
                break;
            }
        }
        ends.extend_from_slice(&next);
        frontier = next;
    }

    ends
}
