//! Property-based tests for expression evaluation
//!
//! Random token sequences over a tiny alphabet and random trees built from it, checked against
//! the combinator laws: sequence is the ordered concatenation over the left ends, alternation
//! is plain concatenation, repetition starts with the start index and only reaches positions
//! chained through the inner expression.

use proptest::prelude::*;
use std::collections::BTreeSet;
use tokpat::tokpat::formats::render;
use tokpat::{and, lit, many, or, Context, Expr, Pattern, TokenSeq};

const ALPHABET: &[&str] = &["cats", "dogs", "raining"];

fn token() -> impl Strategy<Value = String> {
    prop::sample::select(ALPHABET).prop_map(str::to_string)
}

fn tokens() -> impl Strategy<Value = TokenSeq> {
    prop::collection::vec(token(), 0..7).prop_map(TokenSeq::from)
}

fn expr() -> impl Strategy<Value = Expr> {
    token().prop_map(|t| lit(t)).prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| and(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| or(l, r)),
            inner.prop_map(many),
        ]
    })
}

proptest! {
    #[test]
    fn literal_matches_exactly_one_token(seq in tokens(), text in token(), start in 0usize..10) {
        let ctx = Context::new(seq.clone());
        let ends = lit(text.as_str()).interpret(&ctx, start);
        if seq.get(start) == Some(text.as_str()) {
            prop_assert_eq!(ends, vec![start + 1]);
        } else {
            prop_assert!(ends.is_empty());
        }
    }

    #[test]
    fn and_is_concatenation_over_left_ends(seq in tokens(), a in expr(), b in expr(), start in 0usize..8) {
        let ctx = Context::new(seq);
        let expected: Vec<usize> = a
            .interpret(&ctx, start)
            .into_iter()
            .flat_map(|mid| b.interpret(&ctx, mid))
            .collect();
        prop_assert_eq!(and(a, b).interpret(&ctx, start), expected);
    }

    #[test]
    fn or_is_concatenation(seq in tokens(), a in expr(), b in expr(), start in 0usize..8) {
        let ctx = Context::new(seq);
        let mut expected = a.interpret(&ctx, start);
        expected.extend(b.interpret(&ctx, start));
        prop_assert_eq!(or(a, b).interpret(&ctx, start), expected);
    }

    #[test]
    fn repetition_reaches_only_chained_positions(seq in tokens(), inner in expr(), start in 0usize..8) {
        let ctx = Context::new(seq);
        let ends = many(inner.clone()).interpret(&ctx, start);
        prop_assert_eq!(ends.first().copied(), Some(start));

        let mut reachable = BTreeSet::from([start]);
        let mut pending = vec![start];
        while let Some(pos) = pending.pop() {
            for next in inner.interpret(&ctx, pos) {
                if reachable.insert(next) {
                    pending.push(next);
                }
            }
        }
        for end in &ends {
            prop_assert!(reachable.contains(end));
        }
    }

    #[test]
    fn ends_never_precede_start_or_pass_the_end(seq in tokens(), e in expr(), start in 0usize..8) {
        let len = seq.len();
        let ctx = Context::new(seq);
        for end in e.interpret(&ctx, start) {
            prop_assert!(end >= start);
            prop_assert!(end <= len.max(start));
        }
    }

    #[test]
    fn runs_are_deterministic(seq in tokens(), e in expr()) {
        let pattern = Pattern::new(e);
        let first = pattern.find_all(seq.clone());
        let second = pattern.find_all(seq);
        prop_assert_eq!(first.matches(), second.matches());
    }

    #[test]
    fn report_has_one_line_per_non_empty_span(seq in tokens(), e in expr()) {
        let ctx = Pattern::new(e).find_all(seq);
        let report = render(&ctx);
        prop_assert_eq!(report.lines().count(), ctx.non_empty_matches().count());
    }
}
