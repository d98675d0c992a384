//! Testing utilities
//!
//!     Shared sample corpora and a span assertion helper.
//!
//!     Each [`Sample`] pairs a token sequence with the tree it is meant to be matched with.
//!     Tests should pull their inputs from here rather than spell out the same token lists
//!     again, so the golden reports stay tied to one source.
//!
//!     ```rust,ignore
//!     use tokpat::tokpat::testing::{samples, assert_spans};
//!
//!     let sample = samples::storm();
//!     let ctx = sample.run();
//!     assert_spans(&ctx, &[(0, 0), (1, 1), (2, 2), (2, 3)]);
//!     ```

use super::context::Context;
use super::expr::Expr;
use super::pattern::Pattern;
use super::tokens::TokenSeq;

/// A token sequence and the tree it is matched with.
#[derive(Debug, Clone)]
pub struct Sample {
    pub name: &'static str,
    pub tokens: TokenSeq,
    pub pattern: Expr,
}

impl Sample {
    pub fn to_pattern(&self) -> Pattern {
        Pattern::new(self.pattern.clone())
    }

    /// Run the sample's pattern over a fresh context
    pub fn run(&self) -> Context {
        self.to_pattern().find_all(self.tokens.clone())
    }

    pub fn context(&self) -> Context {
        Context::new(self.tokens.clone())
    }
}

pub mod samples {
    use super::Sample;
    use crate::tokpat::expr::{and, lit, many, or};
    use crate::tokpat::tokens::TokenSeq;

    /// `raining&(dogs|cats)*` over `raining dogs`
    pub fn raining_dogs() -> Sample {
        Sample {
            name: "raining_dogs",
            tokens: TokenSeq::new(["raining", "dogs"]),
            pattern: and(lit("raining"), many(or(lit("dogs"), lit("cats")))),
        }
    }

    /// `(cats&dogs)*` over `cats dogs cats`
    pub fn cat_dog_pairs() -> Sample {
        Sample {
            name: "cat_dog_pairs",
            tokens: TokenSeq::new(["cats", "dogs", "cats"]),
            pattern: many(and(lit("cats"), lit("dogs"))),
        }
    }

    /// `raining*&(cats&dogs|cats)*` over the full storm text
    pub fn storm() -> Sample {
        Sample {
            name: "storm",
            tokens: TokenSeq::new([
                "dogs",
                "texttext",
                "raining",
                "texttexttexttext",
                "raining",
                "cats",
                "dogs",
                "cats",
                "dogs",
                "cats",
                "texttext",
            ]),
            pattern: and(
                many(lit("raining")),
                many(or(and(lit("cats"), lit("dogs")), lit("cats"))),
            ),
        }
    }

    /// `raining&(dogs|cats)*` over the short storm text
    pub fn showers() -> Sample {
        Sample {
            name: "showers",
            tokens: TokenSeq::new([
                "dogs",
                "texttext",
                "raining",
                "texttexttexttext",
                "raining",
                "dogs",
                "cats",
                "texttext",
            ]),
            pattern: and(lit("raining"), many(or(lit("dogs"), lit("cats")))),
        }
    }

    pub fn all() -> Vec<Sample> {
        vec![raining_dogs(), cat_dog_pairs(), storm(), showers()]
    }
}

/// Assert the context recorded exactly these spans, in this order
#[track_caller]
pub fn assert_spans(ctx: &Context, expected: &[(usize, usize)]) {
    let actual: Vec<(usize, usize)> = ctx.matches().iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(
        actual,
        expected,
        "recorded spans differ for tokens {:?}",
        ctx.tokens()
    );
}
