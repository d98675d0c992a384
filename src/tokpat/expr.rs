//! Expression trees
//!
//! An [`Expr`] is the unit a [`Pattern`](super::pattern::Pattern) is built from. The tree is a
//! closed sum type: every node owns its children outright, nothing is shared and there are no
//! cycles. Trees are built once, by hand through the builders below or by deserializing a
//! json / yaml document (see [loader](super::loader)), and are never mutated afterwards.
//!
//! Notation
//!
//!     `Display` renders a tree in operator notation:
//!
//!         raining&(dogs|cats)*
//!
//!     `&` is sequence, `|` is alternation and a postfix `*` is zero-or-more repetition. `*`
//!     binds tightest, then `&`, then `|`. Parentheses are only emitted where the tree shape
//!     needs them. This is output only: there is no parser for the notation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of a token pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Matches exactly one token equal to the text.
    Literal(String),
    /// Matches the left side, then the right side from wherever the left side ended.
    And(Box<Expr>, Box<Expr>),
    /// Matches either side from the same start.
    Or(Box<Expr>, Box<Expr>),
    /// Matches zero or more chained applications of the inner expression.
    ZeroOrMany(Box<Expr>),
}

/// Create a literal node
pub fn lit(text: impl Into<String>) -> Expr {
    Expr::Literal(text.into())
}

/// Create a sequence node
pub fn and(left: Expr, right: Expr) -> Expr {
    Expr::And(Box::new(left), Box::new(right))
}

/// Create an alternation node
pub fn or(left: Expr, right: Expr) -> Expr {
    Expr::Or(Box::new(left), Box::new(right))
}

/// Create a repetition node
pub fn many(inner: Expr) -> Expr {
    Expr::ZeroOrMany(Box::new(inner))
}

impl Expr {
    /// `self` followed by `next`
    pub fn then(self, next: Expr) -> Expr {
        and(self, next)
    }

    /// `self` or `other`
    pub fn or_else(self, other: Expr) -> Expr {
        or(self, other)
    }

    /// Zero or more repetitions of `self`
    pub fn repeated(self) -> Expr {
        many(self)
    }

    /// Fold a list into a left-associated sequence. `None` for an empty list.
    pub fn and_all(items: impl IntoIterator<Item = Expr>) -> Option<Expr> {
        items.into_iter().reduce(and)
    }

    /// Fold a list into a left-associated alternation. `None` for an empty list.
    pub fn or_all(items: impl IntoIterator<Item = Expr>) -> Option<Expr> {
        items.into_iter().reduce(or)
    }

    /// Whether this node can match a zero-length span.
    ///
    /// A nullable expression directly under a repetition would never advance the frontier, which
    /// is what [`RepetitionGuard::Auto`](super::interpreter::RepetitionGuard) keys off.
    pub fn is_nullable(&self) -> bool {
        match self {
            Expr::Literal(_) => false,
            Expr::And(left, right) => left.is_nullable() && right.is_nullable(),
            Expr::Or(left, right) => left.is_nullable() || right.is_nullable(),
            Expr::ZeroOrMany(_) => true,
        }
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::And(left, right) | Expr::Or(left, right) => 1 + left.depth().max(right.depth()),
            Expr::ZeroOrMany(inner) => 1 + inner.depth(),
        }
    }

    /// Literal texts in left-to-right order, repeats included
    pub fn literals(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_literals(&mut out);
        out
    }

    fn collect_literals<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Expr::Literal(text) => out.push(text),
            Expr::And(left, right) | Expr::Or(left, right) => {
                left.collect_literals(out);
                right.collect_literals(out);
            }
            Expr::ZeroOrMany(inner) => inner.collect_literals(out),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Or(..) => 0,
            Expr::And(..) => 1,
            Expr::ZeroOrMany(_) => 2,
            Expr::Literal(_) => 3,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min_precedence: u8) -> fmt::Result {
        if self.precedence() < min_precedence {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precedence = self.precedence();
        match self {
            Expr::Literal(text) => f.write_str(text),
            Expr::And(left, right) => {
                left.fmt_operand(f, precedence)?;
                f.write_str("&")?;
                right.fmt_operand(f, precedence + 1)
            }
            Expr::Or(left, right) => {
                left.fmt_operand(f, precedence)?;
                f.write_str("|")?;
                right.fmt_operand(f, precedence + 1)
            }
            Expr::ZeroOrMany(inner) => {
                inner.fmt_operand(f, precedence)?;
                f.write_str("*")
            }
        }
    }
}
