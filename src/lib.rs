//! # tokpat
//!
//! Composable pattern matching over token sequences.
//!
//! A pattern is a small expression tree (literal, sequence, alternation, repetition) that is
//! evaluated from every start position of a token sequence, collecting every span it can match.
//!
//! File Layout
//!
//! src/tokpat
//!   ├── tokens        The shared, immutable token sequence
//!   ├── expr          The expression tree and its builders
//!   ├── interpreter   Evaluation of expression nodes
//!   ├── context       Match spans and the per-run result list
//!   ├── pattern       The driver scanning every start index
//!   ├── formats       Reports (text, json, yaml)
//!   ├── loader        Trees and token sequences from json / yaml
//!   └── config        Layered configuration
//!
//! For shared sample corpora, see the [testing module](tokpat::testing).

pub mod tokpat;

pub use crate::tokpat::context::{Context, MatchSpan};
pub use crate::tokpat::expr::{and, lit, many, or, Expr};
pub use crate::tokpat::formats::render;
pub use crate::tokpat::interpreter::RepetitionGuard;
pub use crate::tokpat::pattern::Pattern;
pub use crate::tokpat::tokens::TokenSeq;
