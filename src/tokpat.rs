//! Main module for tokpat library functionality

pub mod config;
pub mod context;
pub mod expr;
pub mod formats;
pub mod interpreter;
pub mod loader;
pub mod pattern;
pub mod testing;
pub mod tokens;
