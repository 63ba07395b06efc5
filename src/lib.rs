//! A DFA lexer for `while` statements.
//!
//! The input is one `while <ident> <cmp> <ident>:` header followed by indented
//! `<ident> = <ident> <op> <ident|int>` body lines. The crate scans it with a
//! hand-written transition table, reports where scanning stopped, and labels
//! each token with a positional category.

pub mod config;
pub mod lexer;
pub mod report;

pub use lexer::{analyze, Analysis, Category, ScanResult, State, Token, WhileAnalyzer};
