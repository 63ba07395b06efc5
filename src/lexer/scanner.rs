// src/lexer/scanner.rs

//! Drives a `TransitionTable` over input text, one character at a time.
//!
//! Token text accumulates in a buffer and is flushed when the automaton sits
//! in an accepting state and the next character is a delimiter (space, colon
//! or the sentinel). Layout characters move the automaton but never reach a
//! token. Scanning stops at the first character with no registered
//! transition; there is no error path.

use log::{debug, trace};
use serde::Serialize;
use std::fmt;

use super::grammar::{is_layout, SENTINEL, SPACE};
use super::table::{State, TransitionTable};

/// A run of non-layout characters collected between two flushes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    text: String,
    /// Character offset of the first character of the token.
    offset: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Token {
            text: text.into(),
            offset,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Everything a scan produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub final_state: State,
    /// Unconsumed input, without the sentinel.
    pub remainder: String,
}

impl ScanResult {
    pub fn token_texts(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::text).collect()
    }
}

/// One iteration of the scan loop, as reported by the verbose trace.
#[derive(Debug, Clone, Copy)]
struct ScanStep<'b> {
    state: State,
    buffer: &'b str,
    input: char,
    at_boundary: bool,
}

impl fmt::Display for ScanStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state={} buffer={:?} input={:?} at_boundary={}",
            self.state, self.buffer, self.input, self.at_boundary
        )
    }
}

/// Scans text against a borrowed table. Holds no per-scan state.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'t> {
    table: &'t TransitionTable,
    verbose: bool,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t TransitionTable) -> Self {
        Scanner {
            table,
            verbose: false,
        }
    }

    /// Enables the per-step debug trace. Never changes the result.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn table(&self) -> &'t TransitionTable {
        self.table
    }

    pub fn scan(&self, input: &str) -> ScanResult {
        let mut chars: Vec<char> = input.chars().collect();
        if chars.last() != Some(&SENTINEL) {
            chars.push(SENTINEL);
        }

        let mut cursor = 0;
        let mut state = self.table.initial_state();
        let mut buffer = String::new();
        let mut buffer_start = 0;
        let mut tokens = Vec::new();

        while cursor < chars.len() {
            let c = chars[cursor];
            let at_boundary = self.table.is_accepting(state);

            if self.verbose {
                debug!(
                    "{}",
                    ScanStep {
                        state,
                        buffer: &buffer,
                        input: c,
                        at_boundary,
                    }
                );
            }

            if at_boundary && is_delimiter(c) && !buffer.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut buffer), buffer_start));
            }

            if !is_layout(c) {
                if buffer.is_empty() {
                    buffer_start = cursor;
                }
                buffer.push(c);
            }

            match self.table.lookup(state, c) {
                Some(next) => {
                    state = next;
                    cursor += 1;
                }
                None => {
                    trace!("no transition from {} on {:?} at offset {}", state, c, cursor);
                    break;
                }
            }
        }

        // The last character is always the sentinel, which the remainder drops.
        let end = chars.len() - 1;
        let remainder: String = if cursor < end {
            chars[cursor..end].iter().collect()
        } else {
            String::new()
        };

        trace!(
            "scan finished in {} with {} tokens, {} chars unconsumed",
            state,
            tokens.len(),
            remainder.chars().count()
        );

        ScanResult {
            tokens,
            final_state: state,
            remainder,
        }
    }
}

/// Characters that close a pending token when seen from an accepting state.
#[inline]
fn is_delimiter(c: char) -> bool {
    matches!(c, SPACE | SENTINEL | ':')
}

/// Scans `input` against `table` without tracing.
pub fn scan(table: &TransitionTable, input: &str) -> ScanResult {
    Scanner::new(table).scan(input)
}
