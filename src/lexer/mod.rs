// src/lexer/mod.rs

//! Lexical analysis of `while` statements.
//!
//! `table` holds the generic DFA, `grammar` the concrete automaton for the
//! statement form, `scanner` runs an automaton over text and `classifier`
//! labels the resulting tokens. `WhileAnalyzer` ties them together.

pub mod classifier;
pub mod grammar;
pub mod scanner;
pub mod table;

pub use classifier::{classify, classify_all, Category};
pub use grammar::{SENTINEL, WHILE_TABLE};
pub use scanner::{scan, ScanResult, Scanner, Token};
pub use table::{State, TransitionTable, TransitionTableBuilder};

use log::{debug, info};
use serde::Serialize;

/// Result of analyzing one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    accepted: bool,
    #[serde(flatten)]
    scan: ScanResult,
    categories: Vec<Category>,
}

impl Analysis {
    /// True when scanning ended in the success state.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn tokens(&self) -> &[Token] {
        &self.scan.tokens
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Each token with its category.
    pub fn classified(&self) -> impl Iterator<Item = (&Token, Category)> + '_ {
        self.scan.tokens.iter().zip(self.categories.iter().copied())
    }

    pub fn final_state(&self) -> State {
        self.scan.final_state
    }

    pub fn remainder(&self) -> &str {
        &self.scan.remainder
    }

    /// The unconsumed input for a rejected analysis.
    pub fn error_at(&self) -> Option<&str> {
        if self.accepted {
            None
        } else {
            Some(&self.scan.remainder)
        }
    }

    pub fn scan_result(&self) -> &ScanResult {
        &self.scan
    }

    pub fn into_scan_result(self) -> ScanResult {
        self.scan
    }
}

/// Scans and classifies input against the shared `while` statement table.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhileAnalyzer {
    verbose: bool,
}

impl WhileAnalyzer {
    pub fn new() -> Self {
        WhileAnalyzer::default()
    }

    /// Enables the scanner's per-step trace.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn analyze(&self, input: &str) -> Analysis {
        let table: &TransitionTable = &WHILE_TABLE;
        let scan = Scanner::new(table).verbose(self.verbose).scan(input);
        let accepted = table.is_success(scan.final_state);
        let categories = classify_all(&scan.tokens);

        if accepted {
            info!("input accepted with {} tokens", scan.tokens.len());
        } else {
            info!(
                "input rejected in state {}, unconsumed: {:?}",
                scan.final_state, scan.remainder
            );
        }
        debug!("categories: {:?}", categories);

        Analysis {
            accepted,
            scan,
            categories,
        }
    }
}

/// Analyzes `input` with default settings.
pub fn analyze(input: &str) -> Analysis {
    WhileAnalyzer::new().analyze(input)
}
