// src/lexer/table.rs

//! The DFA transition table and the builder that produces it.
//!
//! A table is assembled once through `TransitionTableBuilder` and is
//! immutable afterwards. The only way to read it is through lookups, so a
//! single table can back any number of concurrent scans.

use log::{debug, trace};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// States of the `while` statement automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Nothing read yet; leading blank lines loop here.
    Start,
    /// Partial `while` keyword, one state per letter read.
    W,
    Wh,
    Whi,
    Whil,
    /// Full keyword read, plus any blanks after it.
    While,
    /// Inside the left-hand identifier of the condition (and the blanks after it).
    CondLeft,
    /// First character of the comparison operator read.
    Comparison,
    /// Comparison operator complete, plus any blanks after it.
    ComparisonDone,
    /// Inside the right-hand identifier of the condition.
    CondRight,
    /// Blanks after the right-hand identifier.
    CondRightBlank,
    /// The header colon has been read.
    HeaderColon,
    /// At the start of a body line.
    LineStart,
    /// Partial four-space indentation.
    Indent1,
    Indent2,
    Indent3,
    /// Indentation complete.
    Indented,
    /// Inside the assignment target.
    Target,
    /// Blanks after the assignment target.
    TargetBlank,
    /// Assignment operator read.
    Assign,
    /// Inside the left operand of the arithmetic expression.
    Operand,
    /// `+` or `-` read.
    AddSub,
    /// `/` read; may become `//`.
    Slash,
    /// `//` read.
    FloorDiv,
    /// `*` read; may become `**`.
    Star,
    /// `**` read.
    Power,
    /// Inside an integer right operand.
    Number,
    /// Inside an identifier right operand.
    RightOperand,
    /// The whole input matched.
    Accept,
}

impl State {
    /// Short lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            State::Start => "start",
            State::W => "w",
            State::Wh => "wh",
            State::Whi => "whi",
            State::Whil => "whil",
            State::While => "while",
            State::CondLeft => "cond_left",
            State::Comparison => "comparison",
            State::ComparisonDone => "comparison_done",
            State::CondRight => "cond_right",
            State::CondRightBlank => "cond_right_blank",
            State::HeaderColon => "header_colon",
            State::LineStart => "line_start",
            State::Indent1 => "indent1",
            State::Indent2 => "indent2",
            State::Indent3 => "indent3",
            State::Indented => "indented",
            State::Target => "target",
            State::TargetBlank => "target_blank",
            State::Assign => "assign",
            State::Operand => "operand",
            State::AddSub => "add_sub",
            State::Slash => "slash",
            State::FloorDiv => "floor_div",
            State::Star => "star",
            State::Power => "power",
            State::Number => "number",
            State::RightOperand => "right_operand",
            State::Accept => "accept",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable, character-indexed DFA.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    initial: State,
    success: Option<State>,
    accepting: HashSet<State>,
    transitions: HashMap<(State, char), State>,
}

impl TransitionTable {
    /// Starts building a table whose scans begin in `initial`.
    pub fn builder(initial: State) -> TransitionTableBuilder {
        TransitionTableBuilder::new(initial)
    }

    /// Returns the target of `(state, c)`, or `None` when the pair was never registered.
    #[inline]
    pub fn lookup(&self, state: State, c: char) -> Option<State> {
        self.transitions.get(&(state, c)).copied()
    }

    pub fn initial_state(&self) -> State {
        self.initial
    }

    #[inline]
    pub fn is_accepting(&self, state: State) -> bool {
        self.accepting.contains(&state)
    }

    pub fn success_state(&self) -> Option<State> {
        self.success
    }

    /// True only for the designated success state.
    pub fn is_success(&self, state: State) -> bool {
        self.success == Some(state)
    }

    /// Number of registered `(state, char)` pairs.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Append-only construction of a `TransitionTable`.
///
/// Registering the same `(state, char)` pair twice keeps the later target.
#[derive(Debug, Clone)]
pub struct TransitionTableBuilder {
    table: TransitionTable,
}

impl TransitionTableBuilder {
    pub fn new(initial: State) -> Self {
        TransitionTableBuilder {
            table: TransitionTable {
                initial,
                success: None,
                accepting: HashSet::new(),
                transitions: HashMap::new(),
            },
        }
    }

    /// Re-designates the starting state.
    pub fn initial(mut self, state: State) -> Self {
        self.table.initial = state;
        self
    }

    /// Registers `state --c--> target` for every `c` in `chars`.
    pub fn transition(mut self, state: State, chars: &str, target: State) -> Self {
        for c in chars.chars() {
            if let Some(previous) = self.table.transitions.insert((state, c), target) {
                if previous != target {
                    trace!(
                        "transition ({}, {:?}) redirected from {} to {}",
                        state,
                        c,
                        previous,
                        target
                    );
                }
            }
        }
        self
    }

    pub fn accepting(mut self, state: State) -> Self {
        self.table.accepting.insert(state);
        self
    }

    /// Designates the state that marks a fully matched input.
    ///
    /// This does not make the state accepting: no token boundary is declared from it.
    pub fn success(mut self, state: State) -> Self {
        self.table.success = Some(state);
        self
    }

    pub fn build(self) -> TransitionTable {
        debug!(
            "built transition table: {} transitions, {} accepting states",
            self.table.transitions.len(),
            self.table.accepting.len()
        );
        self.table
    }
}
