// src/lexer/grammar.rs

//! The transition table for the `while` statement form:
//!
//! ```text
//! while <ident> <cmp> <ident>:
//!     <ident> = <ident> <arith> <ident|int>
//!     ...
//! ```
//!
//! Identifiers start with an ASCII letter or underscore. Comparison operators
//! are `<`, `>`, `=`, `!`, optionally followed by `=`. Arithmetic operators are
//! `+`, `-`, `*`, `**`, `/` and `//`. Body lines are indented by four spaces or
//! one tab.

use once_cell::sync::Lazy;

use super::table::{State, TransitionTable};

/// Terminates every input; appended by the scanner when missing.
pub const SENTINEL: char = '#';

pub(crate) const SPACE: char = ' ';
pub(crate) const TAB: char = '\t';
pub(crate) const NEWLINE: char = '\n';

const BLANK: &str = " \t";
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// The shared table, built on first use.
pub static WHILE_TABLE: Lazy<TransitionTable> = Lazy::new(while_statement_table);

/// True for space, tab and newline.
#[inline]
pub fn is_layout(c: char) -> bool {
    matches!(c, SPACE | TAB | NEWLINE)
}

/// Builds the `while` statement automaton from scratch.
pub fn while_statement_table() -> TransitionTable {
    let ident_start = format!("{LETTERS}_");
    let ident_rest = format!("{LETTERS}{DIGITS}_");
    let ident_start = ident_start.as_str();
    let ident_rest = ident_rest.as_str();
    let newline = "\n";
    let sentinel = SENTINEL.to_string();
    let sentinel = sentinel.as_str();

    TransitionTable::builder(State::Start)
        // Blank lines before the header.
        .transition(State::Start, newline, State::Start)
        // Keyword.
        .transition(State::Start, "w", State::W)
        .transition(State::W, "h", State::Wh)
        .transition(State::Wh, "i", State::Whi)
        .transition(State::Whi, "l", State::Whil)
        .transition(State::Whil, "e", State::While)
        .transition(State::While, BLANK, State::While)
        .accepting(State::While)
        // Condition, left identifier.
        .transition(State::While, ident_start, State::CondLeft)
        .transition(State::CondLeft, ident_rest, State::CondLeft)
        .accepting(State::CondLeft)
        .transition(State::CondLeft, BLANK, State::CondLeft)
        // Comparison operator, one or two characters.
        .transition(State::CondLeft, "<>=!", State::Comparison)
        .accepting(State::Comparison)
        .transition(State::Comparison, BLANK, State::ComparisonDone)
        .transition(State::Comparison, "=", State::ComparisonDone)
        .accepting(State::ComparisonDone)
        .transition(State::ComparisonDone, BLANK, State::ComparisonDone)
        // Condition, right identifier.
        .transition(State::Comparison, ident_start, State::CondRight)
        .transition(State::ComparisonDone, ident_start, State::CondRight)
        .transition(State::CondRight, ident_rest, State::CondRight)
        .transition(State::CondRight, BLANK, State::CondRightBlank)
        .transition(State::CondRightBlank, BLANK, State::CondRightBlank)
        .accepting(State::CondRight)
        .accepting(State::CondRightBlank)
        // Header colon and the end of the header line.
        .transition(State::CondRight, ":", State::HeaderColon)
        .transition(State::CondRightBlank, ":", State::HeaderColon)
        .accepting(State::HeaderColon)
        .transition(State::HeaderColon, BLANK, State::HeaderColon)
        .transition(State::HeaderColon, newline, State::LineStart)
        // Body lines: blank lines, then four spaces or a tab.
        .transition(State::LineStart, newline, State::LineStart)
        .transition(State::LineStart, " ", State::Indent1)
        .transition(State::Indent1, " ", State::Indent2)
        .transition(State::Indent2, " ", State::Indent3)
        .transition(State::Indent3, " ", State::Indented)
        .transition(State::LineStart, "\t", State::Indented)
        .accepting(State::LineStart)
        // End of input after a completed line.
        .transition(State::LineStart, sentinel, State::Accept)
        // Assignment target.
        .transition(State::Indented, ident_start, State::Target)
        .transition(State::Target, ident_rest, State::Target)
        .accepting(State::Target)
        .transition(State::Target, "=", State::Assign)
        .transition(State::Target, BLANK, State::TargetBlank)
        .transition(State::TargetBlank, BLANK, State::TargetBlank)
        .transition(State::TargetBlank, "=", State::Assign)
        .accepting(State::Assign)
        .transition(State::Assign, BLANK, State::Assign)
        // Left operand.
        .transition(State::Assign, ident_start, State::Operand)
        .transition(State::Operand, ident_rest, State::Operand)
        .accepting(State::Operand)
        .transition(State::Operand, BLANK, State::Operand)
        // Arithmetic operators.
        .transition(State::Operand, "+-", State::AddSub)
        .transition(State::AddSub, BLANK, State::AddSub)
        .transition(State::Operand, "/", State::Slash)
        .transition(State::Slash, BLANK, State::Slash)
        .transition(State::Slash, "/", State::FloorDiv)
        .transition(State::FloorDiv, BLANK, State::FloorDiv)
        .transition(State::Operand, "*", State::Star)
        .transition(State::Star, BLANK, State::Star)
        .transition(State::Star, "*", State::Power)
        .transition(State::Power, BLANK, State::Power)
        .accepting(State::AddSub)
        .accepting(State::FloorDiv)
        .accepting(State::Power)
        .accepting(State::Slash)
        .accepting(State::Star)
        // Integer right operand.
        .transition(State::AddSub, DIGITS, State::Number)
        .transition(State::FloorDiv, DIGITS, State::Number)
        .transition(State::Power, DIGITS, State::Number)
        .transition(State::Slash, DIGITS, State::Number)
        .transition(State::Star, DIGITS, State::Number)
        .transition(State::Number, DIGITS, State::Number)
        // Identifier right operand.
        .transition(State::AddSub, ident_start, State::RightOperand)
        .transition(State::FloorDiv, ident_start, State::RightOperand)
        .transition(State::Power, ident_start, State::RightOperand)
        .transition(State::Slash, ident_start, State::RightOperand)
        .transition(State::Star, ident_start, State::RightOperand)
        .transition(State::RightOperand, ident_rest, State::RightOperand)
        // The newline here is overridden just below.
        .transition(State::RightOperand, " \t\n", State::RightOperand)
        .accepting(State::RightOperand)
        .transition(State::RightOperand, newline, State::LineStart)
        .transition(State::RightOperand, sentinel, State::Accept)
        .transition(State::Number, BLANK, State::Number)
        .accepting(State::Number)
        .transition(State::Number, newline, State::LineStart)
        .transition(State::Number, sentinel, State::Accept)
        .success(State::Accept)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn keyword_path_is_spelled_letter_by_letter() {
        let table = &*WHILE_TABLE;
        let mut state = table.initial_state();
        for c in "while".chars() {
            state = table.lookup(state, c).unwrap();
        }
        assert_eq!(state, State::While);
        assert!(table.is_accepting(State::While));
    }

    #[test]
    fn leading_newlines_stay_in_start() {
        assert_eq!(WHILE_TABLE.lookup(State::Start, '\n'), Some(State::Start));
        assert_eq!(WHILE_TABLE.lookup(State::Start, ' '), None);
    }

    #[test]
    fn right_operand_newline_goes_to_next_line() {
        assert_eq!(WHILE_TABLE.lookup(State::RightOperand, '\n'), Some(State::LineStart));
        assert_eq!(WHILE_TABLE.lookup(State::RightOperand, '\t'), Some(State::RightOperand));
    }

    #[test]
    fn only_accept_is_the_success_state() {
        assert_eq!(WHILE_TABLE.success_state(), Some(State::Accept));
        assert!(!WHILE_TABLE.is_success(State::LineStart));
    }

    #[test]
    fn indentation_is_not_a_boundary_until_complete() {
        for state in [State::Indent1, State::Indent2, State::Indent3, State::Indented] {
            assert!(!WHILE_TABLE.is_accepting(state), "{state} should not be accepting");
        }
        assert!(!WHILE_TABLE.is_accepting(State::TargetBlank));
    }

    #[test]
    fn identifiers_cannot_start_with_a_digit() {
        assert_eq!(WHILE_TABLE.lookup(State::While, '1'), None);
        assert_eq!(WHILE_TABLE.lookup(State::While, '_'), Some(State::CondLeft));
        assert_eq!(WHILE_TABLE.lookup(State::CondLeft, '1'), Some(State::CondLeft));
    }

    #[test]
    fn layout_characters() {
        assert!(is_layout(' '));
        assert!(is_layout('\t'));
        assert!(is_layout('\n'));
        assert!(!is_layout('\r'));
        assert!(!is_layout(SENTINEL));
    }
}
