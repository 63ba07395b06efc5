// tests/while_statement_tests.rs

//! End-to-end checks through the public API.

use test_log::test;
use while_lexer::lexer::{classify, scan, Scanner, TransitionTable, WHILE_TABLE};
use while_lexer::{analyze, Category, State};

#[test]
fn valid_statement_is_accepted_with_no_remainder() {
    let result = scan(&WHILE_TABLE, "while x < y:\n    x = x + y\n");
    assert_eq!(
        result.token_texts(),
        vec!["while", "x", "<", "y", ":", "x", "=", "x", "+", "y"]
    );
    assert!(WHILE_TABLE.is_success(result.final_state));
    assert_eq!(result.remainder, "");
}

#[test]
fn missing_comparison_is_rejected_with_a_remainder() {
    let analysis = analyze("while x y:\n    x=1\n");
    assert!(!analysis.is_accepted());
    assert_ne!(analysis.final_state(), State::Accept);
    assert!(!analysis.remainder().is_empty());
    assert!(analysis.remainder().starts_with(':'));
}

#[test]
fn trailing_integer_is_a_value() {
    let texts = ["while", "x", "<", "y", ":", "x", "=", "x", "+", "5"];
    let categories: Vec<Category> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| classify(i, t))
        .collect();
    assert_eq!(categories[9], Category::Value);
    for i in [1, 3, 5, 7] {
        assert_eq!(categories[i], Category::Variable);
    }
}

#[test]
fn assignment_without_spaces_merges_into_one_token() {
    // `=` is not a delimiter, so `x=y` is read as a single token.
    let analysis = analyze("while x < y:\n    x=y + 1\n");
    assert!(analysis.is_accepted());
    let texts: Vec<&str> = analysis.tokens().iter().map(|t| t.text()).collect();
    assert_eq!(texts, vec!["while", "x", "<", "y", ":", "x=y", "+", "1"]);
}

#[test]
fn custom_tables_drive_the_same_scanner() {
    let table = TransitionTable::builder(State::Start)
        .transition(State::Start, "w", State::W)
        .transition(State::W, " ", State::While)
        .accepting(State::W)
        .transition(State::While, "#", State::Accept)
        .success(State::Accept)
        .build();
    let result = Scanner::new(&table).scan("w ");
    assert_eq!(result.token_texts(), vec!["w"]);
    assert_eq!(result.final_state, State::Accept);
    assert!(table.is_success(result.final_state));
}
