// src/lexer/classifier.rs

//! Positional classification of a token stream.
//!
//! The statement grammar is a five-slot header followed by a five-slot body
//! statement that repeats once per body line:
//!
//! ```text
//! header: KEYWORD VARIABLE COMPARISON_OPERATOR VARIABLE COLON
//! body:   VARIABLE ASSIGNMENT_OPERATOR VARIABLE ARITHMETIC_OPERATOR (VARIABLE | VALUE)
//! ```
//!
//! Categories come from the token's position only, with one exception: the
//! last body slot looks at the token text to tell integers from variables.
//! The DFA state a token was scanned in is never consulted.

use serde::Serialize;
use std::fmt;

use super::scanner::Token;

/// Semantic category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Keyword,
    Variable,
    ComparisonOperator,
    Colon,
    AssignmentOperator,
    ArithmeticOperator,
    Value,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Keyword => "KEYWORD",
            Category::Variable => "VARIABLE",
            Category::ComparisonOperator => "COMPARISON_OPERATOR",
            Category::Colon => "COLON",
            Category::AssignmentOperator => "ASSIGNMENT_OPERATOR",
            Category::ArithmeticOperator => "ARITHMETIC_OPERATOR",
            Category::Value => "VALUE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A grammar slot: either a fixed category or the variable-or-value choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Fixed(Category),
    VariableOrValue,
}

impl Slot {
    /// Resolves the slot against the token text.
    pub fn resolve(self, text: &str) -> Category {
        match self {
            Slot::Fixed(category) => category,
            Slot::VariableOrValue if is_integer(text) => Category::Value,
            Slot::VariableOrValue => Category::Variable,
        }
    }
}

pub const HEADER: [Slot; 5] = [
    Slot::Fixed(Category::Keyword),
    Slot::Fixed(Category::Variable),
    Slot::Fixed(Category::ComparisonOperator),
    Slot::Fixed(Category::Variable),
    Slot::Fixed(Category::Colon),
];

/// The segment that repeats once per body line.
pub const BODY: [Slot; 5] = [
    Slot::Fixed(Category::Variable),
    Slot::Fixed(Category::AssignmentOperator),
    Slot::Fixed(Category::Variable),
    Slot::Fixed(Category::ArithmeticOperator),
    Slot::VariableOrValue,
];

/// Length of the unrolled grammar: the header plus one body statement.
pub const GRAMMAR_LEN: usize = HEADER.len() + BODY.len();

/// Where a token index falls in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarPosition {
    Header(usize),
    /// Offset inside the repeating body segment.
    Body(usize),
}

impl GrammarPosition {
    pub const START: GrammarPosition = GrammarPosition::Header(0);

    /// The position of the `index`-th token of a stream.
    pub fn of_index(index: usize) -> Self {
        if index < HEADER.len() {
            GrammarPosition::Header(index)
        } else {
            GrammarPosition::Body((index - HEADER.len()) % BODY.len())
        }
    }

    /// The position after this one. The body segment wraps onto itself.
    pub fn next(self) -> Self {
        match self {
            GrammarPosition::Header(i) if i + 1 < HEADER.len() => GrammarPosition::Header(i + 1),
            GrammarPosition::Header(_) => GrammarPosition::Body(0),
            GrammarPosition::Body(i) => GrammarPosition::Body((i + 1) % BODY.len()),
        }
    }

    pub fn slot(self) -> Slot {
        match self {
            GrammarPosition::Header(i) => HEADER[i],
            GrammarPosition::Body(i) => BODY[i],
        }
    }
}

/// Walks grammar positions in token order.
#[derive(Debug, Clone, Copy)]
pub struct GrammarCursor {
    position: GrammarPosition,
}

impl Default for GrammarCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarCursor {
    pub fn new() -> Self {
        GrammarCursor {
            position: GrammarPosition::START,
        }
    }

    pub fn position(&self) -> GrammarPosition {
        self.position
    }

    /// Classifies `text` at the current position and moves to the next one.
    pub fn classify_next(&mut self, text: &str) -> Category {
        let category = self.position.slot().resolve(text);
        self.position = self.position.next();
        category
    }
}

/// Category of the `index`-th token of a stream whose text is `text`.
pub fn classify(index: usize, text: &str) -> Category {
    GrammarPosition::of_index(index).slot().resolve(text)
}

/// Categories for a whole token stream, in order.
pub fn classify_all(tokens: &[Token]) -> Vec<Category> {
    let mut cursor = GrammarCursor::new();
    tokens.iter().map(|t| cursor.classify_next(t.text())).collect()
}

/// Non-empty and made of ASCII digits only.
///
/// Other Unicode digits (`٣`, `５`) do not count: the scanner never lets them
/// into a token, so `classify` treats them as variables.
fn is_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
