//! Evaluation errors.
//!
//! Every failure, syntactic or arithmetic, surfaces as one `EvaluationError`.
//! The `Display` text is the message shown to callers verbatim, so the
//! templates below are part of the observable behavior.

use core::fmt;

use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::source::Span;

/// What the evaluator found where it expected something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "{}", c),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

impl From<Option<char>> for Found {
    fn from(c: Option<char>) -> Self {
        c.map_or(Found::EndOfInput, Found::Char)
    }
}

/// Specific kinds of evaluation failure.
///
/// Positions are byte offsets into the whitespace-stripped input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationErrorKind {
    #[error("Empty expression.")]
    EmptyExpression,

    #[error("Unexpected character '{found}' at position {position}.")]
    UnexpectedCharacter { found: char, position: usize },

    #[error("Expected number at position {position}, got '{found}'.")]
    ExpectedNumber { found: Found, position: usize },

    #[error("Invalid number '{text}' at position {position}.")]
    InvalidNumber { text: String, position: usize },

    #[error("Expected '{expected}' at position {position}, got '{found}'.")]
    ExpectedCharacter {
        expected: char,
        found: Found,
        position: usize,
    },

    #[error("Division by zero.")]
    DivisionByZero,

    #[error("Cannot take square root of a negative number.")]
    NegativeSquareRoot,

    #[error("Expression is too deeply nested.")]
    TooDeeplyNested { max_depth: usize },
}

/// An evaluation failure, optionally located in the original input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct EvaluationError {
    pub kind: EvaluationErrorKind,
    pub span: Option<Span>,
}

impl EvaluationError {
    pub fn new(kind: EvaluationErrorKind, span: Option<Span>) -> Self {
        Self { kind, span }
    }

    pub fn division_by_zero(span: Option<Span>) -> Self {
        Self::new(EvaluationErrorKind::DivisionByZero, span)
    }

    /// Convert to a Diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        use EvaluationErrorKind::*;

        let (code, help) = match &self.kind {
            EmptyExpression => ("C001", Some("Type an expression such as `2 + 3`")),
            UnexpectedCharacter { .. } => (
                "C002",
                Some("Remove the extra input or add the missing operator"),
            ),
            ExpectedNumber { .. } => ("C003", None),
            InvalidNumber { .. } => (
                "C004",
                Some("Numbers are digits with an optional fractional part, like `12.5`"),
            ),
            ExpectedCharacter { .. } => ("C005", Some("Add the missing closing delimiter")),
            DivisionByZero => ("C006", None),
            NegativeSquareRoot => ("C007", None),
            TooDeeplyNested { .. } => ("C008", Some("Reduce nesting or simplify the expression")),
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            span: self.span.clone(),
            help: help.map(String::from),
            code: Some(code.to_string()),
        }
    }
}

impl From<EvaluationErrorKind> for EvaluationError {
    fn from(kind: EvaluationErrorKind) -> Self {
        Self::new(kind, None)
    }
}
