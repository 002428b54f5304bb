//! Reckon - an arithmetic expression calculator
//!
//! # Overview
//!
//! Reckon evaluates infix arithmetic such as `sqrt((9*9)/12 + 9) ^ 2` to an
//! `f64`, with operator precedence, parentheses, unary minus,
//! right-associative `^` and a square-root function. Every malformed or
//! meaningless input is reported as one `EvaluationError` with a
//! human-readable message.
//!
//! # Quick Start
//!
//! ```
//! use reckon::evaluate;
//!
//! assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
//!
//! let err = evaluate("2 + 3)").unwrap_err();
//! assert_eq!(err.to_string(), "Unexpected character ')' at position 3.");
//! ```
//!
//! # Two-operand calculations
//!
//! ```
//! use reckon::{Operator, build_expression, calculate};
//!
//! assert_eq!(calculate(9.0, 3.0, Operator::Divide).unwrap(), 3.0);
//! assert_eq!(build_expression(9.0, 3.0, Operator::Divide), "9 / 3");
//! ```
//!
//! # Rendering errors
//!
//! [`render_error`] prints an annotated snippet of the input pointing at the
//! failure, using the location carried by the error.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
    render_validation_error_to,
};

// Re-export public API from reckon_core
pub use reckon_core::api::{
    Calculation, CalculationRequest, DEFAULT_MAX_DEPTH, Diagnostic, EvaluatorOptions,
    MAX_EXPRESSION_LENGTH, Severity, ValidationError,
};
pub use reckon_core::calculator::{Operator, UnknownOperator, build_expression, calculate};
pub use reckon_core::evaluator::{
    EvaluationError, EvaluationErrorKind, Found, evaluate, evaluate_with_options,
};
pub use reckon_core::source::Span;
