//! Arithmetic expression evaluator.
//!
//! Turns an infix expression such as `sqrt((9*9)/12)^2 - 1` into an `f64`.
//! Supported: `+ - * / ^`, parentheses, any number of leading unary minuses,
//! and `sqrt(...)`. There are no variables, no other functions, no implicit
//! multiplication and no exponent notation.
//!
//! ## Design Principles
//!
//! - **Never panic**: All adversarial inputs must be handled gracefully
//! - **Stack-safe**: Depth tracking bounds recursion on deeply nested input
//! - **Pure**: Each call owns its state; the same input always gives the same result
//!
//! ## Example
//!
//! ```
//! use reckon_core::evaluator::evaluate;
//!
//! assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
//! assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
//! assert_eq!(evaluate("5/0").unwrap_err().to_string(), "Division by zero.");
//! ```

mod error;
mod eval;
pub mod operators;


pub use error::{EvaluationError, EvaluationErrorKind, Found};
pub use eval::Evaluator;

use tracing::debug;

use crate::source::NormalizedSource;

/// Default maximum nesting depth of expression levels.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Options for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum nesting depth of expression levels (`(` and `sqrt(` each open
    /// one; the top-level expression counts as the first).
    ///
    /// Default: 50
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate an expression with default options.
pub fn evaluate(text: &str) -> Result<f64, EvaluationError> {
    evaluate_with_options(text, &EvaluatorOptions::default())
}

/// Evaluate an expression with a custom nesting limit.
///
/// ## Example
///
/// ```
/// use reckon_core::evaluator::{EvaluatorOptions, evaluate_with_options};
///
/// let options = EvaluatorOptions { max_depth: 2 };
/// assert!(evaluate_with_options("(1)", &options).is_ok());
/// assert!(evaluate_with_options("((1))", &options).is_err());
/// ```
pub fn evaluate_with_options(
    text: &str,
    options: &EvaluatorOptions,
) -> Result<f64, EvaluationError> {
    debug!(input = text, max_depth = options.max_depth, "evaluating expression");

    let source = NormalizedSource::new(text);
    let result = Evaluator::new(options, &source).eval();

    match &result {
        Ok(value) => debug!(value, "evaluation succeeded"),
        Err(e) => debug!(error = %e, "evaluation failed"),
    }

    result
}
