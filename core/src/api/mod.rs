//! Public API for embedding the calculator.
//!
//! The request boundary mirrors what a web handler needs: it accepts either
//! an expression or two operands with an operator, runs the right entry path,
//! and turns every failure into a `ValidationError` whose body carries the
//! message verbatim.
//!
//! # Example
//!
//! ```
//! use reckon_core::api::CalculationRequest;
//!
//! let request = CalculationRequest::expression("2 + 3 * 4");
//! let calculation = request.resolve(&Default::default()).unwrap();
//! assert_eq!(calculation.result, 14.0);
//!
//! let request = CalculationRequest::expression("5/0");
//! let error = request.resolve(&Default::default()).unwrap_err();
//! assert_eq!(error.status(), 422);
//! assert_eq!(error.errors["calculation"], ["Division by zero."]);
//! ```

pub mod error;
pub mod request;


pub use crate::evaluator::{DEFAULT_MAX_DEPTH, EvaluatorOptions};
pub use error::{Diagnostic, Severity, ValidationError};
pub use request::{Calculation, CalculationRequest, MAX_EXPRESSION_LENGTH};
