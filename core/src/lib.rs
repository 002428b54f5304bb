//! Reckon core: an arithmetic expression evaluator and the calculator
//! services built on it.
//!
//! - [`evaluator`]: recursive-descent evaluation of infix expressions
//! - [`calculator`]: the two-operand entry path (`add`, `subtract`, ...)
//! - [`api`]: request resolution, validation errors and diagnostics
//! - [`source`]: whitespace normalization and spans

pub mod api;
pub mod calculator;
pub mod evaluator;
pub mod source;

pub use evaluator::{EvaluationError, EvaluationErrorKind, EvaluatorOptions, evaluate};
