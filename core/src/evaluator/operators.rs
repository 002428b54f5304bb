//! Binary operator and function implementations.
//!
//! Shared by the expression evaluator and the two-operand calculator so both
//! entry paths agree on arithmetic and on division by zero.

use crate::evaluator::{EvaluationError, EvaluationErrorKind};
use crate::source::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinaryOp::Add),
            '-' => Some(BinaryOp::Sub),
            '*' => Some(BinaryOp::Mul),
            '/' => Some(BinaryOp::Div),
            '^' => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

/// Evaluate a binary operation on two floats.
///
/// IEEE 754 semantics throughout, except that a divisor comparing equal to
/// zero (including `-0.0`) is an error. `Pow` may produce NaN, e.g. a negative
/// base with a fractional exponent.
pub fn eval_binary(
    op: BinaryOp,
    left: f64,
    right: f64,
    span: Option<Span>,
) -> Result<f64, EvaluationError> {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                Err(EvaluationError::division_by_zero(span))
            } else {
                Ok(left / right)
            }
        }
        BinaryOp::Pow => Ok(left.powf(right)),
    }
}

/// Square root. Zero is allowed; anything below zero is an error.
pub fn eval_sqrt(value: f64, span: Option<Span>) -> Result<f64, EvaluationError> {
    if value < 0.0 {
        return Err(EvaluationError::new(
            EvaluationErrorKind::NegativeSquareRoot,
            span,
        ));
    }
    Ok(value.sqrt())
}
