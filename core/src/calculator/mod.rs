//! Two-operand calculator.
//!
//! The alternative entry path to the expression evaluator: two raw operands
//! and a named operator. It shares its arithmetic with the evaluator and
//! renders a canonical textual form such as `9 + 3` for display and storage.


use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evaluator::{
    EvaluationError,
    operators::{BinaryOp, eval_binary},
};

/// A named two-operand operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }

    pub fn symbol(self) -> char {
        self.binary_op().symbol()
    }

    fn binary_op(self) -> BinaryOp {
        match self {
            Operator::Add => BinaryOp::Add,
            Operator::Subtract => BinaryOp::Sub,
            Operator::Multiply => BinaryOp::Mul,
            Operator::Divide => BinaryOp::Div,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The selected operator is invalid.")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// Apply `op` to `a` and `b`.
///
/// Division fails when `b` compares equal to zero, exactly as `/` does in
/// an expression.
pub fn calculate(a: f64, b: f64, op: Operator) -> Result<f64, EvaluationError> {
    eval_binary(op.binary_op(), a, b, None)
}

/// Canonical text for a two-operand calculation, e.g. `9 + 3` or `3.5 * 2`.
pub fn build_expression(a: f64, b: f64, op: Operator) -> String {
    format!("{} {} {}", format_operand(a), op.symbol(), format_operand(b))
}

/// Integral values print without a decimal point; everything else uses the
/// shortest representation that round-trips.
fn format_operand(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}
