//! Calculation requests and their results.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ValidationError;
use crate::calculator::{Operator, build_expression, calculate};
use crate::evaluator::{EvaluatorOptions, evaluate_with_options};

/// Maximum expression length, in characters.
pub const MAX_EXPRESSION_LENGTH: usize = 500;

const MODE_MESSAGE: &str = "Provide either an expression or operand_a, operand_b, and operator.";

/// A request to calculate something.
///
/// Either `expression` is set (expression mode), or `operand_a`, `operand_b`
/// and `operator` all are (operand mode). When both are present the operator
/// decides: a filled `operator` selects operand mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationRequest {
    pub expression: Option<String>,
    pub operand_a: Option<f64>,
    pub operand_b: Option<f64>,
    /// Kept as text so an unknown name is a validation error, not a decoding one.
    pub operator: Option<String>,
}

/// A successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The evaluated text, or the canonical form of a two-operand calculation.
    pub expression: String,
    pub result: f64,
    pub operator: Option<Operator>,
    pub operand_a: Option<f64>,
    pub operand_b: Option<f64>,
}

/// Present and not blank.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl CalculationRequest {
    pub fn expression(text: impl Into<String>) -> Self {
        Self {
            expression: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn operands(a: f64, b: f64, operator: Operator) -> Self {
        Self {
            operand_a: Some(a),
            operand_b: Some(b),
            operator: Some(operator.name().to_string()),
            ..Self::default()
        }
    }

    /// Check the request shape without calculating anything.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut messages = Vec::new();

        if let Some(expression) = &self.expression {
            if expression.chars().count() > MAX_EXPRESSION_LENGTH {
                messages.push((
                    "expression",
                    format!(
                        "The expression field must not be greater than {} characters.",
                        MAX_EXPRESSION_LENGTH
                    ),
                ));
            }
        }

        if let Some(operator) = filled(&self.operator) {
            if let Err(e) = operator.parse::<Operator>() {
                messages.push(("operator", e.to_string()));
            }
        }

        let has_expression = filled(&self.expression).is_some();
        let has_operands = self.operand_a.is_some()
            && self.operand_b.is_some()
            && filled(&self.operator).is_some();
        if !has_expression && !has_operands {
            messages.push(("mode", MODE_MESSAGE.to_string()));
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::from_messages(messages))
        }
    }

    /// Validate, then run the matching entry path.
    ///
    /// Evaluation failures come back as a `calculation` error carrying the
    /// evaluator's message verbatim.
    pub fn resolve(&self, options: &EvaluatorOptions) -> Result<Calculation, ValidationError> {
        self.validate()?;

        let operator = filled(&self.operator);

        if let (Some(expression), None) = (filled(&self.expression), operator) {
            debug!(expression, "resolving expression request");
            let result = evaluate_with_options(expression, options)?;
            return Ok(Calculation {
                expression: expression.to_string(),
                result,
                operator: None,
                operand_a: None,
                operand_b: None,
            });
        }

        let (Some(a), Some(b), Some(operator)) = (self.operand_a, self.operand_b, operator) else {
            return Err(ValidationError::from_messages([("mode", MODE_MESSAGE)]));
        };
        let operator: Operator = operator.parse()?;

        debug!(a, b, %operator, "resolving operand request");
        let result = calculate(a, b, operator)?;
        Ok(Calculation {
            expression: build_expression(a, b, operator),
            result,
            operator: Some(operator),
            operand_a: Some(a),
            operand_b: Some(b),
        })
    }
}
