//! Public error types for the calculator API.

use core::fmt;
use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::calculator::UnknownOperator;
use crate::evaluator::EvaluationError;
use crate::source::Span;

/// A diagnostic message with an optional source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Location in the original input, when the failure has one.
    pub span: Option<Span>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "C001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A rejected calculation request.
///
/// Serializes to the body of an HTTP 422 response:
///
/// ```json
/// {"message": "Division by zero.", "errors": {"calculation": ["Division by zero."]}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Summary: the first error message, plus a count of the others.
    pub message: String,

    /// Messages keyed by the field (or pseudo-field) they belong to.
    pub errors: BTreeMap<String, Vec<String>>,

    /// The evaluation failure behind a `calculation` error, for rendering.
    #[serde(skip)]
    pub evaluation: Option<EvaluationError>,
}

impl ValidationError {
    /// HTTP status code for a validation failure.
    pub const STATUS: u16 = 422;

    /// Build from `(key, message)` pairs in the order they were found.
    pub fn from_messages<I, K, M>(messages: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>,
    {
        let mut first = None;
        let mut count = 0usize;
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (key, message) in messages {
            let message = message.into();
            if first.is_none() {
                first = Some(message.clone());
            }
            count += 1;
            errors.entry(key.into()).or_default().push(message);
        }

        let first = first.unwrap_or_default();
        let message = match count {
            0 | 1 => first,
            2 => format!("{} (and 1 more error)", first),
            n => format!("{} (and {} more errors)", first, n - 1),
        };

        Self {
            message,
            errors,
            evaluation: None,
        }
    }

    pub fn status(&self) -> u16 {
        Self::STATUS
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<EvaluationError> for ValidationError {
    fn from(err: EvaluationError) -> Self {
        let mut validation = Self::from_messages([("calculation", err.to_string())]);
        validation.evaluation = Some(err);
        validation
    }
}

impl From<UnknownOperator> for ValidationError {
    fn from(err: UnknownOperator) -> Self {
        Self::from_messages([("operator", err.to_string())])
    }
}
