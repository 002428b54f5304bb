//! Core evaluation logic.
//!
//! A single-pass recursive descent over the normalized buffer. Each production
//! consumes its syntactic unit and returns its numeric value directly; there
//! is no intermediate AST.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := power (('*' | '/') power)*
//! power      := unary ('^' power)?
//! unary      := '-'* function
//! function   := 'sqrt(' expression ')' | atom
//! atom       := '(' expression ')' | number
//! number     := digit+ ('.' digit*)?
//! ```
//!
//! Whitespace is removed before parsing, with one exception: a number literal
//! ends where the original text had whitespace, so `2 3` is two numbers.

use tracing::trace;

use crate::evaluator::{
    EvaluationError,
    EvaluationErrorKind::{self, *},
    EvaluatorOptions,
    operators::{BinaryOp, eval_binary, eval_sqrt},
};
use crate::source::NormalizedSource;

const SQRT_PREFIX: &str = "sqrt(";

/// Per-call evaluation state.
///
/// Built fresh for every evaluation, so concurrent evaluations never share a
/// cursor or depth counter.
pub struct Evaluator<'a> {
    options: &'a EvaluatorOptions,
    source: &'a NormalizedSource,
    /// Byte position in the normalized buffer. Only moves forward.
    pos: usize,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(options: &'a EvaluatorOptions, source: &'a NormalizedSource) -> Self {
        Self {
            options,
            source,
            pos: 0,
            depth: 0,
        }
    }

    /// Evaluate the whole buffer. Trailing input that the grammar did not
    /// consume is an error.
    pub fn eval(&mut self) -> Result<f64, EvaluationError> {
        if self.source.is_empty() {
            return Err(EmptyExpression.into());
        }

        let result = self.parse_expression()?;

        if let Some(found) = self.peek() {
            return Err(self.error_here(UnexpectedCharacter {
                found,
                position: self.pos,
            }));
        }

        Ok(result)
    }

    fn peek(&self) -> Option<char> {
        self.source.char_at(self.pos)
    }

    fn error_here(&self, kind: EvaluationErrorKind) -> EvaluationError {
        EvaluationError::new(kind, Some(self.source.span_at(self.pos)))
    }

    fn expect(&mut self, expected: char) -> Result<(), EvaluationError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            found => Err(self.error_here(ExpectedCharacter {
                expected,
                found: found.into(),
                position: self.pos,
            })),
        }
    }

    fn parse_expression(&mut self) -> Result<f64, EvaluationError> {
        // Check depth before descending
        if self.depth >= self.options.max_depth {
            return Err(self.error_here(TooDeeplyNested {
                max_depth: self.options.max_depth,
            }));
        }

        self.depth += 1;
        trace!(depth = self.depth, pos = self.pos, "expression");
        let result = self.parse_sum();
        self.depth -= 1;
        result
    }

    fn parse_sum(&mut self) -> Result<f64, EvaluationError> {
        let mut result = self.parse_term()?;

        while let Some(op @ (BinaryOp::Add | BinaryOp::Sub)) =
            self.peek().and_then(BinaryOp::from_char)
        {
            self.pos += 1;
            let right = self.parse_term()?;
            result = eval_binary(op, result, right, None)?;
        }

        Ok(result)
    }

    fn parse_term(&mut self) -> Result<f64, EvaluationError> {
        let mut result = self.parse_power()?;

        while let Some(op @ (BinaryOp::Mul | BinaryOp::Div)) =
            self.peek().and_then(BinaryOp::from_char)
        {
            let op_span = self.source.span_at(self.pos);
            self.pos += 1;
            let right = self.parse_power()?;
            result = eval_binary(op, result, right, Some(op_span))?;
        }

        Ok(result)
    }

    /// `^` is right-associative. The chain is collected left to right and
    /// folded from the right, which keeps long chains off the call stack.
    fn parse_power(&mut self) -> Result<f64, EvaluationError> {
        let mut operands = vec![self.parse_unary()?];

        while self.peek() == Some('^') {
            self.pos += 1;
            operands.push(self.parse_unary()?);
        }

        let mut result = operands.pop().unwrap_or_default();
        while let Some(base) = operands.pop() {
            result = eval_binary(BinaryOp::Pow, base, result, None)?;
        }

        Ok(result)
    }

    /// Any run of leading minuses; an odd count negates.
    fn parse_unary(&mut self) -> Result<f64, EvaluationError> {
        let mut negations = 0usize;
        while self.peek() == Some('-') {
            self.pos += 1;
            negations += 1;
        }

        let value = self.parse_function()?;
        Ok(if negations % 2 == 1 { -value } else { value })
    }

    fn parse_function(&mut self) -> Result<f64, EvaluationError> {
        if !self.source.as_str()[self.pos..].starts_with(SQRT_PREFIX) {
            return self.parse_atom();
        }

        let start = self.pos;
        self.pos += SQRT_PREFIX.len();
        let value = self.parse_expression()?;
        self.expect(')')?;

        eval_sqrt(value, Some(self.source.span_between(start, self.pos)))
    }

    fn parse_atom(&mut self) -> Result<f64, EvaluationError> {
        if self.peek() == Some('(') {
            self.pos += 1;
            let result = self.parse_expression()?;
            self.expect(')')?;
            return Ok(result);
        }

        self.parse_number()
    }

    fn parse_number(&mut self) -> Result<f64, EvaluationError> {
        let source = self.source;
        let bytes = source.as_str().as_bytes();
        let start = self.pos;

        // A literal never spans whitespace in the original text.
        while self.pos < bytes.len()
            && (bytes[self.pos].is_ascii_digit() || bytes[self.pos] == b'.')
            && (self.pos == start || source.is_adjacent(self.pos))
        {
            self.pos += 1;
        }

        if self.pos == start {
            return Err(self.error_here(ExpectedNumber {
                found: self.peek().into(),
                position: self.pos,
            }));
        }

        let end = self.pos;
        let text = &source.as_str()[start..end];
        let invalid = || {
            EvaluationError::new(
                InvalidNumber {
                    text: text.to_string(),
                    position: start,
                },
                Some(source.span_between(start, end)),
            )
        };

        if !is_decimal_literal(text) {
            return Err(invalid());
        }

        text.parse::<f64>().map_err(|_| invalid())
    }
}

/// `digit+ ('.' digit*)?`
///
/// A trailing dot (`3.`) is accepted; a leading dot (`.5`) is not.
fn is_decimal_literal(text: &str) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };

    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}
