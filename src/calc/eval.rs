use super::grammar::Grammar;
use super::trace::{Echo, Recorder, TraceEntry};
use crate::cursor::Cursor;
use crate::parser::Parser;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("not an arithmetic expression")]
    NoMatch(#[from] crate::error::NoMatch),
    #[error("unexpected input at byte {position}")]
    TrailingInput { position: usize },
    #[error("trace does not reduce to a single value")]
    MalformedTrace,
}

/// Evaluate a postfix trace
///
/// Entries are moved off the top of the trace into a buffer. Whenever the
/// buffer ends in an operator followed by two operands, the three collapse
/// into one operand. The operand moved last is the older one in the trace and
/// therefore the left-hand side. A well-formed trace leaves exactly one
/// operand behind.
pub fn reduce(trace: Vec<TraceEntry>) -> Result<f64, EvalError> {
    let mut buffer = Vec::with_capacity(trace.len());

    for entry in trace.into_iter().rev() {
        buffer.push(entry);

        while let [
            ..,
            TraceEntry::Operator(op),
            TraceEntry::Operand(rhs),
            TraceEntry::Operand(lhs),
        ] = buffer[..]
        {
            let value = op.apply(lhs, rhs);
            tracing::trace!(%op, lhs, rhs, value, "reduce");
            buffer.truncate(buffer.len() - 3);
            buffer.push(TraceEntry::Operand(value));
        }
    }

    match buffer[..] {
        [TraceEntry::Operand(value)] => Ok(value),
        _ => Err(EvalError::MalformedTrace),
    }
}

/// Parses and evaluates arithmetic expressions
///
/// Every call builds a fresh grammar over a fresh trace, so a calculator can
/// be reused for any number of independent evaluations.
#[derive(Default, Clone)]
pub struct Calculator {
    echo: Option<Echo>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report every literal and operator as the grammar recognizes it
    pub fn with_echo<F>(mut self, echo: F) -> Self
    where
        F: Fn(&TraceEntry) + 'static,
    {
        self.echo = Some(Rc::new(echo));
        self
    }

    /// Parse `input` and return its postfix trace
    ///
    /// The whole input, apart from surrounding whitespace, must be one
    /// expression.
    pub fn trace(&self, input: &str) -> Result<Vec<TraceEntry>, EvalError> {
        let recorder = match &self.echo {
            Some(echo) => Recorder::with_echo(Rc::clone(echo)),
            None => Recorder::new(),
        };
        let grammar = Grammar::new(&recorder);

        let ((), cursor) = grammar.parse(Cursor::new(input))?;
        if !cursor.eos() {
            return Err(EvalError::TrailingInput {
                position: cursor.position(),
            });
        }

        Ok(recorder.take())
    }

    pub fn evaluate(&self, input: &str) -> Result<f64, EvalError> {
        tracing::debug!(input, "evaluating");
        let trace = self.trace(input)?;
        let value = reduce(trace)?;
        tracing::debug!(value, "evaluated");
        Ok(value)
    }
}
