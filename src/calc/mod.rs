//! Arithmetic calculator built on the combinators
//!
//! [`Grammar`] recognizes `+ - * /` expressions with the usual precedence and
//! parentheses, recording a postfix trace through its actions. [`reduce`]
//! evaluates that trace and [`Calculator`] ties the two together.

pub mod eval;
pub mod grammar;
pub mod trace;

pub use eval::{Calculator, EvalError, reduce};
pub use grammar::Grammar;
pub use trace::{Op, Recorder, TraceEntry};
