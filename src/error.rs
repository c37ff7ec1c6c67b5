use thiserror::Error;

/// The single failure signal of the engine
///
/// A parser that does not recognize the input at the current position returns
/// `Err(NoMatch)`. It carries no position or expectation: callers that need to
/// know where parsing stopped still hold their own cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Error)]
#[error("no match")]
pub struct NoMatch;
