use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser wrapper that runs a callback on every successful match
///
/// Matching behavior is exactly that of the wrapped parser. The callback runs
/// once per match, after the match is final and before the result reaches the
/// enclosing combinator; it never runs on `NoMatch`.
///
/// The callback may capture references to state owned elsewhere (a trace, a
/// symbol table); the borrow checker makes sure that state outlives the parser.
pub struct Action<P, F> {
    parser: P,
    callback: F,
}

impl<P, F> Action<P, F> {
    pub fn new(parser: P, callback: F) -> Self {
        Action { parser, callback }
    }
}

impl<'code, P, F> Parser<'code> for Action<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output),
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.callback)(&value);
        Ok((value, cursor))
    }
}

/// Parser wrapper that runs an argument-less callback on every successful match
pub struct OnMatch<P, F> {
    parser: P,
    callback: F,
}

impl<'code, P, F> Parser<'code> for OnMatch<P, F>
where
    P: Parser<'code>,
    F: Fn(),
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.callback)();
        Ok((value, cursor))
    }
}

/// Convenience function to attach an action to a parser
pub fn action<'code, P, F>(parser: P, callback: F) -> Action<P, F>
where
    P: Parser<'code>,
    F: Fn(&P::Output),
{
    Action::new(parser, callback)
}

/// Extension trait to attach actions with method syntax
pub trait ActionExt<'code>: Parser<'code> + Sized {
    /// Call `callback` with the matched value on every match
    fn action<F>(self, callback: F) -> Action<Self, F>
    where
        F: Fn(&Self::Output),
    {
        Action::new(self, callback)
    }

    /// Call `callback` without arguments on every match
    fn on_match<F>(self, callback: F) -> OnMatch<Self, F>
    where
        F: Fn(),
    {
        OnMatch {
            parser: self,
            callback,
        }
    }
}

impl<'code, P> ActionExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::many::many;
    use crate::or::OrExt;
    use crate::text::{ch, decimal, integer};
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_action_receives_value() {
        let seen = RefCell::new(Vec::new());
        let parser = integer().action(|v| seen.borrow_mut().push(*v));

        let (value, _) = parser.parse(Cursor::new("42")).unwrap();
        assert_eq!(value, 42);
        assert_eq!(*seen.borrow(), vec![42]);
    }

    #[test]
    fn test_action_not_fired_on_failure() {
        let count = Cell::new(0);
        let parser = decimal().on_match(|| count.set(count.get() + 1));

        assert!(parser.parse(Cursor::new("x")).is_err());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_action_fires_once_per_match() {
        let count = Cell::new(0);
        let parser = many(ch('a').on_match(|| count.set(count.get() + 1)));

        parser.parse(Cursor::new("aaab")).unwrap();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_failed_branch_does_not_fire() {
        let left = Cell::new(0);
        let right = Cell::new(0);
        let parser = ch('x')
            .on_match(|| left.set(left.get() + 1))
            .or(ch('y').on_match(|| right.set(right.get() + 1)));

        parser.parse(Cursor::new("y")).unwrap();
        assert_eq!(left.get(), 0);
        assert_eq!(right.get(), 1);
    }

    #[test]
    fn test_committed_submatch_fires_even_if_sequence_fails() {
        let count = Cell::new(0);
        let parser = ch('a').on_match(|| count.set(count.get() + 1)).and(ch('b'));

        assert!(parser.parse(Cursor::new("ac")).is_err());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_action_function_syntax() {
        let total = Cell::new(0.0);
        let parser = action(decimal(), |v| total.set(total.get() + v));

        parser.parse(Cursor::new("1.5")).unwrap();
        parser.parse(Cursor::new("2.5")).unwrap();
        assert_eq!(total.get(), 4.0);
    }
}
