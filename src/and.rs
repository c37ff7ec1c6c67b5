use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Both parsers run on the same cursor stream; if either fails the whole
/// sequence fails and the caller's cursor is left where it was.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples. Use `.void()` when only the
/// match matters.
///
/// Example:
/// ```
/// use tinyspirit::and::AndExt;
/// use tinyspirit::text::{ch, integer};
/// use tinyspirit::{Cursor, Parser};
///
/// let cursor = Cursor::new("12+30");
/// let (((left, _), right), cursor) = integer()
///     .and(ch('+'))
///     .and(integer())
///     .parse(cursor)
///     .unwrap();
/// assert_eq!(left + right, 42);
/// assert!(cursor.eos());
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
