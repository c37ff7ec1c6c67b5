use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that runs a parser without requiring it to match
///
/// If the inner parser matches, its input is consumed and its action fires;
/// otherwise nothing is consumed. Either way the result is a plain success,
/// except on an exhausted cursor, where `Maybe` fails.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, P> Parser<'code> for Maybe<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        if cursor.eos() {
            return Err(NoMatch);
        }

        match self.parser.parse(cursor) {
            Ok((_, next_cursor)) => Ok(((), next_cursor)),
            Err(NoMatch) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, P>(parser: P) -> Maybe<P>
where
    P: Parser<'code>,
{
    Maybe::new(parser)
}

/// Extension trait to add .maybe() method support for parsers
pub trait MaybeExt<'code>: Parser<'code> + Sized {
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }
}

impl<'code, P> MaybeExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::text::ch;

    #[test]
    fn test_maybe_consumes_on_match() {
        let ((), cursor) = maybe(ch('-')).parse(Cursor::new("-5")).unwrap();
        assert_eq!(cursor.value().unwrap(), '5');
    }

    #[test]
    fn test_maybe_succeeds_without_match() {
        let ((), cursor) = maybe(ch('-')).parse(Cursor::new("5")).unwrap();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_maybe_fails_on_empty_input() {
        assert!(maybe(ch('-')).parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_maybe_in_sequence() {
        let parser = ch('-').maybe().and(ch('5'));

        assert!(parser.parse(Cursor::new("-5")).is_ok());
        assert!(parser.parse(Cursor::new("5")).is_ok());
        assert!(parser.parse(Cursor::new("+5")).is_err());
    }
}
