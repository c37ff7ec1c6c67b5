use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that makes a parser optional
///
/// Returns `Some` with the inner result when it matches and `None` otherwise.
/// Unlike `Maybe`, this also succeeds on an exhausted cursor, which makes it
/// the way to let a `many` tail be empty at end of input.
///
/// Example:
/// ```
/// use tinyspirit::optional::OptionalExt;
/// use tinyspirit::text::ch;
/// use tinyspirit::{Cursor, Parser};
///
/// let (sign, cursor) = ch('-').optional().parse(Cursor::new("-1")).unwrap();
/// assert_eq!(sign, Some('-'));
/// assert_eq!(cursor.rest(), "1");
///
/// let (sign, _) = ch('-').optional().parse(Cursor::new("")).unwrap();
/// assert_eq!(sign, None);
/// ```
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        match self.parser.parse(cursor) {
            Ok((value, next_cursor)) => Ok((Some(value), next_cursor)),
            Err(NoMatch) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many;
    use crate::text::{ch, integer};

    #[test]
    fn test_optional_present() {
        let (value, cursor) = optional(integer()).parse(Cursor::new("42;")).unwrap();
        assert_eq!(value, Some(42));
        assert_eq!(cursor.rest(), ";");
    }

    #[test]
    fn test_optional_absent() {
        let (value, cursor) = optional(integer()).parse(Cursor::new(";")).unwrap();
        assert_eq!(value, None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_optional_many_at_end_of_input() {
        let (value, cursor) = many(ch('a')).optional().parse(Cursor::new("")).unwrap();
        assert_eq!(value, None);
        assert!(cursor.eos());
    }
}
