use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that validates everything before a terminator
///
/// Scans forward one character at a time until `terminator` matches (or the
/// input runs out), then requires `content` to consume that captured prefix
/// completely. Only the prefix is consumed; the terminator is left for the
/// next parser. An empty prefix is a failure.
///
/// # Examples
/// - `alpha-run` excluding `;` on `"abc;"` → matches `"abc"`, cursor at `;`
/// - `alpha-run` excluding `;` on `"ab1;"` → fails, `"ab1"` is not all letters
pub struct Exclude<P, T> {
    content: P,
    terminator: T,
}

impl<P, T> Exclude<P, T> {
    pub fn new(content: P, terminator: T) -> Self {
        Exclude {
            content,
            terminator,
        }
    }
}

impl<'code, P, T> Parser<'code> for Exclude<P, T>
where
    P: Parser<'code>,
    T: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let mut end = cursor;
        while !end.eos() && self.terminator.parse(end).is_err() {
            end = end.next();
        }
        if end.position() == cursor.position() {
            return Err(NoMatch);
        }

        let (value, rest) = self.content.parse(cursor.limit(end.position()))?;
        if !rest.eos() {
            return Err(NoMatch);
        }

        Ok((value, end))
    }
}

/// Convenience function to create an Exclude parser
pub fn exclude<'code, P, T>(content: P, terminator: T) -> Exclude<P, T>
where
    P: Parser<'code>,
    T: Parser<'code>,
{
    Exclude::new(content, terminator)
}

/// Extension trait to add .excluding() method support for parsers
pub trait ExcludeExt<'code>: Parser<'code> + Sized {
    fn excluding<T>(self, terminator: T) -> Exclude<Self, T>
    where
        T: Parser<'code>,
    {
        Exclude::new(self, terminator)
    }
}

impl<'code, P> ExcludeExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many1::many1;
    use crate::text::{alpha, ch, decimal, string};

    #[test]
    fn test_exclude_stops_before_terminator() {
        let parser = many1(alpha()).excluding(ch(';'));

        let (letters, cursor) = parser.parse(Cursor::new("abc;def")).unwrap();
        assert_eq!(letters, vec!['a', 'b', 'c']);
        assert_eq!(cursor.rest(), ";def");
    }

    #[test]
    fn test_exclude_content_must_consume_whole_prefix() {
        let parser = many1(alpha()).excluding(ch(';'));
        assert!(parser.parse(Cursor::new("ab1;")).is_err());
    }

    #[test]
    fn test_exclude_empty_prefix_fails() {
        let parser = many1(alpha()).excluding(ch(';'));
        assert!(parser.parse(Cursor::new(";abc")).is_err());
        assert!(parser.parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_exclude_without_terminator_takes_rest() {
        let (value, cursor) = exclude(decimal(), ch(')')).parse(Cursor::new("4.5")).unwrap();
        assert_eq!(value, 4.5);
        assert!(cursor.eos());
    }

    #[test]
    fn test_exclude_multichar_terminator() {
        let parser = exclude(many1(alpha()), string("-->"));

        let (_, cursor) = parser.parse(Cursor::new("note-->")).unwrap();
        assert_eq!(cursor.rest(), "-->");
    }

    #[test]
    fn test_exclude_content_cannot_see_past_terminator() {
        // Without the limit, decimal() would happily read "12.5"
        let (value, cursor) = exclude(decimal(), ch('.')).parse(Cursor::new("12.5")).unwrap();
        assert_eq!(value, 12.0);
        assert_eq!(cursor.rest(), ".5");
    }
}
