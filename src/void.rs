use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that discards a parser's value, turning it into a flag parser
pub struct Void<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Void<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok(((), cursor))
    }
}

pub fn void<'code, P>(parser: P) -> Void<P>
where
    P: Parser<'code>,
{
    Void { parser }
}

/// Extension trait to add .void() method support for parsers
pub trait VoidExt<'code>: Parser<'code> + Sized {
    fn void(self) -> Void<Self> {
        Void { parser: self }
    }
}

impl<'code, P> VoidExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::or::OrExt;
    use crate::text::{ch, integer, string};

    #[test]
    fn test_void_keeps_consumption() {
        let ((), cursor) = integer().void().parse(Cursor::new("123x")).unwrap();
        assert_eq!(cursor.rest(), "x");
    }

    #[test]
    fn test_void_unifies_mixed_outputs() {
        let parser = integer().void().or(string("none").void()).or(ch('_').void());

        assert!(parser.parse(Cursor::new("7")).is_ok());
        assert!(parser.parse(Cursor::new("none")).is_ok());
        assert!(parser.parse(Cursor::new("_")).is_ok());
        assert!(parser.parse(Cursor::new("?")).is_err());
    }
}
