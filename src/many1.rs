use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        if cursor.eos() {
            return Err(NoMatch);
        }

        // First parse must succeed
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        while let Ok((value, next_cursor)) = self.parser.parse(cursor) {
            results.push(value);
            if next_cursor.position() == cursor.position() {
                break;
            }
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}
