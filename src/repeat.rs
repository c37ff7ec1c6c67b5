use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that matches a parser exactly `times` times
///
/// A shorter run is a failure, and since the caller keeps its own cursor the
/// partial run consumes nothing. Actions fired during the partial run stay
/// fired. Like the other repetitions, it fails on an exhausted cursor.
pub struct Repeat<P> {
    times: usize,
    parser: P,
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        if cursor.eos() {
            return Err(NoMatch);
        }

        let mut results = Vec::new();
        for _ in 0..self.times {
            let (value, next_cursor) = self.parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(times: usize, parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat { times, parser }
}
