use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Repetition is greedy and stops at the first failure. Invoked on an
/// exhausted cursor it fails instead of returning zero matches, so grammars
/// can use it to fail fast at end of input; wrap it in `optional` when the
/// tail may legitimately be empty there.
///
/// An iteration that succeeds without consuming input ends the repetition
/// after recording its value once.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        if cursor.eos() {
            return Err(NoMatch);
        }

        let mut results = Vec::new();
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

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Extension trait to add .many() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }
}

impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
