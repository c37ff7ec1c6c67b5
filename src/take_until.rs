use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser that captures input up to the first position where another parser matches
///
/// The terminator is only probed, never consumed. Scanning also stops at end
/// of input. At least one character must be captured.
pub struct TakeUntilParser<P> {
    terminator: P,
}

impl<'code, P> Parser<'code> for TakeUntilParser<P>
where
    P: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let mut current = cursor;
        while !current.eos() && self.terminator.parse(current).is_err() {
            current = current.next();
        }

        match cursor.span_to(&current) {
            "" => Err(NoMatch),
            taken => Ok((taken, current)),
        }
    }
}

/// Convenience function to create a TakeUntilParser
pub fn take_until<'code, P>(terminator: P) -> TakeUntilParser<P>
where
    P: Parser<'code>,
{
    TakeUntilParser { terminator }
}
