use super::char::ch;
use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::or::OrExt;
use crate::parser::Parser;

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace<'code>() -> impl Parser<'code, Output = char> {
    ch(' ').or(ch('\t')).or(ch('\n')).or(ch('\r'))
}

/// Parser that skips any run of ASCII whitespace, including none
///
/// Always succeeds, also at end of input.
#[derive(Debug, Clone, Copy)]
pub struct SkipWhitespace;

impl<'code> Parser<'code> for SkipWhitespace {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let rest = cursor.rest();
        let skipped = rest.len() - rest.trim_start_matches([' ', '\t', '\n', '\r']).len();
        Ok(((), cursor.advance(skipped)))
    }
}

pub fn skip_whitespace() -> SkipWhitespace {
    SkipWhitespace
}

/// A token followed by any trailing whitespace
#[derive(Clone)]
pub struct Lexeme<P> {
    parser: P,
}

impl<'code, P> Parser<'code> for Lexeme<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let ((), cursor) = SkipWhitespace.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Wrap a token parser so it also consumes the whitespace after it
pub fn lexeme<P>(parser: P) -> Lexeme<P> {
    Lexeme { parser }
}
