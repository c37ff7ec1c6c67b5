use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser that consumes and returns any single character
#[derive(Debug, Clone, Copy)]
pub struct AnyCharParser;

impl<'code> Parser<'code> for AnyCharParser {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let c = cursor.value()?;
        Ok((c, cursor.next()))
    }
}

/// Convenience function to create an AnyCharParser
pub fn any_char() -> AnyCharParser {
    AnyCharParser
}

/// Parser that matches a specific character
#[derive(Debug, Clone, Copy)]
pub struct IsCharParser {
    expected: char,
}

impl IsCharParser {
    pub fn new(expected: char) -> Self {
        IsCharParser { expected }
    }
}

impl<'code> Parser<'code> for IsCharParser {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        match cursor.value()? {
            c if c == self.expected => Ok((c, cursor.next())),
            _ => Err(NoMatch),
        }
    }
}

/// Convenience function to create an IsCharParser
pub fn ch(expected: char) -> IsCharParser {
    IsCharParser::new(expected)
}

/// Parser that matches a character within a range (inclusive)
#[derive(Debug, Clone, Copy)]
pub struct CharRangeParser {
    start: char,
    end: char,
}

impl<'code> Parser<'code> for CharRangeParser {
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        match cursor.value()? {
            c if (self.start..=self.end).contains(&c) => Ok((c, cursor.next())),
            _ => Err(NoMatch),
        }
    }
}

/// Convenience function to create a CharRangeParser
pub fn char_range(start: char, end: char) -> CharRangeParser {
    CharRangeParser { start, end }
}

/// Parser that matches one character accepted by a predicate
#[derive(Clone)]
pub struct SatisfyParser<F> {
    predicate: F,
}

impl<'code, F> Parser<'code> for SatisfyParser<F>
where
    F: Fn(&char) -> bool,
{
    type Output = char;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let c = cursor.value()?;
        if (self.predicate)(&c) {
            Ok((c, cursor.next()))
        } else {
            Err(NoMatch)
        }
    }
}

/// Convenience function to create a SatisfyParser
pub fn satisfy<F>(predicate: F) -> SatisfyParser<F>
where
    F: Fn(&char) -> bool,
{
    SatisfyParser { predicate }
}
