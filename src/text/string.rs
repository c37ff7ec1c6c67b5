use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact string, byte for byte
#[derive(Debug, Clone)]
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for IsStringParser {
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let rest = cursor.rest();
        if !rest.starts_with(self.expected.as_ref()) {
            return Err(NoMatch);
        }

        let len = self.expected.len();
        Ok((&rest[..len], cursor.advance(len)))
    }
}

/// Convenience function to create an IsStringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}
