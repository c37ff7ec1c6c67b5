use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Length of an optional leading `+` or `-`
fn sign_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    }
}

/// Number of ASCII digits at the start of `bytes`
fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parser for signed integer literals (`42`, `-7`, `+3`)
#[derive(Debug, Clone, Copy)]
pub struct IntParser;

impl<'code> Parser<'code> for IntParser {
    type Output = i64;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let rest = cursor.rest();
        let bytes = rest.as_bytes();

        let sign = sign_len(bytes);
        let digits = digits_len(&bytes[sign..]);
        // A sign without digits is not a number
        if digits == 0 {
            return Err(NoMatch);
        }

        let end = sign + digits;
        let value = rest[..end].parse::<i64>().map_err(|_| NoMatch)?;
        Ok((value, cursor.advance(end)))
    }
}

/// Parser that matches ASCII integer numbers (positive or negative)
pub fn integer() -> IntParser {
    IntParser
}

/// Parser for signed decimal literals (`12`, `-4.25`, `.5`)
///
/// The decimal point is only consumed when a digit follows it, so at most one
/// point is ever part of a literal.
#[derive(Debug, Clone, Copy)]
pub struct DecimalParser;

impl<'code> Parser<'code> for DecimalParser {
    type Output = f64;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let rest = cursor.rest();
        let bytes = rest.as_bytes();

        let sign = sign_len(bytes);
        let whole = digits_len(&bytes[sign..]);
        let mut end = sign + whole;

        let mut fraction = 0;
        if bytes.get(end) == Some(&b'.') {
            fraction = digits_len(&bytes[end + 1..]);
            if fraction > 0 {
                end += 1 + fraction;
            }
        }

        if whole + fraction == 0 {
            return Err(NoMatch);
        }

        let value = rest[..end].parse::<f64>().map_err(|_| NoMatch)?;
        Ok((value, cursor.advance(end)))
    }
}

/// Parser that matches ASCII decimal numbers, with or without a fraction
pub fn decimal() -> DecimalParser {
    DecimalParser
}
