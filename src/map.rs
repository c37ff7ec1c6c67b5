use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::or::OrExt;
    use crate::text::{alpha, ch, integer};

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Number(i64),
        Special(char),
    }

    #[test]
    fn test_map_integer_to_string() {
        let parser = integer().map(|num| format!("Number: {}", num));

        let (result, cursor) = parser.parse(Cursor::new("123")).unwrap();
        assert_eq!(result, "Number: 123");
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_chaining() {
        let parser = ch('5')
            .map(|c| c.to_digit(10).unwrap_or(0))
            .map(|digit| digit * 2)
            .map(|double| format!("Double: {}", double));

        let (result, _) = parser.parse(Cursor::new("5")).unwrap();
        assert_eq!(result, "Double: 10");
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let parser = alpha()
            .map(Token::Letter)
            .or(integer().map(Token::Number))
            .or(ch('!').map(Token::Special));

        let (token, cursor) = parser.parse(Cursor::new("42")).unwrap();
        assert_eq!(token, Token::Number(42));
        assert!(cursor.eos());

        let (token, _) = parser.parse(Cursor::new("!")).unwrap();
        assert_eq!(token, Token::Special('!'));

        let (token, _) = parser.parse(Cursor::new("x")).unwrap();
        assert_eq!(token, Token::Letter('x'));
    }

    #[test]
    fn test_map_preserves_errors() {
        let parser = ch('A').map(|c| c.to_ascii_lowercase());
        assert!(parser.parse(Cursor::new("xyz")).is_err());
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(ch('9'), |c| c as u32);

        let (value, cursor) = parser.parse(Cursor::new("9")).unwrap();
        assert_eq!(value, 57);
        assert!(cursor.eos());
    }
}
