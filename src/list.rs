use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses one item, followed by zero or more occurrences of
/// (separator + item), and returns all items.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"1;2;3"` with separator `;` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one element
/// - A trailing separator is left unconsumed
/// - Does not handle whitespace automatically
pub struct List<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> List<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        List { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for List<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        let mut results = vec![first_value];

        loop {
            let Ok((_, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            let Ok((value, next_cursor)) = self.parser.parse(after_separator) else {
                break;
            };
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn list<'code, P, PS>(parser: P, separator: PS) -> List<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    List::new(parser, separator)
}
