use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::exclude::Exclude;
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, then `content` over everything up to the first place where
/// `close` matches, then `close` itself. Only the content value is returned.
/// The content may not run past the first closing delimiter, so it does not
/// nest; use [`crate::balanced::balanced_with`] for nested delimiters.
///
/// # Examples
/// - `"[42.5]"` → `42.5`
/// - `"/* note */"` → `" note "`
pub struct Between<O, C, E> {
    open: O,
    body: Exclude<C, E>,
    close: E,
}

impl<'code, O, C, E> Parser<'code> for Between<O, C, E>
where
    O: Parser<'code>,
    C: Parser<'code>,
    E: Parser<'code>,
{
    type Output = C::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.body.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, O, C, E>(open: O, content: C, close: E) -> Between<O, C, E>
where
    O: Parser<'code>,
    C: Parser<'code>,
    E: Parser<'code> + Clone,
{
    Between {
        open,
        body: Exclude::new(content, close.clone()),
        close,
    }
}
