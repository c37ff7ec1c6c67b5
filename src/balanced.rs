use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;

/// Cursors delimiting one balanced span
struct Span<'code> {
    after_open: Cursor<'code>,
    before_close: Cursor<'code>,
    after_close: Cursor<'code>,
}

/// Nesting-aware scan from an opening token to its matching closing token
///
/// Every further `open` raises the depth and every `close` lowers it. At each
/// step `close` is tried first, so identical open and close tokens pair up
/// with the nearest occurrence.
fn scan<'code, O, C>(open: &O, close: &C, cursor: Cursor<'code>) -> Result<Span<'code>, NoMatch>
where
    O: Parser<'code>,
    C: Parser<'code>,
{
    let (_, after_open) = open.parse(cursor)?;
    let mut depth = 1usize;
    let mut current = after_open;

    while !current.eos() {
        if let Ok((_, next)) = close.parse(current) {
            depth -= 1;
            if depth == 0 {
                return Ok(Span {
                    after_open,
                    before_close: current,
                    after_close: next,
                });
            }
            current = next;
        } else if let Ok((_, next)) = open.parse(current) {
            depth += 1;
            current = if next.position() > current.position() {
                next
            } else {
                current.next()
            };
        } else {
            current = current.next();
        }
    }

    Err(NoMatch)
}

/// Parser that captures a balanced span, delimiters included
///
/// # Examples
/// - `[` / `]` on `"[1,[2,3],4] tail"` → `"[1,[2,3],4]"`
/// - `<` / `>` on `"<a <b>"` → fails, the outer `<` is never closed
pub struct Balanced<O, C> {
    open: O,
    close: C,
}

impl<'code, O, C> Parser<'code> for Balanced<O, C>
where
    O: Parser<'code>,
    C: Parser<'code>,
{
    type Output = &'code str;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let span = scan(&self.open, &self.close, cursor)?;
        Ok((cursor.span_to(&span.after_close), span.after_close))
    }
}

/// Creates a parser that captures everything from `open` to its matching `close`
pub fn balanced<'code, O, C>(open: O, close: C) -> Balanced<O, C>
where
    O: Parser<'code>,
    C: Parser<'code>,
{
    Balanced { open, close }
}

/// Parser that matches a balanced span and parses its interior with a grammar
///
/// The interior (between the delimiters) must be consumed completely by
/// `inner`. The whole span, delimiters included, is consumed and the output of
/// `inner` is returned. Because the closing delimiter is found by nesting depth
/// rather than first occurrence, `inner` may itself contain delimited
/// sub-expressions.
pub struct BalancedWith<O, P, C> {
    open: O,
    inner: P,
    close: C,
}

impl<'code, O, P, C> Parser<'code> for BalancedWith<O, P, C>
where
    O: Parser<'code>,
    P: Parser<'code>,
    C: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let span = scan(&self.open, &self.close, cursor)?;

        let interior = span.after_open.limit(span.before_close.position());
        let (value, rest) = self.inner.parse(interior)?;
        if !rest.eos() {
            return Err(NoMatch);
        }

        Ok((value, span.after_close))
    }
}

/// Creates a parser for `open inner close` where `inner` may nest
pub fn balanced_with<'code, O, P, C>(open: O, inner: P, close: C) -> BalancedWith<O, P, C>
where
    O: Parser<'code>,
    P: Parser<'code>,
    C: Parser<'code>,
{
    BalancedWith { open, inner, close }
}
