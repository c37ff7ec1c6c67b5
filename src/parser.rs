use crate::cursor::Cursor;
use crate::error::NoMatch;
use std::rc::Rc;

/// Core parser trait for parser combinators
///
/// Value parsers carry a typed `Output`; flag parsers use `Output = ()`.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the advanced cursor on success, or
    /// `Err(NoMatch)` if the parse fails. The caller keeps its own copy of the
    /// cursor, so a failure never consumes input.
    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch>;
}

/// Type-erased parser
pub type BoxedParser<'code, O> = Box<dyn Parser<'code, Output = O> + 'code>;

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Rc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        (**self).parse(cursor)
    }
}

/// Extension trait to erase a parser's concrete type
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}
