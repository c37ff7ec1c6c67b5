use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::parser::Parser;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Slot<'code, O> = RefCell<Option<Rc<dyn Parser<'code, Output = O> + 'code>>>;

/// A named grammar rule whose definition is bound after construction
///
/// Rules make recursive grammars possible: create every rule first, hand out
/// [`RuleRef`] handles with [`Rule::reference`], then [`Rule::define`] each
/// rule in terms of the others. A handle resolves the definition each time it
/// parses, so it sees whatever the rule is defined as at that moment.
///
/// The rule owns its definition; handles do not. A handle to a rule that has
/// been dropped, or not yet defined, fails with `NoMatch`.
///
/// Example:
/// ```
/// use tinyspirit::and::AndExt;
/// use tinyspirit::optional::OptionalExt;
/// use tinyspirit::text::ch;
/// use tinyspirit::void::VoidExt;
/// use tinyspirit::{Cursor, Parser, Rule};
///
/// // nested := '(' nested? ')'
/// let nested = Rule::new("nested");
/// nested.define(ch('(').and(nested.reference().optional()).and(ch(')')).void());
///
/// let (_, cursor) = nested.parse(Cursor::new("(())")).unwrap();
/// assert!(cursor.eos());
/// ```
pub struct Rule<'code, O> {
    name: &'static str,
    slot: Rc<Slot<'code, O>>,
}

impl<'code, O> Rule<'code, O> {
    pub fn new(name: &'static str) -> Self {
        Rule {
            name,
            slot: Rc::new(RefCell::new(None)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Bind (or rebind) the rule's definition
    pub fn define<P>(&self, parser: P)
    where
        P: Parser<'code, Output = O> + 'code,
    {
        *self.slot.borrow_mut() = Some(Rc::new(parser));
    }

    pub fn is_defined(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// A non-owning handle that forwards to this rule at parse time
    pub fn reference(&self) -> RuleRef<'code, O> {
        RuleRef {
            name: self.name,
            slot: Rc::downgrade(&self.slot),
        }
    }
}

impl<'code, O> Parser<'code> for Rule<'code, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        forward(self.name, &self.slot, cursor)
    }
}

/// Deferred reference to a [`Rule`]
pub struct RuleRef<'code, O> {
    name: &'static str,
    slot: Weak<Slot<'code, O>>,
}

impl<O> Clone for RuleRef<'_, O> {
    fn clone(&self) -> Self {
        RuleRef {
            name: self.name,
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<'code, O> Parser<'code> for RuleRef<'code, O> {
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let Some(slot) = self.slot.upgrade() else {
            tracing::trace!(rule = self.name, "reference to dropped rule");
            return Err(NoMatch);
        };
        forward(self.name, &slot, cursor)
    }
}

fn forward<'code, O>(
    name: &'static str,
    slot: &Slot<'code, O>,
    cursor: Cursor<'code>,
) -> Result<(O, Cursor<'code>), NoMatch> {
    let Some(parser) = slot.borrow().clone() else {
        tracing::trace!(rule = name, "rule used before definition");
        return Err(NoMatch);
    };

    tracing::trace!(rule = name, position = cursor.position(), "enter");
    let result = parser.parse(cursor);
    if let Ok((_, next)) = &result {
        tracing::trace!(rule = name, end = next.position(), "matched");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::many::ManyExt;
    use crate::optional::OptionalExt;
    use crate::or::OrExt;
    use crate::text::{ch, integer};
    use crate::void::VoidExt;

    #[test]
    fn test_undefined_rule_fails() {
        let rule: Rule<'_, ()> = Rule::new("empty");
        assert!(!rule.is_defined());
        assert!(rule.parse(Cursor::new("abc")).is_err());
        assert!(rule.reference().parse(Cursor::new("abc")).is_err());
    }

    #[test]
    fn test_reference_resolves_at_parse_time() {
        let rule = Rule::new("digit_or_x");
        let handle = rule.reference();

        rule.define(ch('x'));
        assert!(handle.parse(Cursor::new("x")).is_ok());

        rule.define(ch('y'));
        assert!(handle.parse(Cursor::new("x")).is_err());
        assert!(handle.parse(Cursor::new("y")).is_ok());
        assert_eq!(rule.name(), "digit_or_x");
    }

    #[test]
    fn test_reference_to_dropped_rule_fails() {
        let handle = {
            let rule = Rule::new("short_lived");
            rule.define(ch('a'));
            rule.reference()
        };
        assert!(handle.parse(Cursor::new("a")).is_err());
    }

    #[test]
    fn test_mutually_recursive_rules() {
        // list := '[' items? ']' ; items := item (',' item)* ; item := integer | list
        let list = Rule::new("list");
        let item = Rule::new("item");

        item.define(integer().void().or(list.reference()));
        let items = item
            .reference()
            .and(ch(',').and(item.reference()).many().optional())
            .void();
        list.define(ch('[').and(items).and(ch(']')).void());

        let (_, cursor) = list.parse(Cursor::new("[1,[2,[3]],4]")).unwrap();
        assert!(cursor.eos());
        assert!(list.parse(Cursor::new("[1,[2,4]")).is_err());
    }
}
