use super::trace::{Op, Recorder, TraceEntry};
use crate::action::ActionExt;
use crate::and::AndExt;
use crate::balanced::balanced_with;
use crate::cursor::Cursor;
use crate::error::NoMatch;
use crate::many::ManyExt;
use crate::optional::OptionalExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::rule::{Rule, RuleRef};
use crate::text::{ch, decimal, lexeme, skip_whitespace};
use crate::void::VoidExt;

/// Arithmetic grammar whose actions record a postfix trace
///
/// ```text
/// expression := term   ( '+' term | '-' term )*
/// term       := factor ( '*' factor | '/' factor )*
/// factor     := decimal | '(' expression ')'
/// ```
///
/// Every token swallows the whitespace after it, and the grammar as a whole
/// skips leading whitespace. Each literal is recorded when it matches and each
/// operator once its right-hand operand has matched, so a successful parse
/// leaves the expression in postfix order in the [`Recorder`].
///
/// The grammar owns its rules; dropping it releases every definition.
pub struct Grammar<'code> {
    expression: Rule<'code, ()>,
    term: Rule<'code, ()>,
    factor: Rule<'code, ()>,
}

impl<'code> Grammar<'code> {
    pub fn new(recorder: &'code Recorder) -> Self {
        let expression = Rule::new("expression");
        let term = Rule::new("term");
        let factor = Rule::new("factor");

        let additive = infix(recorder, Op::Add, term.reference())
            .or(infix(recorder, Op::Sub, term.reference()))
            .many()
            .optional();
        expression.define(term.reference().and(additive).void());

        let multiplicative = infix(recorder, Op::Mul, factor.reference())
            .or(infix(recorder, Op::Div, factor.reference()))
            .many()
            .optional();
        term.define(factor.reference().and(multiplicative).void());

        let literal = lexeme(decimal())
            .action(move |value: &f64| recorder.push(TraceEntry::Operand(*value)))
            .void();
        let group = balanced_with(lexeme(ch('(')), expression.reference(), lexeme(ch(')')));
        factor.define(literal.or(group));

        Grammar {
            expression,
            term,
            factor,
        }
    }

    pub fn expression(&self) -> &Rule<'code, ()> {
        &self.expression
    }

    pub fn term(&self) -> &Rule<'code, ()> {
        &self.term
    }

    pub fn factor(&self) -> &Rule<'code, ()> {
        &self.factor
    }
}

impl<'code> Parser<'code> for Grammar<'code> {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code>) -> Result<(Self::Output, Cursor<'code>), NoMatch> {
        let ((), cursor) = skip_whitespace().parse(cursor)?;
        self.expression.parse(cursor)
    }
}

/// `<op> operand`, recording the operator after the operand has been recorded
fn infix<'code>(
    recorder: &'code Recorder,
    op: Op,
    operand: RuleRef<'code, ()>,
) -> impl Parser<'code, Output = ()> + 'code {
    lexeme(ch(op.symbol()))
        .and(operand)
        .void()
        .on_match(move || recorder.push(TraceEntry::Operator(op)))
}
