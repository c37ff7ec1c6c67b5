use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Binary arithmetic operator
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Apply the operator with `lhs` on the left
    ///
    /// Division follows `f64` semantics: dividing by zero yields an infinity
    /// or NaN, never an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One entry of an evaluation trace
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TraceEntry {
    Operand(f64),
    Operator(Op),
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Operand(value) => write!(f, "{}", value),
            TraceEntry::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Callback told about every entry as soon as it is recorded
pub type Echo = Rc<dyn Fn(&TraceEntry)>;

/// Collects the trace produced by grammar actions during one parse
///
/// Actions only get shared access to the recorder, so entries live behind a
/// `RefCell`. A recorder belongs to a single evaluation; [`Recorder::take`]
/// hands the entries over to the reducer and leaves it empty.
#[derive(Default)]
pub struct Recorder {
    entries: RefCell<Vec<TraceEntry>>,
    echo: Option<Echo>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_echo(echo: Echo) -> Self {
        Recorder {
            entries: RefCell::default(),
            echo: Some(echo),
        }
    }

    pub fn push(&self, entry: TraceEntry) {
        tracing::trace!(%entry, "push");
        if let Some(echo) = &self.echo {
            echo(&entry);
        }
        self.entries.borrow_mut().push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Remove and return everything recorded so far
    pub fn take(&self) -> Vec<TraceEntry> {
        self.entries.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_apply_keeps_operand_order() {
        assert_eq!(Op::Sub.apply(12.0, 24.0), -12.0);
        assert_eq!(Op::Div.apply(1.0, 4.0), 0.25);
        assert_eq!(Op::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Op::Mul.apply(2.0, 3.0), 6.0);
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        assert!(Op::Div.apply(1.0, 0.0).is_infinite());
        assert!(Op::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(TraceEntry::Operand(12.0).to_string(), "12");
        assert_eq!(TraceEntry::Operand(2.5).to_string(), "2.5");
        assert_eq!(TraceEntry::Operator(Op::Div).to_string(), "/");
    }

    #[test]
    fn test_recorder_take_empties() {
        let recorder = Recorder::new();
        recorder.push(TraceEntry::Operand(1.0));
        recorder.push(TraceEntry::Operator(Op::Add));
        assert_eq!(recorder.len(), 2);

        let entries = recorder.take();
        assert_eq!(entries, vec![TraceEntry::Operand(1.0), TraceEntry::Operator(Op::Add)]);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_recorder_echo_sees_every_entry() {
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        let recorder = Recorder::with_echo(Rc::new(move |_: &TraceEntry| {
            counter.set(counter.get() + 1)
        }));

        recorder.push(TraceEntry::Operand(1.0));
        recorder.push(TraceEntry::Operand(2.0));
        assert_eq!(seen.get(), 2);
    }
}
