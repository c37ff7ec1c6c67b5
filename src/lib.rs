//! # TinySpirit - Parser Combinator Library
//!
//! A small parser combinator library over UTF-8 text, with semantic actions and
//! late-bound rules for recursive grammars.
//!
//! Parsers are plain values implementing [`Parser`]. They are combined by
//! value into larger parsers and never change after construction. The
//! library emphasizes:
//!
//! - **Consumption-free failure**: a parser that fails hands back nothing but
//!   [`NoMatch`]; the caller still holds its own, un-advanced [`Cursor`]
//! - **Actions**: callbacks attached to any parser run once per successful match
//! - **Recursion**: [`Rule`] and [`lazy::lazy`] let rules refer to rules that
//!   are not defined yet
//! - **Zero panics**: all parsing outcomes are reported through `Result`
//!
//! Example:
//! ```
//! use tinyspirit::action::ActionExt;
//! use tinyspirit::list::list;
//! use tinyspirit::text::{ch, integer};
//! use tinyspirit::{Cursor, Parser};
//! use std::cell::Cell;
//!
//! let sum = Cell::new(0);
//! let numbers = list(integer().action(|n| sum.set(sum.get() + n)), ch(','));
//!
//! let (values, cursor) = numbers.parse(Cursor::new("1,2,39")).unwrap();
//! assert_eq!(values, vec![1, 2, 39]);
//! assert_eq!(sum.get(), 42);
//! assert!(cursor.eos());
//! ```

pub mod action;
pub mod and;
pub mod balanced;
pub mod between;
pub mod calc;
pub mod cursor;
pub mod error;
pub mod exclude;
pub mod lazy;
pub mod list;
pub mod many;
pub mod many1;
pub mod map;
pub mod maybe;
pub mod optional;
pub mod or;
pub mod parser;
pub mod repeat;
pub mod rule;
pub mod take_until;
pub mod text;
pub mod void;

pub use action::{ActionExt, action};
pub use and::{AndExt, and};
pub use balanced::{balanced, balanced_with};
pub use between::between;
pub use cursor::Cursor;
pub use error::NoMatch;
pub use exclude::{ExcludeExt, exclude};
pub use lazy::lazy;
pub use list::list;
pub use many::{ManyExt, many};
pub use many1::many1;
pub use map::{MapExt, map};
pub use maybe::{MaybeExt, maybe};
pub use optional::{OptionalExt, optional};
pub use or::{OrExt, or};
pub use parser::{BoxedExt, BoxedParser, Parser};
pub use repeat::repeat;
pub use rule::{Rule, RuleRef};
pub use take_until::take_until;
pub use void::{VoidExt, void};
