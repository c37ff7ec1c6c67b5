pub mod char;
pub mod class;
pub mod number;
pub mod string;
pub mod whitespace;

pub use char::{any_char, ch, char_range, satisfy};
pub use class::{alnum, alpha, digit, eol};
pub use number::{decimal, integer};
pub use string::string;
pub use whitespace::{lexeme, skip_whitespace, whitespace};
