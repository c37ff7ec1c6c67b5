use super::char::{ch, satisfy};
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;

/// Parser that matches one ASCII letter
pub fn alpha<'code>() -> impl Parser<'code, Output = char> {
    satisfy(char::is_ascii_alphabetic)
}

/// Parser that matches one ASCII letter or digit
pub fn alnum<'code>() -> impl Parser<'code, Output = char> {
    satisfy(char::is_ascii_alphanumeric)
}

/// Parser that matches one ASCII digit and returns its numeric value
pub fn digit<'code>() -> impl Parser<'code, Output = u32> {
    satisfy(char::is_ascii_digit).map(|c| c as u32 - '0' as u32)
}

/// Parser that matches a line feed or a carriage return
pub fn eol<'code>() -> impl Parser<'code, Output = char> {
    ch('\n').or(ch('\r'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_alpha() {
        for letter in ('a'..='z').chain('A'..='Z') {
            let input = letter.to_string();
            let (c, cursor) = alpha().parse(Cursor::new(&input)).unwrap();
            assert_eq!(c, letter, "Failed for letter: {}", letter);
            assert!(cursor.eos());
        }

        for input in ["0", "_", " ", "é", ""] {
            assert!(alpha().parse(Cursor::new(input)).is_err(), "Accepted: {:?}", input);
        }
    }

    #[test]
    fn test_alnum() {
        let (c, cursor) = alnum().parse(Cursor::new("7a")).unwrap();
        assert_eq!(c, '7');
        let (c, _) = alnum().parse(cursor).unwrap();
        assert_eq!(c, 'a');

        assert!(alnum().parse(Cursor::new("-")).is_err());
    }

    #[test]
    fn test_digit_value() {
        let (d, cursor) = digit().parse(Cursor::new("9x")).unwrap();
        assert_eq!(d, 9);
        assert_eq!(cursor.value().unwrap(), 'x');

        let (d, _) = digit().parse(Cursor::new("0")).unwrap();
        assert_eq!(d, 0);

        assert!(digit().parse(Cursor::new("a1")).is_err());
    }

    #[test]
    fn test_eol() {
        let (c, _) = eol().parse(Cursor::new("\nabc")).unwrap();
        assert_eq!(c, '\n');

        let (c, cursor) = eol().parse(Cursor::new("\r\n")).unwrap();
        assert_eq!(c, '\r');
        assert_eq!(cursor.value().unwrap(), '\n');

        assert!(eol().parse(Cursor::new(" \n")).is_err());
    }
}
