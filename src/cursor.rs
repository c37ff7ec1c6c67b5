use crate::error::NoMatch;

/// Read-only window over the remaining input
///
/// A cursor is `Copy`: combinators backtrack by keeping their own copy and only
/// hand back an advanced cursor on success. Positions are byte offsets into
/// `data` and always sit on a `char` boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cursor<'code> {
    /// Cursor pointing at a valid character
    Valid {
        data: &'code str,
        /// Byte position in `data` (0-based)
        position: usize,
    },
    /// Cursor past the last character - nothing left to read
    EndOfInput { data: &'code str },
}

impl<'code> Cursor<'code> {
    pub fn new(data: &'code str) -> Self {
        Self::at(data, 0)
    }

    fn at(data: &'code str, position: usize) -> Self {
        let position = ceil_boundary(data, position);
        if position >= data.len() {
            Cursor::EndOfInput { data }
        } else {
            Cursor::Valid { data, position }
        }
    }

    /// Get the character at the current position
    pub fn value(&self) -> Result<char, NoMatch> {
        self.rest().chars().next().ok_or(NoMatch)
    }

    /// Advance past the current character
    ///
    /// At end of input the cursor stays where it is.
    pub fn next(self) -> Self {
        match self {
            Cursor::Valid { data, position } => {
                let width = data[position..].chars().next().map_or(1, char::len_utf8);
                Self::at(data, position + width)
            }
            Cursor::EndOfInput { .. } => self,
        }
    }

    /// Advance by `len` bytes
    ///
    /// An offset inside a multi-byte character moves on to the end of that
    /// character.
    pub fn advance(self, len: usize) -> Self {
        let (data, position) = self.inner();
        Self::at(data, position + len)
    }

    pub fn position(&self) -> usize {
        match self {
            Cursor::Valid { position, .. } => *position,
            Cursor::EndOfInput { data } => data.len(),
        }
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        matches!(self, Cursor::EndOfInput { .. })
    }

    pub fn source(&self) -> &'code str {
        match self {
            Cursor::Valid { data, .. } => data,
            Cursor::EndOfInput { data } => data,
        }
    }

    /// Everything from the current position to the end of the input
    pub fn rest(&self) -> &'code str {
        match self {
            Cursor::Valid { data, position } => &data[*position..],
            Cursor::EndOfInput { .. } => "",
        }
    }

    /// Consume the cursor and return its source and current position
    pub fn inner(self) -> (&'code str, usize) {
        match self {
            Cursor::Valid { data, position } => (data, position),
            Cursor::EndOfInput { data } => (data, data.len()),
        }
    }

    /// Text consumed between this cursor and a later cursor over the same source
    pub fn span_to(&self, later: &Cursor<'code>) -> &'code str {
        self.source()
            .get(self.position()..later.position())
            .unwrap_or("")
    }

    /// Restrict the input so it ends at byte `end`
    ///
    /// Positions are unchanged, so a cursor produced by parsing the limited
    /// input can be moved back onto the full source with [`Cursor::rebase`].
    pub fn limit(self, end: usize) -> Self {
        let (data, position) = self.inner();
        let end = ceil_boundary(data, end.clamp(position, data.len()));
        Self::at(&data[..end], position)
    }

    /// Move this cursor's position onto the source of `outer`
    pub fn rebase(self, outer: Cursor<'code>) -> Self {
        Self::at(outer.source(), self.position())
    }
}

/// Smallest `char` boundary of `data` at or after `index`, capped at its length
fn ceil_boundary(data: &str, index: usize) -> usize {
    (index..data.len())
        .find(|&i| data.is_char_boundary(i))
        .unwrap_or(data.len())
}
