/// A cursor for byte-by-byte inline scanning over one line.
///
/// All delimiters the scanner looks for are ASCII, so positions where a
/// construct starts or ends are always char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `offset` bytes ahead of the current position.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + offset).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes, stopping at end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Advances past one whole UTF-8 character.
    pub fn bump_char(&mut self) {
        let width = self
            .s
            .get(self.i..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, char::len_utf8);
        self.bump_n(width);
    }

    /// Moves to the next occurrence of `needle` at or after the current
    /// position. Leaves the cursor untouched and returns false if there is none.
    pub fn advance_to(&mut self, needle: u8) -> bool {
        match self.s.as_bytes()[self.i.min(self.s.len())..]
            .iter()
            .position(|&b| b == needle)
        {
            Some(offset) => {
                self.i += offset;
                true
            }
            None => false,
        }
    }
}
