/// A cursor for character-by-character parsing of one line of markup.
///
/// Byte-indexed into the line, but all advancing operations are `char`-aware
/// because indent and word boundaries include full-width spaces.
///
/// Backtracking works by cloning the cursor before a speculative parse and
/// restoring the clone on failure.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Current byte position, used for error reporting.
    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s[self.i..].starts_with(pat)
    }

    /// Advances by one character, returning the consumed character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances past `pat`. The caller has already checked [`starts_with`].
    ///
    /// [`starts_with`]: Cursor::starts_with
    pub fn bump_str(&mut self, pat: &str) {
        debug_assert!(self.starts_with(pat));
        self.i += pat.len();
    }

    /// Consumes characters while `f` holds, returning the consumed slice.
    pub fn take_while(&mut self, f: impl Fn(char) -> bool) -> &'a str {
        let start = self.i;
        while let Some(c) = self.peek() {
            if !f(c) {
                break;
            }
            self.i += c.len_utf8();
        }
        &self.s[start..self.i]
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }
}
