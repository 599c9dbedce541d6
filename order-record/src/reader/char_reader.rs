/// A character reader over an in-memory input that keeps track of its byte offset.
///
/// The reader is `Copy`, so a lookahead is just a copy that is written back once the
/// scanned token is accepted.
#[derive(Clone, Copy, Debug)]
pub struct CharReader<'a> {
    /// The complete input.
    input: &'a str,

    /// The byte offset of the next character.
    pos: usize,
}

impl<'a> CharReader<'a> {
    /// Creates a new character reader positioned at the start of the input.
    ///
    /// # Arguments
    /// * `input` - The input to read from.
    pub fn new(input: &'a str) -> Self {
        CharReader { input, pos: 0 }
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Returns the byte offset of the next character.
    pub fn get_position(&self) -> usize {
        self.pos
    }

    /// Returns the complete input.
    pub fn get_input(&self) -> &'a str {
        self.input
    }

    /// Returns the input that has not been consumed yet.
    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the input between the given offset and the current position.
    ///
    /// # Arguments
    /// * `start` - A previous position of this reader.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consumes the next character if it is equal to the given one.
    ///
    /// # Arguments
    /// * `expected` - The character to check for.
    pub fn next_if_eq(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.pos += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consumes characters as long as the predicate is true and returns the number of
    /// consumed characters.
    ///
    /// # Arguments
    /// * `predicate` - The predicate to check for.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let mut count: usize = 0;

        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }

            self.pos += ch.len_utf8();
            count += 1;
        }

        count
    }
}

impl Iterator for CharReader<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();

        Some(ch)
    }
}
