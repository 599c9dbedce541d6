use log::trace;

use super::parser::Parser;

use crate::{Error, Result};

const EXPECTED: &str = "quoted string";

impl<'a> Parser<'a> {
    /// Reads a non-empty quoted string and returns its content without the delimiters.
    ///
    /// Comments are not recognized between the delimiters. All failures are reported at
    /// the position of the opening delimiter.
    pub fn read_quoted_string(&mut self) -> Result<&'a str> {
        self.skip_whitespace_tokens();

        let start = self.get_position();
        if !self.reader.next_if_eq(self.quote) {
            return Err(self.unexpected(EXPECTED, start));
        }

        let quote = self.quote;
        let content = self.read_string(|ch| ch != quote);

        if !self.reader.next_if_eq(quote) {
            return Err(Error::UnexpectedEndOfInput {
                expected: EXPECTED.to_string(),
                position: start,
            });
        }

        if content.is_empty() {
            return Err(Error::UnexpectedToken {
                expected: EXPECTED.to_string(),
                position: start,
            });
        }

        trace!("{} = {:?} at {}", EXPECTED, content, start);

        Ok(content)
    }
}
