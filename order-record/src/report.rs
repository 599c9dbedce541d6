use log::debug;

use crate::{reader::is_line_terminator, Error, ParseError};

/// Turns the first failure of a parse into a diagnostic with the unconsumed remainder of
/// the input and the line/column of the failure.
pub struct ErrorReporter<'a> {
    input: &'a str,
}

impl<'a> ErrorReporter<'a> {
    /// Creates a new reporter for the given input.
    ///
    /// # Arguments
    /// * `input` - The complete input of the failed parse.
    pub fn new(input: &'a str) -> Self {
        ErrorReporter { input }
    }

    /// Creates the diagnostic for the given error.
    ///
    /// # Arguments
    /// * `error` - The error that stopped the parse.
    pub fn report(&self, error: Error) -> ParseError {
        let end = self.input.len();
        let position = error.get_position().unwrap_or(end).min(end);
        let (line, column) = self.locate(position);
        let remainder = self.input[position..end].to_owned();

        debug!(
            "Parsing failed at {}:{} (offset {} of {}): {}",
            line, column, position, end, error
        );

        ParseError::new(error, position, end, line, column, remainder)
    }

    /// Returns the 1-based line and column of the given byte offset. Lines end with the same
    /// terminators that end comments, `\r\n` counting as a single one.
    fn locate(&self, position: usize) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        let mut chars = self.input[..position].chars().peekable();

        while let Some(ch) = chars.next() {
            if !is_line_terminator(ch) {
                column += 1;
            } else if ch != '\r' || chars.peek() != Some(&'\n') {
                line += 1;
                column = 1;
            }
        }

        (line, column)
    }
}
