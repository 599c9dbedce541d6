use log::trace;

use super::{char_reader::CharReader, skipper::Skipper};

use crate::{Error, Result, Syntax};

/// A parser that provides the token level operations of the record grammar, i.e.,
/// skipping, reading numbers and reading strings.
///
/// Every token read skips white space and comments in front of the token first.
pub struct Parser<'a> {
    /// The reader positioned at the next unconsumed character.
    pub(super) reader: CharReader<'a>,

    pub(super) skipper: Skipper,

    /// The delimiter of quoted strings.
    pub(super) quote: char,
}

impl<'a> Parser<'a> {
    /// Creates a new parser positioned at the start of the given input.
    ///
    /// # Arguments
    /// * `input` - The input to parse.
    /// * `syntax` - The reserved characters of the format.
    pub fn new(input: &'a str, syntax: &Syntax) -> Self {
        Parser {
            reader: CharReader::new(input),
            skipper: Skipper::new(syntax.get_comment_marker()),
            quote: syntax.get_quote(),
        }
    }

    /// Skips white space and comments.
    pub fn skip_whitespace_tokens(&mut self) {
        self.skipper.skip(&mut self.reader);
    }

    /// Returns the byte offset of the next unconsumed character.
    pub fn get_position(&self) -> usize {
        self.reader.get_position()
    }

    /// Returns the number of unconsumed bytes.
    pub fn remaining_len(&self) -> usize {
        self.reader.remainder().len()
    }

    /// Reads as long as the predicate is true and returns the read string. Does not skip
    /// anything.
    ///
    /// # Arguments
    /// * `predicate` - The predicate to check for.
    pub fn read_string(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.reader.get_position();
        self.reader.advance_while(predicate);
        self.reader.slice_from(start)
    }

    /// Creates the error for a token that could not be read at the given position. Running
    /// into the end of the input, or into an unterminated comment that ends the input, is
    /// reported as end of input, anything else as unexpected token.
    ///
    /// # Arguments
    /// * `expected` - The description of the expected token.
    /// * `position` - The position at which the token was expected.
    pub fn unexpected(&self, expected: &str, position: usize) -> Error {
        let rest = &self.reader.get_input()[position..];
        if rest.is_empty() || self.skipper.is_unterminated_comment(rest) {
            Error::UnexpectedEndOfInput {
                expected: expected.to_string(),
                position,
            }
        } else {
            Error::UnexpectedToken {
                expected: expected.to_string(),
                position,
            }
        }
    }

    /// Reads an unsigned 32-bit integer.
    ///
    /// # Arguments
    /// * `expected` - The name of the value, used for error reporting.
    pub fn read_u32(&mut self, expected: &str) -> Result<u32> {
        self.skip_whitespace_tokens();

        let start = self.get_position();
        let digits = self.read_string(|ch| ch.is_ascii_digit());
        if digits.is_empty() {
            return Err(self.unexpected(expected, start));
        }

        let value: u32 = digits.parse().map_err(|_| Error::UnexpectedToken {
            expected: expected.to_string(),
            position: start,
        })?;
        trace!("{} = {} at {}", expected, value, start);

        Ok(value)
    }

    /// Reads a signed floating point number. The fractional part and the exponent are
    /// optional, but at least one digit is required.
    ///
    /// # Arguments
    /// * `expected` - The name of the value, used for error reporting.
    pub fn read_f64(&mut self, expected: &str) -> Result<f64> {
        self.skip_whitespace_tokens();

        let start = self.get_position();
        let mut lookahead = self.reader;

        if !lookahead.next_if_eq('-') {
            lookahead.next_if_eq('+');
        }

        let mut num_digits = lookahead.advance_while(|ch| ch.is_ascii_digit());
        if lookahead.next_if_eq('.') {
            num_digits += lookahead.advance_while(|ch| ch.is_ascii_digit());
        }

        if num_digits == 0 {
            return Err(self.unexpected(expected, start));
        }

        // the exponent only belongs to the number if it has digits
        let mut exponent = lookahead;
        if exponent.next_if_eq('e') || exponent.next_if_eq('E') {
            if !exponent.next_if_eq('-') {
                exponent.next_if_eq('+');
            }

            if exponent.advance_while(|ch| ch.is_ascii_digit()) > 0 {
                lookahead = exponent;
            }
        }

        let text = lookahead.slice_from(start);
        let value: f64 = text.parse().map_err(|_| Error::UnexpectedToken {
            expected: expected.to_string(),
            position: start,
        })?;
        self.reader = lookahead;
        trace!("{} = {} at {}", expected, value, start);

        Ok(value)
    }

    /// Returns the position of the first character at or after the current position that is
    /// neither white space nor a comment, or none if there is no such character.
    pub fn find_trailing_input(&self) -> Option<usize> {
        let mut lookahead = self.reader;
        self.skipper.skip(&mut lookahead);

        if lookahead.is_at_end() {
            None
        } else {
            Some(lookahead.get_position())
        }
    }
}
