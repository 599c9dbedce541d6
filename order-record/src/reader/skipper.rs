use super::char_reader::CharReader;

/// Skips white space and line comments between tokens.
///
/// A comment starts with the comment marker and runs through the next line terminator,
/// which is consumed as well. A marker without a terminator before the end of the input
/// does not start a comment and is left in place.
#[derive(Clone, Copy, Debug)]
pub struct Skipper {
    comment_marker: char,
}

impl Skipper {
    /// Creates a new skipper.
    ///
    /// # Arguments
    /// * `comment_marker` - The character starting a line comment.
    pub fn new(comment_marker: char) -> Self {
        Skipper { comment_marker }
    }

    /// Advances the reader past any white space and comments.
    ///
    /// # Arguments
    /// * `reader` - The reader to advance.
    pub fn skip(&self, reader: &mut CharReader) {
        loop {
            match reader.peek() {
                Some(ch) if ch.is_whitespace() => {
                    reader.advance_while(char::is_whitespace);
                }
                Some(ch) if ch == self.comment_marker => {
                    if !Self::skip_comment(reader) {
                        return;
                    }
                }
                _ => return,
            }
        }
    }

    /// Returns true if the text is a comment without a line terminator, i.e., a comment that
    /// runs into the end of the input.
    ///
    /// # Arguments
    /// * `text` - The rest of the input.
    pub fn is_unterminated_comment(&self, text: &str) -> bool {
        let mut chars = text.chars();
        chars.next() == Some(self.comment_marker) && !chars.any(is_line_terminator)
    }

    /// Skips a comment including its line terminator. Returns false and leaves the reader
    /// untouched if the comment is not terminated.
    fn skip_comment(reader: &mut CharReader) -> bool {
        let mut lookahead = *reader;
        lookahead.next();
        lookahead.advance_while(|ch| !is_line_terminator(ch));

        if lookahead.is_at_end() {
            return false;
        }

        lookahead.next();
        *reader = lookahead;

        true
    }
}

pub(crate) fn is_line_terminator(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}
