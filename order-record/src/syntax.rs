use crate::{Error, Result};

/// The reserved characters of the record format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Syntax {
    /// Starts a comment that runs through the end of the line.
    comment_marker: char,

    /// Opens and closes the name literal.
    quote: char,
}

impl Syntax {
    /// Creates a new syntax with the given reserved characters.
    ///
    /// Fails if the characters are equal, if either of them is white space, or if the
    /// comment marker could start a number.
    ///
    /// # Arguments
    /// * `comment_marker` - The character starting a line comment.
    /// * `quote` - The delimiter of quoted strings.
    pub fn new(comment_marker: char, quote: char) -> Result<Syntax> {
        let reason = if comment_marker == quote {
            Some("comment marker and quote are the same character")
        } else if comment_marker.is_whitespace() {
            Some("comment marker is white space")
        } else if quote.is_whitespace() {
            Some("quote is white space")
        } else if comment_marker.is_ascii_digit() || "+-.".contains(comment_marker) {
            Some("comment marker can start a number")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidSyntax {
                comment_marker,
                quote,
                reason: reason.to_string(),
            }),
            None => Ok(Syntax {
                comment_marker,
                quote,
            }),
        }
    }

    pub fn get_comment_marker(&self) -> char {
        self.comment_marker
    }

    pub fn get_quote(&self) -> char {
        self.quote
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Syntax {
            comment_marker: '#',
            quote: '"',
        }
    }
}
