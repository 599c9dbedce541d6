use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unexpected token at offset {position}. Expected {expected}")]
    UnexpectedToken { expected: String, position: usize },

    #[error("Unexpected end of input at offset {position}. Expected {expected}")]
    UnexpectedEndOfInput { expected: String, position: usize },

    #[error("Unconsumed input at offset {position}")]
    TrailingInput { position: usize },

    #[error("Invalid syntax {comment_marker:?}/{quote:?}: {reason}")]
    InvalidSyntax {
        comment_marker: char,
        quote: char,
        reason: String,
    },
}

impl Error {
    /// Returns the description of what was expected at the failure position.
    pub fn get_expected(&self) -> &str {
        match self {
            Error::UnexpectedToken { expected, .. } => expected,
            Error::UnexpectedEndOfInput { expected, .. } => expected,
            Error::TrailingInput { .. } => "end of input",
            Error::InvalidSyntax { .. } => "distinct comment marker and quote",
        }
    }

    /// Returns the byte offset into the input at which the error occurred, or none if the
    /// error is not tied to the input.
    pub fn get_position(&self) -> Option<usize> {
        match self {
            Error::UnexpectedToken { position, .. } => Some(*position),
            Error::UnexpectedEndOfInput { position, .. } => Some(*position),
            Error::TrailingInput { position } => Some(*position),
            Error::InvalidSyntax { .. } => None,
        }
    }
}

/// The result type used in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A fatal parse failure together with the diagnostic data captured at the failure point.
///
/// The display form is the diagnostic line, e.g.
/// `Error! Expecting quoted string here: "abc 1 0 0.0"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error! Expecting {} here: \"{remainder}\"", .error.get_expected())]
pub struct ParseError {
    #[source]
    error: Error,

    /// The byte offset of the failure.
    position: usize,

    /// The byte offset of the end of the input.
    end: usize,

    /// 1-based line of the failure.
    line: usize,

    /// 1-based column (in characters) of the failure.
    column: usize,

    /// The unconsumed input from the failure position to the end.
    remainder: String,
}

impl ParseError {
    pub(crate) fn new(
        error: Error,
        position: usize,
        end: usize,
        line: usize,
        column: usize,
        remainder: String,
    ) -> ParseError {
        ParseError {
            error,
            position,
            end,
            line,
            column,
            remainder,
        }
    }

    /// Returns the underlying error kind.
    pub fn get_error(&self) -> &Error {
        &self.error
    }

    /// Returns the description of what was expected.
    pub fn get_expected(&self) -> &str {
        self.error.get_expected()
    }

    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_end(&self) -> usize {
        self.end
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_column(&self) -> usize {
        self.column
    }

    /// Returns the input that was left unconsumed at the failure position.
    pub fn get_remainder(&self) -> &str {
        &self.remainder
    }

    /// Returns true if the parse failed because the input ended too early.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self.error, Error::UnexpectedEndOfInput { .. })
    }
}
