mod char_reader;
mod pair;
mod parser;
mod quoted_string;
mod skipper;

use log::debug;

use self::parser::Parser;

use crate::{DataPair, Error, ErrorReporter, ParseError, Record, Result, Syntax};

pub use char_reader::CharReader;
pub use skipper::Skipper;

pub(crate) use skipper::is_line_terminator;

/// Input that is left after the last pair of a successfully parsed record and that is
/// neither white space nor a complete comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailingInput<'a> {
    position: usize,
    text: &'a str,
}

impl<'a> TrailingInput<'a> {
    /// Returns the byte offset at which the trailing input starts.
    pub fn get_position(&self) -> usize {
        self.position
    }

    /// Returns the trailing input.
    pub fn get_text(&self) -> &'a str {
        self.text
    }
}

/// The result of a successful parse.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<'a> {
    record: Record,
    trailing: Option<TrailingInput<'a>>,
}

impl<'a> Parsed<'a> {
    /// Returns the parsed record.
    pub fn get_record(&self) -> &Record {
        &self.record
    }

    /// Returns the parsed record and drops the trailing input information.
    pub fn into_record(self) -> Record {
        self.record
    }

    /// Returns true if nothing but white space and comments follows the record.
    pub fn is_fully_consumed(&self) -> bool {
        self.trailing.is_none()
    }

    /// Returns the trailing input, if there is any.
    pub fn get_trailing(&self) -> Option<&TrailingInput<'a>> {
        self.trailing.as_ref()
    }

    /// Returns the record, or an error if the record is followed by further input.
    pub fn into_strict(self) -> Result<Record> {
        match self.trailing {
            Some(trailing) => Err(Error::TrailingInput {
                position: trailing.position,
            }),
            None => Ok(self.record),
        }
    }
}

/// Parses a single record from the given input using the default syntax.
///
/// # Arguments
/// * `input` - The text of the record.
pub fn parse(input: &str) -> std::result::Result<Parsed<'_>, ParseError> {
    parse_with(input, &Syntax::default())
}

/// Parses a single record from the given input.
///
/// # Arguments
/// * `input` - The text of the record.
/// * `syntax` - The reserved characters of the format.
pub fn parse_with<'a>(
    input: &'a str,
    syntax: &Syntax,
) -> std::result::Result<Parsed<'a>, ParseError> {
    RecordParser::new(input, syntax).parse()
}

/// The record parser reads the id, the name, the declared count and then exactly as many
/// data pairs as declared.
///
/// There is no backtracking. The first token that cannot be read aborts the parse and is
/// reported with the remaining input.
pub struct RecordParser<'a> {
    /// The parser used to read the tokens.
    parser: Parser<'a>,

    reporter: ErrorReporter<'a>,
}

impl<'a> RecordParser<'a> {
    /// Creates a new record parser for the given input.
    ///
    /// # Arguments
    /// * `input` - The text of the record.
    /// * `syntax` - The reserved characters of the format.
    pub fn new(input: &'a str, syntax: &Syntax) -> Self {
        RecordParser {
            parser: Parser::new(input, syntax),
            reporter: ErrorReporter::new(input),
        }
    }

    /// Parses the record. The input after the last pair is not consumed, but reported as
    /// trailing input unless it only consists of white space and comments.
    pub fn parse(mut self) -> std::result::Result<Parsed<'a>, ParseError> {
        let record = match self.read_record() {
            Ok(record) => record,
            Err(err) => return Err(self.reporter.report(err)),
        };

        let trailing = self.parser.find_trailing_input().map(|position| TrailingInput {
            position,
            text: &self.parser.reader.get_input()[position..],
        });

        match &trailing {
            Some(trailing) => debug!(
                "Record {} is followed by unconsumed input at {}",
                record.get_id(),
                trailing.position
            ),
            None => debug!("Record {} fully consumed the input", record.get_id()),
        }

        Ok(Parsed { record, trailing })
    }

    /// Reads the record fields in order and stops at the first failure.
    fn read_record(&mut self) -> Result<Record> {
        let id = self.parser.read_u32("id")?;
        debug!("Read record {}...", id);

        let name = self.parser.read_quoted_string()?;
        let declared_count = self.parser.read_u32("item count")?;
        let items = self.read_items(declared_count)?;

        debug!("Read record {}...DONE with {} items", id, items.len());

        Ok(Record::new(id, name.to_owned(), declared_count, items))
    }

    /// Reads exactly `count` data pairs.
    ///
    /// # Arguments
    /// * `count` - The number of pairs declared by the record.
    fn read_items(&mut self, count: u32) -> Result<Vec<DataPair>> {
        // every pair needs at least one byte, so the remaining input bounds the capacity
        let capacity = (count as usize).min(self.parser.remaining_len());
        let mut items = Vec::with_capacity(capacity);

        for _ in 0..count {
            items.push(self.parser.read_pair()?);
        }

        Ok(items)
    }
}
