mod error;
pub mod reader;
mod record;
mod report;
mod syntax;

pub use error::*;
pub use reader::{parse, parse_with, Parsed, RecordParser, TrailingInput};
pub use record::*;
pub use report::ErrorReporter;
pub use syntax::Syntax;
