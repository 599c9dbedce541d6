use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use order_record::Syntax;

/// Workaround for parsing the different log level
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// The format in which parsed records are printed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// CLI interface for parsing order records. Each input file holds one record.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// The log level
    #[arg(short, value_enum, long, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// The files with the records to parse. Reads a single record from stdin if omitted.
    #[arg(short, long)]
    pub input_file: Vec<PathBuf>,

    /// The output format of the parsed records
    #[arg(short, value_enum, long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Treat input after the last pair as an error
    #[arg(long)]
    pub strict: bool,

    /// The character starting a line comment
    #[arg(long, default_value_t = '#')]
    pub comment_marker: char,

    /// The delimiter of the record name
    #[arg(long, default_value_t = '"')]
    pub quote: char,
}

impl Options {
    /// Returns the syntax selected by the options.
    pub fn get_syntax(&self) -> Result<Syntax> {
        Syntax::new(self.comment_marker, self.quote).context("Invalid comment marker or quote")
    }

    /// Dumps the options to the log.
    pub fn dump_to_log(&self) {
        info!("log_level: {:?}", self.log_level);
        info!("input_file: {:?}", self.input_file);
        info!("format: {:?}", self.format);
        info!("strict: {}", self.strict);
        info!("comment_marker: {:?}", self.comment_marker);
        info!("quote: {:?}", self.quote);
    }
}
