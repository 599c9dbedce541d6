mod format;
mod options;

use std::{
    io::{Read, Write},
    path::Path,
    time::Instant,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{error, info, warn, LevelFilter};
use options::{Options, OutputFormat};
use order_record::{parse_with, Syntax};

/// Parses the program arguments.
fn parse_args() -> Result<Options> {
    let options = Options::parse();
    Ok(options)
}

/// Initializes the program logging
///
/// # Arguments
/// * `filter` - The log level filter, i.e., the minimum log level to be logged.
fn initialize_logging(filter: LevelFilter) {
    env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(filter)
        .init();
}

/// Reads the content of the given file.
fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Reads the complete standard input.
fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read stdin")?;

    Ok(content)
}

/// Parses a single record and prints it. Returns false if the record could not be parsed.
///
/// # Arguments
/// * `source` - The name of the input, used for messages.
/// * `content` - The text of the record.
/// * `options` - The program options.
/// * `syntax` - The reserved characters of the format.
fn process_record(
    source: &str,
    content: &str,
    options: &Options,
    syntax: &Syntax,
) -> Result<bool> {
    let parsed = match parse_with(content, syntax) {
        Ok(parsed) => parsed,
        Err(err) => {
            error!("{}:{}:{}: {}", source, err.get_line(), err.get_column(), err);
            return Ok(false);
        }
    };

    if let Some(trailing) = parsed.get_trailing() {
        if options.strict {
            error!(
                "{}: unconsumed input at offset {}: {:?}",
                source,
                trailing.get_position(),
                trailing.get_text()
            );
            return Ok(false);
        }

        warn!(
            "{}: input after the last pair is ignored: {:?}",
            source,
            trailing.get_text()
        );
    }

    let record = parsed.get_record();
    let output = match options.format {
        OutputFormat::Text => format::format_text(record),
        OutputFormat::Json => format::format_json(source, record, parsed.is_fully_consumed())?,
    };
    println!("{}", output);

    Ok(true)
}

/// Parses all inputs selected by the options and fails if any of them could not be parsed.
///
/// # Arguments
/// * `options` - The program options.
fn parse_inputs(options: &Options) -> Result<()> {
    let syntax = options.get_syntax()?;
    let t = Instant::now();
    let mut num_failed: usize = 0;

    if options.input_file.is_empty() {
        let content = read_stdin()?;
        if !process_record("stdin", &content, options, &syntax)? {
            num_failed += 1;
        }
    } else {
        for path in options.input_file.iter() {
            info!("Parse {}...", path.display());
            let content = read_file(path)?;
            let source = path.display().to_string();
            if !process_record(&source, &content, options, &syntax)? {
                num_failed += 1;
            }
        }
    }

    info!("Parsing...DONE in {} ms", t.elapsed().as_millis());

    if num_failed > 0 {
        bail!("{} input(s) could not be parsed", num_failed);
    }

    Ok(())
}

/// Runs the program.
fn run_program() -> Result<()> {
    let options = parse_args()?;
    initialize_logging(LevelFilter::from(options.log_level));

    info!("Options:");
    options.dump_to_log();
    info!("-------");

    parse_inputs(&options)
}

fn main() {
    match run_program() {
        Ok(()) => {
            info!("SUCCESS");
        }
        Err(err) => {
            error!("Error: {}", err);
            error!("FAILED");

            std::process::exit(-1);
        }
    }
}
