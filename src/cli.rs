use std::io::{BufRead, Write};

use log::warn;

use crate::config::Config;
use crate::error::Result;
use crate::report::Report;
use crate::sample::Sample;

pub const NO_INPUT: &str = "No valid integers entered.";

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Reported(Report),
    NoInput,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Reported(_) => 0,
            Outcome::NoInput => 1,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> String {
    let mut line = String::new();
    if let Err(err) = input.read_line(&mut line) {
        warn!("Unable to read input line. Reason: `{}`.", err);
        line.clear();
    }
    line
}

/// Run one calculator session: print the banner and prompt, read a single
/// line from `input` and write the report to `output`.
///
/// Only failures to write `output` are returned as errors. An unreadable or
/// empty line ends the session with [Outcome::NoInput].
pub fn run<R, W>(config: &Config, mut input: R, mut output: W) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", config.banner)?;
    writeln!(output)?;
    write!(output, "{}", config.prompt)?;
    output.flush()?;

    let line = read_line(&mut input);
    let sample = Sample::parse(&line, config.max_inputs);
    if sample.is_empty() {
        writeln!(output, "{}", NO_INPUT)?;
        return Ok(Outcome::NoInput);
    }

    let report = Report::new(sample);
    writeln!(output, "{}", report)?;
    output.flush()?;
    Ok(Outcome::Reported(report))
}
